//! Immutable reference data for the CropCare recommendation service.
//!
//! Every table here is built once at process start and only read afterwards,
//! so a single [`ReferenceData`] can be shared behind an `Arc` by all request
//! handlers without locking.
//!
//! # Modules
//!
//! - [`regions`] -- State to representative city and coordinates (28 states).
//! - [`soil`] -- Per-state default soil nutrients with a global fallback.
//! - [`crops`] -- Crop metadata keyed by lower-cased label.
//! - [`store`] -- [`ReferenceData`], the bundle of all three tables.

pub mod crops;
pub mod regions;
pub mod soil;
pub mod store;

// Re-export primary types at crate root.
pub use crops::CropCatalog;
pub use regions::RegionTable;
pub use soil::{DEFAULT_SOIL, SoilTable};
pub use store::ReferenceData;
