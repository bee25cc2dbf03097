//! Soil Estimator: default nutrient profiles per state.
//!
//! [`SoilTable::estimate`] is total. States without a profile, including
//! names that are not regions at all, get [`DEFAULT_SOIL`].

use std::collections::BTreeMap;

use cropcare_types::SoilProfile;
use tracing::debug;

/// Profile used for any state without its own entry.
pub const DEFAULT_SOIL: SoilProfile = soil(65.0, 32.0, 40.0, 6.8);

/// Helper to build a [`SoilProfile`].
const fn soil(n: f64, p: f64, k: f64, ph: f64) -> SoilProfile {
    SoilProfile { n, p, k, ph }
}

/// Built-in per-state profiles.
const BUILTIN_PROFILES: [(&str, SoilProfile); 16] = [
    ("Punjab", soil(85.0, 45.0, 50.0, 7.2)),
    ("Haryana", soil(80.0, 42.0, 48.0, 7.5)),
    ("Uttar Pradesh", soil(75.0, 38.0, 45.0, 7.0)),
    ("Bihar", soil(70.0, 35.0, 40.0, 6.8)),
    ("West Bengal", soil(85.0, 40.0, 55.0, 6.5)),
    ("Maharashtra", soil(65.0, 30.0, 35.0, 7.8)),
    ("Karnataka", soil(60.0, 28.0, 32.0, 6.2)),
    ("Tamil Nadu", soil(70.0, 32.0, 38.0, 6.8)),
    ("Andhra Pradesh", soil(68.0, 30.0, 36.0, 7.0)),
    ("Telangana", soil(68.0, 30.0, 36.0, 7.0)),
    ("Gujarat", soil(55.0, 25.0, 30.0, 8.0)),
    ("Rajasthan", soil(45.0, 20.0, 25.0, 8.2)),
    ("Madhya Pradesh", soil(60.0, 28.0, 35.0, 7.2)),
    ("Odisha", soil(75.0, 35.0, 42.0, 6.5)),
    ("Kerala", soil(80.0, 38.0, 50.0, 5.8)),
    ("Assam", soil(90.0, 45.0, 60.0, 5.5)),
];

/// Per-state soil profiles with a fallback record.
#[derive(Debug, Clone)]
pub struct SoilTable {
    profiles: BTreeMap<String, SoilProfile>,
    fallback: SoilProfile,
}

impl SoilTable {
    /// Build a table from explicit profiles and a fallback.
    pub const fn new(profiles: BTreeMap<String, SoilProfile>, fallback: SoilProfile) -> Self {
        Self { profiles, fallback }
    }

    /// The built-in profiles with [`DEFAULT_SOIL`] as fallback.
    pub fn builtin() -> Self {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|&(state, profile)| (state.to_owned(), profile))
            .collect();
        Self::new(profiles, DEFAULT_SOIL)
    }

    /// Estimate the soil profile for `state`.
    ///
    /// Never fails: unknown states get the fallback record.
    pub fn estimate(&self, state: &str) -> SoilProfile {
        self.profiles.get(state).copied().unwrap_or_else(|| {
            debug!(state, "No soil profile for state, using default");
            self.fallback
        })
    }

    /// Whether `state` has its own profile.
    pub fn has_profile(&self, state: &str) -> bool {
        self.profiles.contains_key(state)
    }
}
