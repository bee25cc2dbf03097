//! The bundle of reference tables shared by every request.

use crate::crops::CropCatalog;
use crate::regions::RegionTable;
use crate::soil::SoilTable;

/// All static reference tables.
///
/// Constructed once at startup and shared read-only (typically behind an
/// `Arc`). Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// State to city and coordinates.
    pub regions: RegionTable,
    /// State to default soil profile.
    pub soil: SoilTable,
    /// Crop label to agronomic metadata.
    pub crops: CropCatalog,
}

impl ReferenceData {
    /// Assemble reference data from individual tables.
    pub const fn new(regions: RegionTable, soil: SoilTable, crops: CropCatalog) -> Self {
        Self {
            regions,
            soil,
            crops,
        }
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        Self::new(
            RegionTable::builtin(),
            SoilTable::builtin(),
            CropCatalog::builtin(),
        )
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_soil_profile_belongs_to_a_known_region() {
        let data = ReferenceData::builtin();
        let with_profile = data
            .regions
            .iter()
            .filter(|r| data.soil.has_profile(&r.state))
            .count();
        assert_eq!(with_profile, 16);
    }
}
