//! State to representative city and coordinates.
//!
//! Lookups are exact-match on the state name. Weather for a state is read at
//! the coordinates of its representative city.

use std::collections::BTreeMap;

use cropcare_types::Region;

/// Built-in `(state, city, latitude, longitude)` rows in display order.
const BUILTIN_REGIONS: [(&str, &str, f64, f64); 28] = [
    ("Andhra Pradesh", "Hyderabad", 17.3850, 78.4867),
    ("Arunachal Pradesh", "Itanagar", 27.0844, 93.6053),
    ("Assam", "Guwahati", 26.1445, 91.7362),
    ("Bihar", "Patna", 25.5941, 85.1376),
    ("Chhattisgarh", "Raipur", 21.2514, 81.6296),
    ("Goa", "Panaji", 15.4909, 73.8278),
    ("Gujarat", "Ahmedabad", 23.0225, 72.5714),
    ("Haryana", "Chandigarh", 30.7333, 76.7794),
    ("Himachal Pradesh", "Shimla", 31.1048, 77.1734),
    ("Jharkhand", "Ranchi", 23.3441, 85.3096),
    ("Karnataka", "Bangalore", 12.9716, 77.5946),
    ("Kerala", "Thiruvananthapuram", 8.5241, 76.9366),
    ("Madhya Pradesh", "Bhopal", 23.2599, 77.4126),
    ("Maharashtra", "Mumbai", 19.0760, 72.8777),
    ("Manipur", "Imphal", 24.8170, 93.9368),
    ("Meghalaya", "Shillong", 25.5788, 91.8933),
    ("Mizoram", "Aizawl", 23.7271, 92.7176),
    ("Nagaland", "Kohima", 25.6751, 94.1086),
    ("Odisha", "Bhubaneswar", 20.2961, 85.8245),
    ("Punjab", "Chandigarh", 30.7333, 76.7794),
    ("Rajasthan", "Jaipur", 26.9124, 75.7873),
    ("Sikkim", "Gangtok", 27.3389, 88.6065),
    ("Tamil Nadu", "Chennai", 13.0827, 80.2707),
    ("Telangana", "Hyderabad", 17.3850, 78.4867),
    ("Tripura", "Agartala", 23.8315, 91.2868),
    ("Uttar Pradesh", "Lucknow", 26.8467, 80.9462),
    ("Uttarakhand", "Dehradun", 30.3165, 78.0322),
    ("West Bengal", "Kolkata", 22.5726, 88.3639),
];

/// Ordered table of known regions with a name index.
#[derive(Debug, Clone)]
pub struct RegionTable {
    /// Regions in display order.
    regions: Vec<Region>,
    /// State name to position in `regions`.
    index: BTreeMap<String, usize>,
}

impl RegionTable {
    /// Build a table from regions in the order they should be listed.
    ///
    /// A later duplicate of a state name replaces the earlier row in lookups
    /// but both stay in the listing; the built-in table has no duplicates.
    pub fn new(regions: Vec<Region>) -> Self {
        let index = regions
            .iter()
            .enumerate()
            .map(|(i, region)| (region.state.clone(), i))
            .collect();
        Self { regions, index }
    }

    /// The 28 built-in Indian states.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_REGIONS
                .iter()
                .map(|&(state, city, latitude, longitude)| Region {
                    state: state.to_owned(),
                    city: city.to_owned(),
                    latitude,
                    longitude,
                })
                .collect(),
        )
    }

    /// Look up a region by exact state name.
    pub fn get(&self, state: &str) -> Option<&Region> {
        self.index.get(state).and_then(|&i| self.regions.get(i))
    }

    /// State names in display order.
    pub fn state_names(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.state.clone()).collect()
    }

    /// Iterate regions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_28_states_in_order() {
        let table = RegionTable::builtin();
        assert_eq!(table.len(), 28);
        let names = table.state_names();
        assert_eq!(names.first().map(String::as_str), Some("Andhra Pradesh"));
        assert_eq!(names.last().map(String::as_str), Some("West Bengal"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = RegionTable::builtin();
        let haryana = table.get("Haryana").unwrap();
        assert_eq!(haryana.city, "Chandigarh");
        assert_eq!(haryana.latitude, 30.7333);
        assert!(table.get("haryana").is_none());
        assert!(table.get("Atlantis").is_none());
    }

    #[test]
    fn states_sharing_a_city_keep_separate_rows() {
        let table = RegionTable::builtin();
        assert_eq!(table.get("Telangana").unwrap().city, "Hyderabad");
        assert_eq!(table.get("Andhra Pradesh").unwrap().city, "Hyderabad");
    }
}
