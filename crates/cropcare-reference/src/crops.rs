//! Crop metadata catalog.
//!
//! Keys are lower-cased when the catalog is built and every lookup lower-cases
//! its argument, so `RICE`, `Rice` and `rice` all resolve to the same entry.

use std::collections::BTreeMap;

use cropcare_types::CropMetadata;

/// Built-in `(label, season, duration, water requirement, soil type)` rows.
const BUILTIN_CROPS: [(&str, &str, &str, &str, &str); 6] = [
    ("rice", "Kharif", "120-150 days", "High", "Clay, loamy"),
    ("wheat", "Rabi", "120-150 days", "Medium", "Loamy, clay loamy"),
    ("maize", "Kharif/Rabi", "80-120 days", "Medium", "Well-drained loamy"),
    ("cotton", "Kharif", "180-200 days", "Medium-High", "Black cotton soil"),
    ("sugarcane", "Year-round", "12-18 months", "Very High", "Rich loamy"),
    ("jute", "Kharif", "120-150 days", "High", "Alluvial"),
];

/// Case-insensitive crop metadata lookup.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    entries: BTreeMap<String, CropMetadata>,
}

impl CropCatalog {
    /// Build a catalog from `(label, metadata)` pairs. Labels are normalized
    /// to lower case; on a case-insensitive collision the last entry wins.
    pub fn new(entries: impl IntoIterator<Item = (String, CropMetadata)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, metadata)| (label.to_lowercase(), metadata))
                .collect(),
        }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CROPS.iter().map(
            |&(label, season, duration, water, soil_type)| {
                (
                    label.to_owned(),
                    CropMetadata::new(season, duration, water, soil_type),
                )
            },
        ))
    }

    /// Look up metadata for `label`, ignoring case.
    pub fn get(&self, label: &str) -> Option<&CropMetadata> {
        self.entries.get(&label.to_lowercase())
    }

    /// Metadata for `label`, or all-`N/A` metadata when the crop is unknown.
    pub fn metadata_or_unavailable(&self, label: &str) -> CropMetadata {
        self.get(label)
            .cloned()
            .unwrap_or_else(CropMetadata::unavailable)
    }

    /// Iterate `(normalized label, metadata)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CropMetadata)> {
        self.entries.iter().map(|(label, meta)| (label.as_str(), meta))
    }

    /// Number of catalogued crops.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cropcare_types::NOT_AVAILABLE;

    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let catalog = CropCatalog::builtin();
        let lower = catalog.get("rice").unwrap();
        let upper = catalog.get("RICE").unwrap();
        let mixed = catalog.get("RiCe").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.season, "Kharif");
    }

    #[test]
    fn construction_normalizes_keys() {
        let catalog = CropCatalog::new([(
            String::from("Coffee"),
            CropMetadata::new("Perennial", "3-4 years", "High", "Laterite"),
        )]);
        assert!(catalog.get("coffee").is_some());
        assert_eq!(catalog.iter().next().map(|(label, _)| label), Some("coffee"));
    }

    #[test]
    fn unknown_crop_yields_sentinel_metadata() {
        let catalog = CropCatalog::builtin();
        let meta = catalog.metadata_or_unavailable("mango");
        assert_eq!(meta.season, NOT_AVAILABLE);
        assert_eq!(meta.duration, NOT_AVAILABLE);
        assert_eq!(meta.water_requirement, NOT_AVAILABLE);
        assert_eq!(meta.soil_type, NOT_AVAILABLE);
    }

    #[test]
    fn iteration_is_in_label_order() {
        let catalog = CropCatalog::builtin();
        let labels: Vec<&str> = catalog.iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec!["cotton", "jute", "maize", "rice", "sugarcane", "wheat"]
        );
    }
}
