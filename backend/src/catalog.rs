//! The bundled location catalog.
//!
//! The catalog is a read-only dataset compiled into the binary. Records in
//! the shipped file carry no explicit ids; the loader assigns stable 1-based
//! positional ids at parse time, fixed for the lifetime of a data release.
//! This is the canonical identity scheme; a dataset release that wants
//! explicit ids needs a new loader rather than a silent behaviour change.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::place::{Coordinates, Place, PlaceId};

/// Dataset shipped with the application.
static BUNDLED_DATASET: &str = include_str!("../data/locations.json");

static BUNDLED_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Errors raised while loading a catalog dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("catalog file could not be read: {message}")]
    Io {
        /// Underlying I/O detail.
        message: String,
    },
    /// The dataset is not valid JSON of the expected shape.
    #[error("catalog dataset failed to parse: {message}")]
    Parse {
        /// Underlying decode detail.
        message: String,
    },
    /// A record carries out-of-range values.
    #[error("catalog record {index} (\"{name}\") is invalid: {message}")]
    InvalidRecord {
        /// 1-based position of the offending record.
        index: usize,
        /// Record name, for the log line.
        name: String,
        /// What was out of range.
        message: String,
    },
}

/// On-disk record shape. Identity is positional, so no id field exists.
#[derive(Debug, Deserialize)]
struct PlaceRecord {
    name: String,
    address: String,
    rating: f32,
    short_description: String,
    image_url: String,
    coordinates: Coordinates,
}

/// The static, read-only list of places.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// The catalog compiled into the binary, parsed once per process.
    ///
    /// # Panics
    ///
    /// Panics when the bundled dataset is invalid, which is a build defect
    /// rather than a runtime condition.
    pub fn bundled() -> &'static Self {
        BUNDLED_CATALOG.get_or_init(|| {
            Self::from_json_str(BUNDLED_DATASET)
                .unwrap_or_else(|error| panic!("bundled location dataset is invalid: {error}"))
        })
    }

    /// Parse a dataset release, assigning 1-based positional ids.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PlaceRecord> = serde_json::from_str(json).map_err(|error| {
            CatalogError::Parse {
                message: error.to_string(),
            }
        })?;

        let places = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let index = position + 1;
                validate_record(index, &record)?;
                Ok(Place {
                    id: PlaceId::new(index as i64),
                    name: record.name,
                    address: record.address,
                    rating: record.rating,
                    short_description: record.short_description,
                    image_url: record.image_url,
                    coordinates: record.coordinates,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { places })
    }

    /// Load a dataset from a file path.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|error| CatalogError::Io {
            message: error.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Look up a place by its positional id.
    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        let index = usize::try_from(id.get().checked_sub(1)?).ok()?;
        self.places.get(index)
    }

    /// All places in dataset order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places in this release.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True for an empty release.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

fn validate_record(index: usize, record: &PlaceRecord) -> Result<(), CatalogError> {
    let invalid = |message: &str| CatalogError::InvalidRecord {
        index,
        name: record.name.clone(),
        message: message.to_owned(),
    };

    if record.name.trim().is_empty() {
        return Err(invalid("name must not be blank"));
    }
    if !record.rating.is_finite() || !(0.0..=5.0).contains(&record.rating) {
        return Err(invalid("rating must be within 0 and 5"));
    }
    let Coordinates { lat, long } = record.coordinates;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(invalid("latitude must be within [-90, 90]"));
    }
    if !long.is_finite() || !(-180.0..=180.0).contains(&long) {
        return Err(invalid("longitude must be within [-180, 180]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_with_positional_ids() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());

        let first = catalog.get(PlaceId::new(1)).expect("first place exists");
        assert_eq!(first.id, PlaceId::new(1));

        let last_id = PlaceId::new(catalog.len() as i64);
        assert!(catalog.get(last_id).is_some());
        assert!(catalog.get(PlaceId::new(catalog.len() as i64 + 1)).is_none());
    }

    #[test]
    fn ids_follow_dataset_order() {
        let json = r#"[
            {"name": "A", "address": "X, Y, Z", "rating": 4.0,
             "short_description": "", "image_url": "",
             "coordinates": {"lat": 1.0, "long": 2.0}},
            {"name": "B", "address": "Q", "rating": 3.5,
             "short_description": "", "image_url": "",
             "coordinates": {"lat": 1.0, "long": 2.0}}
        ]"#;

        let catalog = Catalog::from_json_str(json).expect("valid dataset");
        let ids: Vec<i64> = catalog.places().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn out_of_range_rating_is_rejected_with_the_record_name() {
        let json = r#"[
            {"name": "Broken", "address": "X", "rating": 5.1,
             "short_description": "", "image_url": "",
             "coordinates": {"lat": 1.0, "long": 2.0}}
        ]"#;

        let error = Catalog::from_json_str(json).expect_err("invalid rating");
        assert!(matches!(error, CatalogError::InvalidRecord { index: 1, .. }));
        assert!(error.to_string().contains("Broken"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let json = r#"[
            {"name": "Far", "address": "X", "rating": 4.0,
             "short_description": "", "image_url": "",
             "coordinates": {"lat": 91.0, "long": 2.0}}
        ]"#;

        assert!(Catalog::from_json_str(json).is_err());
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        let error = Catalog::from_json_str("not json").expect_err("parse failure");
        assert!(matches!(error, CatalogError::Parse { .. }));
    }

    #[test]
    fn datasets_load_from_disk_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("places.json");
        fs::write(
            &path,
            r#"[{"name": "A", "address": "X, Y, Z", "rating": 4.0,
                 "short_description": "", "image_url": "",
                 "coordinates": {"lat": 1.0, "long": 2.0}}]"#,
        )
        .expect("dataset written");

        let catalog = Catalog::from_path(&path).expect("valid dataset");
        assert_eq!(catalog.len(), 1);

        let missing = Catalog::from_path(&dir.path().join("absent.json"))
            .expect_err("missing file fails");
        assert!(matches!(missing, CatalogError::Io { .. }));
    }

    #[test]
    fn zero_and_negative_ids_never_resolve() {
        let catalog = Catalog::bundled();
        assert!(catalog.get(PlaceId::new(0)).is_none());
        assert!(catalog.get(PlaceId::new(-3)).is_none());
    }
}
