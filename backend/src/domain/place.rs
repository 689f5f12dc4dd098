//! Place data model.
//!
//! Places come exclusively from the bundled catalog and are immutable at
//! runtime. The AI "vibe" rewrite of a description lives in view state only
//! and never flows back into these types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable place identifier: the 1-based position of the record in the
/// bundled dataset, fixed for the lifetime of a data release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(i64);

impl PlaceId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// WGS84 coordinates as carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180].
    pub long: f64,
}

/// A point of interest from the catalog.
///
/// ## Invariants
/// - `rating` is within 0.0..=5.0 (checked at catalog load).
/// - `coordinates` are finite and within WGS84 ranges (checked at load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Positional identity within the dataset release.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Comma-delimited postal address; the region grouping key is derived
    /// from its segments.
    pub address: String,
    /// Aggregate rating, 0-5 with one decimal of precision expected.
    pub rating: f32,
    /// One-or-two sentence description shown on cards.
    pub short_description: String,
    /// URI of the card image.
    pub image_url: String,
    /// Map position.
    pub coordinates: Coordinates,
}
