//! Catalog filtering and search.
//!
//! Pure, stateless transforms over place slices. Nothing here touches the
//! store; the discovery screen recomputes the view from the full catalog on
//! every criteria change.

use super::place::Place;

/// Sentinel the picker UI sends to disable a filter dimension.
pub const ALL_SENTINEL: &str = "All";

/// Derive the region grouping key from a comma-delimited address.
///
/// Takes the third comma-delimited segment (trimmed) when the address has at
/// least three segments, otherwise the last one. A single-segment address
/// derives itself.
///
/// # Examples
/// ```
/// use backend::domain::derive_region;
///
/// assert_eq!(derive_region("Str. Exemplu 1, Cluj-Napoca, Cluj"), "Cluj");
/// assert_eq!(derive_region("Piata Sfatului, Brasov"), "Brasov");
/// assert_eq!(derive_region("Bucuresti"), "Bucuresti");
/// ```
pub fn derive_region(address: &str) -> &str {
    let mut segments = address.split(',').map(str::trim);
    let count = address.split(',').count();
    if count >= 3 {
        segments.nth(2).unwrap_or("")
    } else {
        segments.next_back().unwrap_or("")
    }
}

/// Region dimension of the discovery filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    /// Match every region.
    All,
    /// Match places whose derived region equals this value exactly.
    Named(String),
}

impl RegionFilter {
    /// Parse the picker value, honouring the `"All"` sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }

    fn matches(&self, place: &Place) -> bool {
        match self {
            Self::All => true,
            Self::Named(region) => derive_region(&place.address) == region,
        }
    }
}

/// Minimum-rating dimension of the discovery filter.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingFilter {
    /// Match every rating.
    All,
    /// Match places rated at or above this threshold.
    AtLeast(f32),
}

impl RatingFilter {
    /// Parse the picker value, honouring the `"All"` sentinel.
    ///
    /// Unparseable numbers fall back to [`RatingFilter::All`] rather than
    /// silently hiding every place.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            return Self::All;
        }
        value.parse::<f32>().map_or(Self::All, Self::AtLeast)
    }

    fn matches(&self, place: &Place) -> bool {
        match self {
            Self::All => true,
            Self::AtLeast(threshold) => place.rating >= *threshold,
        }
    }
}

/// Combined discovery criteria: free text, region, and minimum rating.
///
/// The three predicates are AND-combined; an empty query matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryFilter {
    /// Case-insensitive substring matched against name or address.
    pub query: String,
    /// Region dimension.
    pub region: RegionFilter,
    /// Minimum-rating dimension.
    pub min_rating: RatingFilter,
}

impl Default for DiscoveryFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: RegionFilter::All,
            min_rating: RatingFilter::All,
        }
    }
}

impl DiscoveryFilter {
    /// True when the place passes all three predicates.
    pub fn matches(&self, place: &Place) -> bool {
        self.matches_query(place) && self.region.matches(place) && self.min_rating.matches(place)
    }

    /// Filter a slice, preserving the input order.
    pub fn apply<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places.iter().filter(|place| self.matches(place)).collect()
    }

    fn matches_query(&self, place: &Place) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        place.name.to_lowercase().contains(&needle)
            || place.address.to_lowercase().contains(&needle)
    }
}

/// Region picker options: `"All"` followed by the sorted distinct derived
/// regions across the given places.
pub fn region_options(places: &[Place]) -> Vec<String> {
    let mut regions: Vec<String> = places
        .iter()
        .map(|place| derive_region(&place.address).to_owned())
        .collect();
    regions.sort();
    regions.dedup();

    let mut options = Vec::with_capacity(regions.len() + 1);
    options.push(ALL_SENTINEL.to_owned());
    options.extend(regions);
    options
}
