//! Favourite toggling outcomes.

use serde::{Deserialize, Serialize};

/// Result of toggling a favourite: a strict 2-cycle.
///
/// Toggling a pair that has no row inserts one and reports [`Added`];
/// toggling again deletes it and reports [`Removed`].
///
/// [`Added`]: FavoriteToggle::Added
/// [`Removed`]: FavoriteToggle::Removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteToggle {
    /// The pair had no row; one was inserted.
    Added,
    /// The pair had a row; it was deleted.
    Removed,
}

impl FavoriteToggle {
    /// True when the toggle left the place favourited.
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}
