//! Profile statistics.
//!
//! The profile screen always renders something: a count the store could not
//! produce shows as zero. Internally the two cases stay distinct, with a
//! [`CountOutcome`] recording whether zero means "empty" or "the store
//! failed"; only the public [`UserStats`] collapses them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::account::UserId;
use super::ports::{FavoriteRepository, ReviewRepository};

/// A count with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountOutcome {
    /// The store answered.
    Exact(u64),
    /// The store failed; the screen shows zero.
    Unavailable,
}

impl CountOutcome {
    /// The value the screen renders.
    pub const fn collapsed(self) -> u64 {
        match self {
            Self::Exact(count) => count,
            Self::Unavailable => 0,
        }
    }
}

/// Per-count provenance for a user's stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStatsProbe {
    /// Review count outcome.
    pub reviews: CountOutcome,
    /// Favourite count outcome.
    pub favorites: CountOutcome,
}

impl UserStatsProbe {
    /// Collapse both outcomes into the rendered stats.
    pub const fn collapse(self) -> UserStats {
        UserStats {
            reviews: self.reviews.collapsed(),
            favorites: self.favorites.collapsed(),
        }
    }
}

/// Counts rendered on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Number of reviews the user has posted.
    pub reviews: u64,
    /// Number of favourites the user holds.
    pub favorites: u64,
}

/// Aggregates the two independent counts for the profile screen.
#[derive(Clone)]
pub struct ProfileStatsService {
    reviews: Arc<dyn ReviewRepository>,
    favorites: Arc<dyn FavoriteRepository>,
}

impl ProfileStatsService {
    /// Create a service over the two count sources.
    pub fn new(reviews: Arc<dyn ReviewRepository>, favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { reviews, favorites }
    }

    /// Both counts with provenance preserved.
    pub async fn probe(&self, user: UserId) -> UserStatsProbe {
        let reviews = match self.reviews.count_for_user(user).await {
            Ok(count) => CountOutcome::Exact(count),
            Err(error) => {
                warn!(%error, %user, "review count failed; rendering zero");
                CountOutcome::Unavailable
            }
        };
        let favorites = match self.favorites.count_for_user(user).await {
            Ok(count) => CountOutcome::Exact(count),
            Err(error) => {
                warn!(%error, %user, "favourite count failed; rendering zero");
                CountOutcome::Unavailable
            }
        };
        UserStatsProbe { reviews, favorites }
    }

    /// The rendered stats, failures collapsed to zero.
    pub async fn stats(&self, user: UserId) -> UserStats {
        self.probe(user).await.collapse()
    }
}
