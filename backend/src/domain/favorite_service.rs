//! Favourite toggling and lookup service.
//!
//! Wraps the favourite port with the screen-facing failure policy: toggles
//! surface a typed error, existence checks degrade to `false` so a card can
//! always render its heart icon.

use std::sync::Arc;

use tracing::warn;

use super::account::UserId;
use super::error::DomainError;
use super::favorite::FavoriteToggle;
use super::place::PlaceId;
use super::ports::{FavoriteRepository, StoreError};

/// Screen-facing favourites API.
#[derive(Clone)]
pub struct FavoriteService {
    repository: Arc<dyn FavoriteRepository>,
}

impl FavoriteService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn FavoriteRepository>) -> Self {
        Self { repository }
    }

    /// Flip the favourite state for the pair.
    pub async fn toggle(
        &self,
        user: UserId,
        place: PlaceId,
    ) -> Result<FavoriteToggle, DomainError> {
        self.repository
            .toggle(user, place)
            .await
            .map_err(|error| match error {
                StoreError::Conflict { .. } => {
                    DomainError::conflict("Favourite changed concurrently, try again")
                }
                other => {
                    warn!(%other, "favourite toggle failed");
                    DomainError::store_unavailable("Could not update favourites right now")
                }
            })
    }

    /// Whether the pair is currently favourited.
    ///
    /// A store failure renders as `false` rather than failing the screen;
    /// the miss is logged so the degradation stays observable.
    pub async fn is_favorite(&self, user: UserId, place: PlaceId) -> bool {
        match self.repository.is_favorite(user, place).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, "favourite check failed; rendering as not favourited");
                false
            }
        }
    }
}
