//! Port for favourite persistence.

use async_trait::async_trait;

use crate::domain::account::UserId;
use crate::domain::favorite::FavoriteToggle;
use crate::domain::place::PlaceId;

use super::store_error::StoreError;

/// Port for the favourites table.
///
/// At most one row exists per (user, place) pair; the constraint lives in
/// the store itself, not only in application logic, so a racing duplicate
/// insert fails cleanly instead of corrupting state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Flip the favourite state of the pair: delete the row when present,
    /// insert one otherwise. The existence check and the write happen in a
    /// single transaction.
    async fn toggle(&self, user: UserId, place: PlaceId) -> Result<FavoriteToggle, StoreError>;

    /// Existence test with no side effects.
    async fn is_favorite(&self, user: UserId, place: PlaceId) -> Result<bool, StoreError>;

    /// Number of favourites the user holds.
    async fn count_for_user(&self, user: UserId) -> Result<u64, StoreError>;
}

/// Fixture implementation for tests that don't exercise favourites.
///
/// Every toggle reports an insert, existence tests miss, counts are zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavoriteRepository;

#[async_trait]
impl FavoriteRepository for FixtureFavoriteRepository {
    async fn toggle(&self, _user: UserId, _place: PlaceId) -> Result<FavoriteToggle, StoreError> {
        Ok(FavoriteToggle::Added)
    }

    async fn is_favorite(&self, _user: UserId, _place: PlaceId) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn count_for_user(&self, _user: UserId) -> Result<u64, StoreError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_reports_an_insert_and_no_rows() {
        let repo = FixtureFavoriteRepository;
        let user = UserId::new(1);
        let place = PlaceId::new(1);

        assert_eq!(
            repo.toggle(user, place).await.expect("fixture toggle"),
            FavoriteToggle::Added
        );
        assert!(!repo.is_favorite(user, place).await.expect("fixture check"));
        assert_eq!(repo.count_for_user(user).await.expect("fixture count"), 0);
    }
}
