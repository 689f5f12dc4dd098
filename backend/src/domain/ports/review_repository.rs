//! Port for review persistence.

use async_trait::async_trait;

use crate::domain::account::UserId;
use crate::domain::place::PlaceId;
use crate::domain::review::{NewReview, ReviewWithAuthor};

use super::store_error::StoreError;

/// Port for the reviews table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review with a store-assigned UTC timestamp.
    ///
    /// The adapter performs no rating-range or comment checks; validated
    /// input is the caller's contract (see
    /// [`NewReview::try_new`]).
    async fn add(&self, review: &NewReview) -> Result<(), StoreError>;

    /// Every review for the place joined to its author, newest first,
    /// unrestricted length.
    async fn for_location(&self, place: PlaceId) -> Result<Vec<ReviewWithAuthor>, StoreError>;

    /// Number of reviews the user has posted.
    async fn count_for_user(&self, user: UserId) -> Result<u64, StoreError>;
}

/// Fixture implementation for tests that don't exercise reviews.
///
/// Inserts are discarded, listings are empty, counts are zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewRepository;

#[async_trait]
impl ReviewRepository for FixtureReviewRepository {
    async fn add(&self, _review: &NewReview) -> Result<(), StoreError> {
        Ok(())
    }

    async fn for_location(&self, _place: PlaceId) -> Result<Vec<ReviewWithAuthor>, StoreError> {
        Ok(Vec::new())
    }

    async fn count_for_user(&self, _user: UserId) -> Result<u64, StoreError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_discards_writes_and_lists_nothing() {
        let repo = FixtureReviewRepository;
        let draft = NewReview::try_new(UserId::new(1), PlaceId::new(1), 5, "Great")
            .expect("valid draft");

        repo.add(&draft).await.expect("fixture add");
        assert!(
            repo.for_location(PlaceId::new(1))
                .await
                .expect("fixture list")
                .is_empty()
        );
    }
}
