//! Review data model.
//!
//! Reviews are append-only: created by the signed-in user, never edited or
//! deleted. A user may review the same place any number of times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::UserId;
use super::error::DomainError;
use super::place::PlaceId;

/// Store-assigned review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Star rating authored with a review: a whole number of stars, 1-5.
///
/// The store keeps ratings as a real; this type is the authoring-side
/// boundary that keeps out-of-range values from ever reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReviewRating(u8);

impl ReviewRating {
    /// Validate and wrap a star count.
    pub fn try_new(stars: u8) -> Result<Self, DomainError> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(DomainError::validation_failure(
                "Rating must be between 1 and 5 stars",
            ))
        }
    }

    /// Star count as stored (a real number).
    pub fn as_stored(self) -> f64 {
        f64::from(self.0)
    }
}

impl From<ReviewRating> for u8 {
    fn from(value: ReviewRating) -> Self {
        value.0
    }
}

impl TryFrom<u8> for ReviewRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// A review draft ready for insertion.
///
/// Construction through [`NewReview::try_new`] is the UI-boundary validator;
/// the store itself performs no range or emptiness checks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    /// Author.
    pub user_id: UserId,
    /// Reviewed place.
    pub place_id: PlaceId,
    /// Star rating.
    pub rating: ReviewRating,
    /// Free-text comment.
    pub comment: String,
}

impl NewReview {
    /// Validate sign-off input into a draft.
    ///
    /// Rejects blank comments and, via [`ReviewRating::try_new`], ratings
    /// outside 1-5.
    pub fn try_new(
        user_id: UserId,
        place_id: PlaceId,
        stars: u8,
        comment: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let comment = comment.into();
        if comment.trim().is_empty() {
            return Err(DomainError::validation_failure(
                "Please write a few words before posting",
            ));
        }
        Ok(Self {
            user_id,
            place_id,
            rating: ReviewRating::try_new(stars)?,
            comment,
        })
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Store-assigned identity.
    pub id: ReviewId,
    /// Author.
    pub user_id: UserId,
    /// Reviewed place.
    pub place_id: PlaceId,
    /// Rating as stored (a real; authored as whole stars).
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
    /// Store-assigned creation instant, UTC.
    pub created_at: DateTime<Utc>,
}

/// A review joined to its author for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewWithAuthor {
    /// The review itself.
    pub review: Review,
    /// Author display name at read time.
    pub author_name: String,
    /// Author avatar URI at read time.
    pub author_avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn rating_accepts_whole_stars_in_range(#[case] stars: u8) {
        let rating = ReviewRating::try_new(stars).expect("valid rating");
        assert_eq!(rating.as_stored(), f64::from(stars));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rating_rejects_out_of_range_stars(#[case] stars: u8) {
        let err = ReviewRating::try_new(stars).expect_err("invalid rating");
        assert_eq!(err.code(), ErrorCode::ValidationFailure);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn draft_rejects_blank_comments(#[case] comment: &str) {
        let err = NewReview::try_new(UserId::new(1), PlaceId::new(1), 4, comment)
            .expect_err("blank comment rejected");
        assert_eq!(err.code(), ErrorCode::ValidationFailure);
    }

    #[rstest]
    fn draft_accepts_valid_input() {
        let draft = NewReview::try_new(UserId::new(1), PlaceId::new(2), 5, "Loved it")
            .expect("valid draft");
        assert_eq!(draft.place_id, PlaceId::new(2));
        assert_eq!(u8::from(draft.rating), 5);
    }
}
