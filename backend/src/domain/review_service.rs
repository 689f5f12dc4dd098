//! Review posting and listing service.
//!
//! Wraps the review port with the screen-facing failure policy: posting
//! reports a boolean, listings degrade to empty so the details screen always
//! renders.

use std::sync::Arc;

use tracing::warn;

use super::place::PlaceId;
use super::ports::ReviewRepository;
use super::review::{NewReview, ReviewWithAuthor};

/// Screen-facing reviews API.
#[derive(Clone)]
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Post a review; `false` when the store rejected it.
    pub async fn add(&self, review: &NewReview) -> bool {
        match self.repository.add(review).await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "review insert failed");
                false
            }
        }
    }

    /// Every review for the place, newest first.
    ///
    /// A store failure renders as an empty feed rather than failing the
    /// screen; the miss is logged so the degradation stays observable.
    pub async fn for_location(&self, place: PlaceId) -> Vec<ReviewWithAuthor> {
        match self.repository.for_location(place).await {
            Ok(reviews) => reviews,
            Err(error) => {
                warn!(%error, "review listing failed; rendering an empty feed");
                Vec::new()
            }
        }
    }
}
