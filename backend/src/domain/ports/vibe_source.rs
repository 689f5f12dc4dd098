//! Capability port for AI "vibe" descriptions.
//!
//! A vibe is a one-shot creative rewrite of a place's short description.
//! The port is infallible by contract: adapters convert every upstream
//! failure into the fixed error reply instead of raising, and the caller
//! tells the two apart with [`is_error_reply`]. Generated text is view
//! state only; it is never written back to the catalog or the store.

use async_trait::async_trait;

use crate::domain::place::Place;

/// Reply returned when generation fails for any reason.
pub const VIBE_ERROR_REPLY: &str =
    "Sorry, we couldn't generate a vibe for this place right now. Please try again later.";

/// Marker prefix shared by every failure reply.
const VIBE_ERROR_PREFIX: &str = "Sorry, we couldn't generate";

/// True when the text is a failure reply rather than generated content.
pub fn is_error_reply(text: &str) -> bool {
    text.starts_with(VIBE_ERROR_PREFIX)
}

/// The slice of a place the prompt is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceContext {
    /// Place name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Description currently shown on screen (possibly an earlier rewrite).
    pub current_description: String,
}

impl PlaceContext {
    /// Capture the prompt context from a catalog place.
    pub fn for_place(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            address: place.address.clone(),
            current_description: place.short_description.clone(),
        }
    }
}

/// Port for one-shot description generation.
///
/// A screen that is abandoned mid-request should simply drop the future;
/// the operation holds no shared state, so ignoring a late result is safe.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VibeSource: Send + Sync {
    /// Generate a replacement description, or the error reply on failure.
    async fn describe(&self, place: &PlaceContext) -> String;
}

/// Fixture implementation that echoes the current description.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVibeSource;

#[async_trait]
impl VibeSource for FixtureVibeSource {
    async fn describe(&self, place: &PlaceContext) -> String {
        place.current_description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_error_reply_is_recognised_as_an_error() {
        assert!(is_error_reply(VIBE_ERROR_REPLY));
    }

    #[test]
    fn generated_text_is_not_an_error() {
        assert!(!is_error_reply("A sun-drenched terrace with the city's best espresso."));
    }

    #[tokio::test]
    async fn fixture_echoes_the_current_description() {
        let source = FixtureVibeSource;
        let context = PlaceContext {
            name: "Meron Coffee".to_owned(),
            address: "Str. Emil Isac 2, Cluj-Napoca, Cluj".to_owned(),
            current_description: "Specialty coffee.".to_owned(),
        };
        assert_eq!(source.describe(&context).await, "Specialty coffee.");
    }
}
