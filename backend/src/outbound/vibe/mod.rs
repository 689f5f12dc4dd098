//! Remote "vibe" description adapter.
//!
//! One-shot chat-completion client behind the domain's
//! [`VibeSource`](crate::domain::ports::VibeSource) port. No retry, no
//! streaming, no caching: a screen asks once and either renders the rewrite
//! or the fixed error reply.

mod dto;
mod http_source;

pub use http_source::{CompletionVibeSource, VibeConfig, VibeSourceError};
