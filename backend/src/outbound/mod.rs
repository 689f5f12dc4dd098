//! Driven adapters: implementations of the domain ports.
//!
//! - [`persistence`] — Diesel/SQLite store adapters.
//! - [`vibe`] — reqwest chat-completion adapter.

pub mod persistence;
pub mod vibe;
