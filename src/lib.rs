#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for one complete deal of the 5-player trick-taking card game
//! Mighty: bidding, kitty exchange, trump finalization, miss-deal
//! adjudication, friend designation, trick play with the Joker and
//! Joker-Call mechanics, and end-of-deal scoring.
//!
//! The engine consumes already-validated typed inputs and produces
//! per-phase result codes plus mutated state; decision-making, rendering,
//! and transport belong to external drivers.

pub mod domain;
pub mod engine;
pub mod errors;

#[cfg(test)]
mod tests_engine;

// Re-exports for public API
pub use domain::{Card, FriendCall, Perspective, Phase, Play, PlayerId, Rank, Suit, Trump};
pub use engine::GameEngine;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
