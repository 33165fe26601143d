//! Domain layer: pure Mighty rule types and functions.

pub mod bidding;
pub mod cards_logic;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod perspective;
pub mod play;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use bidding::{is_valid_bid, BidEntry};
pub use cards_logic::{
    hand_has_suit, is_miss_deal, is_trump_card, trump_to_mighty, trump_to_ripper,
};
pub use cards_types::{Card, Rank, Suit, Trump};
pub use dealing::{deal_deck, full_deck, validate_deal};
pub use perspective::Perspective;
pub use play::{FriendCall, Play};
pub use scoring::{gamepoint_rewards, gamepoint_transfer_unit};
pub use state::{player_increment, Phase, PlayerId};
pub use tricks::{is_valid_move, legal_plays, next_actor, trick_winner};
