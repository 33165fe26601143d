//! Seat identifiers, seat rotation math, and the deal phase label.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;

pub type PlayerId = u8; // 0..=4

/// Phases of one deal, in the order the engine advances through them.
/// `Redeal` and `GameOver` are terminal for an engine instance; a redeal is
/// handled by discarding the engine and constructing a fresh one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Seats bid in rotation until exactly one non-pass bid stands.
    Bid,
    /// The declarer absorbs the kitty and discards three cards.
    Exchange,
    /// The declarer may change trump at the cost of a raised bid.
    TrumpChange,
    /// Every seat confirms its hand or claims a miss-deal.
    MissDealCheck,
    /// The declarer designates the friend.
    FriendCall,
    /// Ten tricks of five cards each.
    Play,
    /// The deal is void; a new engine must be constructed.
    Redeal,
    /// Ten tricks complete, scoring finalized.
    GameOver,
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 4 → 0).
#[inline]
pub fn player_increment(player: PlayerId) -> PlayerId {
    (player + 1) % PLAYERS as PlayerId
}
