//! Fixed table and deck constants for a deal of Mighty.

/// Seats at the table.
pub const PLAYERS: usize = 5;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 10;

/// Undealt cards claimed by the declarer during exchange.
pub const KITTY_SIZE: usize = 3;

/// Standard 52-card deck plus one joker.
pub const DECK_SIZE: usize = 53;

/// Tricks in a completed deal.
pub const TRICKS_PER_DEAL: usize = 10;

/// Point cards in the deck: Ten, Jack, Queen, King, Ace of each suit.
pub const POINT_CARDS_IN_DECK: usize = 20;

/// Bid floor at the start of bidding.
pub const OPENING_MINIMUM_BID: u8 = 13;

/// Bid floor after every seat passes once.
pub const LOWERED_MINIMUM_BID: u8 = 12;

/// No bid may exceed the number of point cards in the deck.
pub const MAX_BID: u8 = 20;
