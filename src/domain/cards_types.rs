//! Core card-related types: Card, Rank, Suit, Trump

use serde::{Deserialize, Serialize};

use crate::errors::TrumpConversionError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Canonical suit order, used for stable sorting and for the final
    /// suit scan in trick resolution.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Trump {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Trump {
    /// The trump suit, if this deal has one.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Trump::Clubs => Some(Suit::Clubs),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Spades => Some(Suit::Spades),
            Trump::NoTrump => None,
        }
    }

    pub fn is_no_trump(self) -> bool {
        self == Trump::NoTrump
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Trump::Clubs,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Spades => Trump::Spades,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = TrumpConversionError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        trump.suit().ok_or(TrumpConversionError)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Relative strength of the rank: Two..King map to 1..12, Ace to 13.
    /// Only meaningful for larger-than/smaller-than comparisons; the derived
    /// `Ord` agrees with it.
    pub fn power(self) -> u8 {
        self as u8 + 1
    }

    /// Ten, Jack, Queen, King, and Ace are the scoring ranks.
    pub fn is_pointcard_rank(self) -> bool {
        self >= Rank::Ten
    }
}

/// A card from the 53-card Mighty deck: one of the 52 standard cards, or the
/// single joker. The joker is the only card without a suit and rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Standard { suit: Suit, rank: Rank },
    Joker,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card::Standard { suit, rank }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(suit),
            Card::Joker => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }

    pub fn is_pointcard(self) -> bool {
        match self {
            Card::Standard { rank, .. } => rank.is_pointcard_rank(),
            Card::Joker => false,
        }
    }
}

// Note: Ord on Card is only for stable sorting: suit order C<D<H<S then rank
// order, with the joker after everything. Do not use for trick resolution or
// game logic comparisons involving trump/lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (
                Card::Standard { suit, rank },
                Card::Standard {
                    suit: other_suit,
                    rank: other_rank,
                },
            ) => suit.cmp(other_suit).then(rank.cmp(other_rank)),
            (Card::Standard { .. }, Card::Joker) => std::cmp::Ordering::Less,
            (Card::Joker, Card::Standard { .. }) => std::cmp::Ordering::Greater,
            (Card::Joker, Card::Joker) => std::cmp::Ordering::Equal,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
