//! Card game logic: suit lookups, the trump-dependent special cards, and the
//! miss-deal qualification rule.

use crate::domain::cards_types::{Card, Rank, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit() == Some(suit))
}

/// Whether a card belongs to the trump suit. The joker is never a trump
/// card, and no card is trump in a no-trump deal.
pub fn is_trump_card(card: Card, trump: Trump) -> bool {
    match trump.suit() {
        Some(trump_suit) => card.suit() == Some(trump_suit),
        None => false,
    }
}

/// The Mighty card for a given trump: Ace of Diamonds when Spades is trump,
/// Ace of Spades otherwise.
pub fn trump_to_mighty(trump: Trump) -> Card {
    if trump == Trump::Spades {
        Card::new(Suit::Diamonds, Rank::Ace)
    } else {
        Card::new(Suit::Spades, Rank::Ace)
    }
}

/// The Ripper card for a given trump: Three of Spades when Clubs is trump,
/// Three of Clubs otherwise.
pub fn trump_to_ripper(trump: Trump) -> Card {
    if trump == Trump::Clubs {
        Card::new(Suit::Spades, Rank::Three)
    } else {
        Card::new(Suit::Clubs, Rank::Three)
    }
}

/// A hand qualifies as a miss-deal when it holds at most one point card,
/// not counting the Mighty.
pub fn is_miss_deal(hand: &[Card], mighty: Card) -> bool {
    let point_card_count = hand
        .iter()
        .filter(|&&c| c.is_pointcard() && c != mighty)
        .count();
    point_card_count <= 1
}
