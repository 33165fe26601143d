//! Deterministic dealing of the 53-card deck into five hands and the kitty.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, KITTY_SIZE, PLAYERS};
use crate::errors::DealError;

/// The full 53-card deck in canonical order: each suit Two..Ace, then the
/// joker.
pub fn full_deck() -> Vec<Card> {
    let ranks = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in ranks {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::Joker);
    deck
}

/// Shuffle and deal the deck for one deal: ten sorted cards per seat and a
/// three-card kitty. Deterministic given a seed, so deals can be reproduced
/// in tests and replays.
pub fn deal_deck(seed: u64) -> ([Vec<Card>; PLAYERS], Vec<Card>) {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let hands = std::array::from_fn(|player| {
        let start = player * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        hand
    });
    let kitty = deck[PLAYERS * HAND_SIZE..].to_vec();
    (hands, kitty)
}

/// Check that hands and kitty together form the exact 53-card deck.
///
/// Five hands of ten unique cards plus a three-card kitty cover the whole
/// card universe, so uniqueness of all 53 is sufficient.
pub fn validate_deal(hands: &[Vec<Card>; PLAYERS], kitty: &[Card]) -> Result<(), DealError> {
    if hands.iter().any(|hand| hand.len() != HAND_SIZE) {
        return Err(DealError::WrongHandSize);
    }
    if kitty.len() != KITTY_SIZE {
        return Err(DealError::WrongKittySize);
    }
    let mut seen = std::collections::HashSet::new();
    for card in hands.iter().flatten().chain(kitty.iter()) {
        if !seen.insert(card) {
            return Err(DealError::DuplicateCard);
        }
    }
    Ok(())
}
