//! Trick-play rules: turn order, move legality, legal-play enumeration, and
//! trick-winner resolution.

use crate::domain::cards_logic::{
    hand_has_suit, is_trump_card, trump_to_mighty, trump_to_ripper,
};
use crate::domain::cards_types::{Card, Rank, Suit, Trump};
use crate::domain::play::Play;
use crate::domain::rules::{PLAYERS, TRICKS_PER_DEAL};
use crate::domain::state::{player_increment, PlayerId};

/// The seat expected to act: the leader when the trick is empty, otherwise
/// the seat after the most recent play.
pub fn next_actor(current_trick: &[Play], leader: PlayerId) -> PlayerId {
    match current_trick.last() {
        None => leader,
        Some(last) => player_increment(last.player()),
    }
}

/// Whether a play is legal in the ongoing trick. `trick_number` is 0-based;
/// the suit to follow is read from the trick's leading play.
///
/// Checked in order: the card must be held; leading the very first trick
/// forbids a trump card while a non-trump alternative exists and forbids a
/// Joker-Call; the Mighty is always playable; a Joker-Call lead compels a
/// held joker out (except on the first trick); the joker is otherwise always
/// playable; a led suit must be followed while the hand can.
pub fn is_valid_move(
    trick_number: usize,
    current_trick: &[Play],
    trump: Trump,
    hand: &[Card],
    play: &Play,
) -> bool {
    if !hand.contains(&play.card()) {
        return false;
    }

    let Some(led) = current_trick.first() else {
        if trick_number == 0 {
            if is_trump_card(play.card(), trump)
                && hand.iter().any(|&c| !is_trump_card(c, trump))
            {
                return false;
            }
            if play.is_joker_call() {
                return false;
            }
        }
        return true;
    };

    if play.card() == trump_to_mighty(trump) {
        return true;
    }

    if led.is_joker_call() && trick_number != 0 && hand.iter().any(|c| c.is_joker()) {
        return play.card().is_joker();
    }

    if play.card().is_joker() {
        return true;
    }

    match led.suit_led() {
        None => true,
        Some(suit_led) => {
            if hand_has_suit(hand, suit_led) {
                play.card().suit() == Some(suit_led)
            } else {
                true
            }
        }
    }
}

/// The winning seat of a completed five-card trick. `trick_number` is
/// 0-based.
///
/// The Mighty wins outright wherever it was played. A played joker wins
/// outright unless the trick was led by a Joker-Call or is the first or
/// last trick. Otherwise the strongest trump wins, then the strongest card
/// of the suit led; if both groups are empty (a joker led without a named
/// suit and nobody trumped), the strongest card of the first non-empty suit
/// in canonical order wins.
///
/// # Panics
///
/// Panics when no winner exists, which is unreachable for any trick built
/// from cards of the deck.
pub fn trick_winner(trump: Trump, trick_number: usize, trick: &[Play]) -> PlayerId {
    debug_assert_eq!(trick.len(), PLAYERS);

    let mighty = trump_to_mighty(trump);
    if let Some(play) = trick.iter().find(|p| p.card() == mighty) {
        return play.player();
    }

    let first_or_last = trick_number == 0 || trick_number == TRICKS_PER_DEAL - 1;
    if !trick[0].is_joker_call() && !first_or_last {
        if let Some(play) = trick.iter().find(|p| p.card().is_joker()) {
            return play.player();
        }
    }

    let suit_led = trick[0].suit_led();
    for target_suit in [trump.suit(), suit_led].into_iter().flatten() {
        if let Some(winner) = strongest_in_suit(trick, target_suit) {
            return winner;
        }
    }

    // Joker led with no named suit and nobody trumped: fall back to the
    // canonical suit scan.
    for suit in Suit::ALL {
        if let Some(winner) = strongest_in_suit(trick, suit) {
            return winner;
        }
    }

    panic!(
        "no winning card in trick: trump={trump:?} trick_number={trick_number} trick={trick:?}"
    );
}

fn strongest_in_suit(trick: &[Play], suit: Suit) -> Option<PlayerId> {
    trick
        .iter()
        .filter(|p| p.card().suit() == Some(suit))
        .max_by_key(|p| p.card().rank().map_or(0, Rank::power))
        .map(|p| p.player())
}

/// Every structurally distinct legal play for the acting seat: each held
/// card as a follow or lead, every suit-led choice (or none) when leading
/// the joker, and the Joker-Call variant of the Ripper, filtered through
/// [`is_valid_move`].
pub fn legal_plays(
    player: PlayerId,
    hand: &[Card],
    trick_number: usize,
    current_trick: &[Play],
    trump: Trump,
) -> Vec<Play> {
    let ripper = trump_to_ripper(trump);
    let mut candidates = Vec::new();
    for &card in hand {
        if current_trick.is_empty() {
            if card.is_joker() {
                candidates.push(Play::lead_joker(player, None));
                for suit in Suit::ALL {
                    candidates.push(Play::lead_joker(player, Some(suit)));
                }
            } else {
                candidates.push(Play::lead(player, card));
                if card == ripper {
                    candidates.push(Play::joker_call(player, card));
                }
            }
        } else {
            candidates.push(Play::follow(player, card));
        }
    }
    candidates.retain(|play| is_valid_move(trick_number, current_trick, trump, hand, play));
    candidates
}
