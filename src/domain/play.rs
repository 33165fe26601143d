//! A single card placement during trick play, and the declarer's
//! friend-designation call.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::PlayerId;

/// How the card entered the trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
enum PlayKind {
    /// Thrown into an already-opened trick.
    Follow,
    /// Opens a trick. `suit_led` is what followers must chase; it is `None`
    /// only when the joker is led without naming a suit.
    Lead { suit_led: Option<Suit> },
    /// Opens a trick with the Ripper, compelling the joker out.
    JokerCall,
}

/// One play: a seat placing a card, with its leading context when it opened
/// the trick. Constructed through [`Play::follow`], [`Play::lead`],
/// [`Play::lead_joker`] and [`Play::joker_call`] so the suit-led context can
/// never contradict the card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    player: PlayerId,
    card: Card,
    kind: PlayKind,
}

impl Play {
    /// A card thrown into an already-opened trick.
    pub fn follow(player: PlayerId, card: Card) -> Self {
        Play {
            player,
            card,
            kind: PlayKind::Follow,
        }
    }

    /// A card opening a trick. The suit led is the card's own suit; leading
    /// the joker this way names no suit (use [`Play::lead_joker`] to name
    /// one).
    pub fn lead(player: PlayerId, card: Card) -> Self {
        Play {
            player,
            card,
            kind: PlayKind::Lead {
                suit_led: card.suit(),
            },
        }
    }

    /// The joker opening a trick, naming the suit followers must chase, or
    /// none at all.
    pub fn lead_joker(player: PlayerId, suit_led: Option<Suit>) -> Self {
        Play {
            player,
            card: Card::Joker,
            kind: PlayKind::Lead { suit_led },
        }
    }

    /// The Ripper opening a trick as a Joker-Call. The engine rejects this
    /// play when `card` is not the Ripper of the finalized trump.
    pub fn joker_call(player: PlayerId, card: Card) -> Self {
        Play {
            player,
            card,
            kind: PlayKind::JokerCall,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn card(&self) -> Card {
        self.card
    }

    pub fn is_leading_play(&self) -> bool {
        matches!(
            self.kind,
            PlayKind::Lead { .. } | PlayKind::JokerCall
        )
    }

    pub fn is_joker_call(&self) -> bool {
        matches!(self.kind, PlayKind::JokerCall)
    }

    /// The suit followers of this trick must chase. `None` for a follow
    /// play, and for a joker led without a named suit.
    pub fn suit_led(&self) -> Option<Suit> {
        match self.kind {
            PlayKind::Follow => None,
            PlayKind::Lead { suit_led } => suit_led,
            PlayKind::JokerCall => self.card.suit(),
        }
    }
}

/// The declarer's friend designation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum FriendCall {
    /// Whoever holds (and plays) this card is the friend.
    CardSpecified(Card),
    /// Whoever wins the first trick is the friend.
    FirstTrickWinner,
    /// The declarer plays alone, doubling the stakes.
    NoFriend,
}
