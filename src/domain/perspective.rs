//! A player's view of the deal: everything that seat may legitimately see.
//!
//! A `Perspective` is an owned snapshot, never a live reference into engine
//! state, so decision-making agents can keep, clone, and speculate over it
//! without touching the authoritative deal. The kitty is present only in the
//! declarer's perspective.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::BidEntry;
use crate::domain::cards_types::{Card, Suit, Trump};
use crate::domain::play::{FriendCall, Play};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::tricks::{legal_plays, next_actor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perspective {
    /// The seat this snapshot was built for.
    pub player: PlayerId,

    /// This seat's current hand.
    pub hand: Vec<Card>,
    /// The kitty, visible to the declarer only.
    pub kitty: Option<Vec<Card>>,
    /// Point cards collected so far, per seat.
    pub point_cards: [Vec<Card>; PLAYERS],

    /// Completed tricks in order, five plays each.
    pub completed_tricks: Vec<Vec<Play>>,
    /// Winner of each completed trick.
    pub trick_winners: Vec<PlayerId>,
    /// The ongoing trick, up to four plays.
    pub current_trick: Vec<Play>,
    /// Suit led of each completed trick; kept separately so a joker lead's
    /// named suit survives the trick being archived.
    pub previous_suit_leds: Vec<Option<Suit>>,
    /// Suit led of the ongoing trick, if it has opened.
    pub suit_led: Option<Suit>,

    pub declarer: Option<PlayerId>,
    pub trump: Option<Trump>,
    pub bid: Option<u8>,
    /// The friend seat, once revealed.
    pub friend: Option<PlayerId>,
    pub called_friend: Option<FriendCall>,
    /// Whether the most recent accepted play revealed the friend.
    pub friend_just_revealed: bool,

    pub mighty: Option<Card>,
    pub ripper: Option<Card>,

    /// Which seats have confirmed their hands in the miss-deal check.
    pub hand_confirmed: [bool; PLAYERS],

    pub next_bidder: PlayerId,
    pub minimum_bid: u8,
    /// The standing highest bid, as (trump, value).
    pub highest_bid: Option<(Trump, u8)>,
    pub bids: [Option<BidEntry>; PLAYERS],

    pub phase: Phase,
    /// Leader of the ongoing (or next) trick.
    pub leader: Option<PlayerId>,

    pub declarer_won: Option<bool>,
    pub declarer_team_points: Option<u8>,
    pub gamepoints_rewarded: Option<[i32; PLAYERS]>,

    /// Remaining hand sizes of every seat, an aid for agents.
    pub hand_sizes: [u8; PLAYERS],
}

impl Perspective {
    /// The seat expected to play, during the play phase.
    pub fn next_player(&self) -> Option<PlayerId> {
        if self.phase != Phase::Play {
            return None;
        }
        self.leader
            .map(|leader| next_actor(&self.current_trick, leader))
    }

    /// Legal plays for this seat. Empty unless the deal is in the play phase
    /// and it is this seat's turn.
    pub fn legal_plays(&self) -> Vec<Play> {
        if self.next_player() != Some(self.player) {
            return Vec::new();
        }
        let Some(trump) = self.trump else {
            return Vec::new();
        };
        legal_plays(
            self.player,
            &self.hand,
            self.completed_tricks.len(),
            &self.current_trick,
            trump,
        )
    }
}
