//! The stateful orchestrator for one deal of Mighty.
//!
//! A `GameEngine` owns all mutable state of a single deal and exposes one
//! mutating operation per phase. Every operation validates the phase, the
//! actor, and the content of the command before touching state; a rejected
//! call leaves the engine unchanged. An external driver reads the current
//! phase, obtains a decision from the seat's player or agent, and calls the
//! matching operation. A `Redeal` outcome means this instance is void and a
//! fresh engine replaces it.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::bidding::{is_valid_bid, BidEntry};
use crate::domain::cards_logic::{is_miss_deal, trump_to_mighty, trump_to_ripper};
use crate::domain::cards_types::{Card, Suit, Trump};
use crate::domain::dealing::{deal_deck, validate_deal};
use crate::domain::perspective::Perspective;
use crate::domain::play::{FriendCall, Play};
use crate::domain::rules::{
    KITTY_SIZE, LOWERED_MINIMUM_BID, MAX_BID, OPENING_MINIMUM_BID, PLAYERS, TRICKS_PER_DEAL,
};
use crate::domain::scoring::gamepoint_rewards;
use crate::domain::state::{player_increment, Phase, PlayerId};
use crate::domain::tricks::{is_valid_move, legal_plays, next_actor, trick_winner};
use crate::errors::{
    BidError, DealError, ExchangeError, FriendCallError, MissDealError, PlayError,
    TrumpChangeError,
};

pub struct GameEngine {
    pub(crate) hands: [Vec<Card>; PLAYERS],
    pub(crate) kitty: Vec<Card>,
    pub(crate) point_cards: [Vec<Card>; PLAYERS],

    pub(crate) completed_tricks: Vec<Vec<Play>>,
    pub(crate) trick_winners: Vec<PlayerId>,
    pub(crate) current_trick: Vec<Play>,
    // Kept separately so a joker lead's named suit survives the trick being
    // archived.
    pub(crate) previous_suit_leds: Vec<Option<Suit>>,

    pub(crate) declarer: Option<PlayerId>,
    pub(crate) trump: Option<Trump>,
    pub(crate) bid: Option<u8>,
    // Only set once the friend has been revealed.
    pub(crate) friend: Option<PlayerId>,
    pub(crate) called_friend: Option<FriendCall>,
    pub(crate) friend_just_revealed: bool,

    pub(crate) mighty: Option<Card>,
    pub(crate) ripper: Option<Card>,

    pub(crate) hand_confirmed: [bool; PLAYERS],

    pub(crate) next_bidder: PlayerId,
    pub(crate) minimum_bid: u8,
    pub(crate) highest_bid: Option<(Trump, u8)>,
    pub(crate) bids: [Option<BidEntry>; PLAYERS],

    pub(crate) phase: Phase,
    pub(crate) leader: Option<PlayerId>,

    pub(crate) declarer_won: Option<bool>,
    pub(crate) declarer_team_points: Option<u8>,
    pub(crate) gamepoints_rewarded: Option<[i32; PLAYERS]>,
}

impl GameEngine {
    /// Shuffle with system entropy and deal a fresh deal.
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Deal deterministically from a seed, for reproducible deals.
    pub fn from_seed(seed: u64) -> Self {
        let (hands, kitty) = deal_deck(seed);
        Self::from_parts(hands, kitty)
    }

    /// Start from an externally fixed deal, validating the 53-card
    /// partition.
    pub fn from_deal(hands: [Vec<Card>; PLAYERS], kitty: Vec<Card>) -> Result<Self, DealError> {
        validate_deal(&hands, &kitty)?;
        Ok(Self::from_parts(hands, kitty))
    }

    fn from_parts(hands: [Vec<Card>; PLAYERS], kitty: Vec<Card>) -> Self {
        GameEngine {
            hands,
            kitty,
            point_cards: Default::default(),
            completed_tricks: Vec::with_capacity(TRICKS_PER_DEAL),
            trick_winners: Vec::with_capacity(TRICKS_PER_DEAL),
            current_trick: Vec::with_capacity(PLAYERS),
            previous_suit_leds: Vec::with_capacity(TRICKS_PER_DEAL),
            declarer: None,
            trump: None,
            bid: None,
            friend: None,
            called_friend: None,
            friend_just_revealed: false,
            mighty: None,
            ripper: None,
            hand_confirmed: [false; PLAYERS],
            next_bidder: 0,
            minimum_bid: OPENING_MINIMUM_BID,
            highest_bid: None,
            bids: [None; PLAYERS],
            phase: Phase::Bid,
            leader: None,
            declarer_won: None,
            declarer_team_points: None,
            gamepoints_rewarded: None,
        }
    }

    // --- Read-only queries -------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn next_bidder(&self) -> PlayerId {
        self.next_bidder
    }

    pub fn minimum_bid(&self) -> u8 {
        self.minimum_bid
    }

    pub fn declarer(&self) -> Option<PlayerId> {
        self.declarer
    }

    pub fn trump(&self) -> Option<Trump> {
        self.trump
    }

    pub fn bid(&self) -> Option<u8> {
        self.bid
    }

    pub fn mighty(&self) -> Option<Card> {
        self.mighty
    }

    pub fn ripper(&self) -> Option<Card> {
        self.ripper
    }

    pub fn leader(&self) -> Option<PlayerId> {
        self.leader
    }

    pub fn friend(&self) -> Option<PlayerId> {
        self.friend
    }

    pub fn called_friend(&self) -> Option<FriendCall> {
        self.called_friend
    }

    /// Whether the most recent accepted play revealed the friend.
    pub fn friend_just_revealed(&self) -> bool {
        self.friend_just_revealed
    }

    pub fn declarer_won(&self) -> Option<bool> {
        self.declarer_won
    }

    pub fn declarer_team_points(&self) -> Option<u8> {
        self.declarer_team_points
    }

    pub fn gamepoints_rewarded(&self) -> Option<[i32; PLAYERS]> {
        self.gamepoints_rewarded
    }

    /// Whether the most recent trick has been completed and archived.
    pub fn is_trick_complete(&self) -> bool {
        !self.completed_tricks.is_empty() && self.current_trick.is_empty()
    }

    /// The seat expected to play, during the play phase.
    pub fn next_player(&self) -> Option<PlayerId> {
        if self.phase != Phase::Play {
            return None;
        }
        self.leader
            .map(|leader| next_actor(&self.current_trick, leader))
    }

    /// Legal plays for the seat expected to play. Empty outside the play
    /// phase.
    pub fn legal_plays(&self) -> Vec<Play> {
        let Some(player) = self.next_player() else {
            return Vec::new();
        };
        legal_plays(
            player,
            &self.hands[player as usize],
            self.completed_tricks.len(),
            &self.current_trick,
            self.require_trump(),
        )
    }

    /// An owned, information-restricted snapshot for one seat. Only the
    /// declarer's snapshot contains the kitty.
    pub fn get_perspective(&self, player: PlayerId) -> Perspective {
        let kitty = (Some(player) == self.declarer).then(|| self.kitty.clone());
        Perspective {
            player,
            hand: self.hands[player as usize].clone(),
            kitty,
            point_cards: self.point_cards.clone(),
            completed_tricks: self.completed_tricks.clone(),
            trick_winners: self.trick_winners.clone(),
            current_trick: self.current_trick.clone(),
            previous_suit_leds: self.previous_suit_leds.clone(),
            suit_led: self.current_trick.first().and_then(Play::suit_led),
            declarer: self.declarer,
            trump: self.trump,
            bid: self.bid,
            friend: self.friend,
            called_friend: self.called_friend,
            friend_just_revealed: self.friend_just_revealed,
            mighty: self.mighty,
            ripper: self.ripper,
            hand_confirmed: self.hand_confirmed,
            next_bidder: self.next_bidder,
            minimum_bid: self.minimum_bid,
            highest_bid: self.highest_bid,
            bids: self.bids,
            phase: self.phase,
            leader: self.leader,
            declarer_won: self.declarer_won,
            declarer_team_points: self.declarer_team_points,
            gamepoints_rewarded: self.gamepoints_rewarded,
            hand_sizes: std::array::from_fn(|seat| self.hands[seat].len() as u8),
        }
    }

    // --- Mutating operations, one per phase --------------------------------

    /// Record one bid or pass. A bid of 0 is a pass.
    ///
    /// Once every seat has an entry: zero non-pass bids lower the floor from
    /// 13 to 12 and restart the round, or force a redeal if the floor was
    /// already lowered; exactly one non-pass bid closes bidding and fixes
    /// the declarer, trump, and bid. A no-trump bid of 20 auto-passes every
    /// other seat.
    pub fn bidding(&mut self, bidder: PlayerId, trump: Trump, bid: u8) -> Result<(), BidError> {
        if self.phase != Phase::Bid {
            return Err(BidError::UnexpectedCall);
        }
        if self.next_bidder != bidder {
            return Err(BidError::InvalidBidder);
        }

        if bid == 0 {
            self.bids[bidder as usize] = Some(BidEntry::Pass);
            debug!(bidder, "pass recorded");
        } else {
            if !is_valid_bid(trump, bid, self.minimum_bid, self.highest_bid) {
                return Err(BidError::InvalidBid);
            }
            self.bids[bidder as usize] = Some(BidEntry::Bid { trump, bid });
            self.highest_bid = Some((trump, bid));
            debug!(bidder, ?trump, bid, "bid recorded");

            // A no-trump bid of 20 cannot be raised; everyone else passes
            // automatically.
            if bid == MAX_BID && trump.is_no_trump() {
                for seat in 0..PLAYERS {
                    if seat as PlayerId != bidder {
                        self.bids[seat] = Some(BidEntry::Pass);
                    }
                }
            }
        }

        if self.bids.iter().all(Option::is_some) {
            let mut declarer_candidate = None;
            let mut non_pass_count = 0;
            for (seat, entry) in self.bids.iter().enumerate() {
                if matches!(entry, Some(BidEntry::Bid { .. })) {
                    declarer_candidate = Some(seat as PlayerId);
                    non_pass_count += 1;
                }
            }

            if non_pass_count == 0 {
                if self.minimum_bid == OPENING_MINIMUM_BID {
                    self.minimum_bid = LOWERED_MINIMUM_BID;
                    self.bids = [None; PLAYERS];
                    info!(minimum_bid = self.minimum_bid, "all seats passed, bid floor lowered");
                } else {
                    self.phase = Phase::Redeal;
                    info!("all seats passed twice, redeal");
                    return Ok(());
                }
            }

            if non_pass_count == 1 {
                let declarer = match declarer_candidate {
                    Some(seat) => seat,
                    None => panic!("invariant violated: one non-pass bid but no bidder"),
                };
                let Some(BidEntry::Bid { trump, bid }) = self.bids[declarer as usize] else {
                    panic!("invariant violated: declarer seat holds no bid");
                };
                self.declarer = Some(declarer);
                self.trump = Some(trump);
                self.bid = Some(bid);
                self.mighty = Some(trump_to_mighty(trump));
                self.ripper = Some(trump_to_ripper(trump));
                self.phase = Phase::Exchange;
                info!(declarer, ?trump, bid, "bidding closed");
                return Ok(());
            }
        }

        // Find the next seat still in the round, skipping passed seats.
        loop {
            self.next_bidder = player_increment(self.next_bidder);
            let passed = self.bids[self.next_bidder as usize]
                .as_ref()
                .is_some_and(BidEntry::is_pass);
            if !passed {
                break;
            }
        }

        Ok(())
    }

    /// The declarer absorbs the kitty into the hand and discards three
    /// cards, which become the new kitty. Discarded point cards count for
    /// the declarer immediately.
    pub fn exchange(&mut self, player: PlayerId, discards: Vec<Card>) -> Result<(), ExchangeError> {
        if self.phase != Phase::Exchange {
            return Err(ExchangeError::UnexpectedCall);
        }
        let declarer = self.require_declarer();
        if player != declarer {
            return Err(ExchangeError::InvalidPlayer);
        }
        if discards.len() != KITTY_SIZE {
            return Err(ExchangeError::InvalidDiscard);
        }
        // Every discard must come from the hand or the kitty, without
        // repeats.
        let hand = &self.hands[declarer as usize];
        for (i, card) in discards.iter().enumerate() {
            if !hand.contains(card) && !self.kitty.contains(card) {
                return Err(ExchangeError::InvalidDiscard);
            }
            if discards[..i].contains(card) {
                return Err(ExchangeError::InvalidDiscard);
            }
        }

        let hand = &mut self.hands[declarer as usize];
        hand.append(&mut self.kitty);
        hand.retain(|card| !discards.contains(card));
        hand.sort();
        for &card in &discards {
            if card.is_pointcard() {
                self.point_cards[declarer as usize].push(card);
            }
        }
        self.kitty = discards;

        debug!(declarer, "kitty exchanged");
        self.phase = Phase::TrumpChange;
        Ok(())
    }

    /// The declarer finalizes the trump, possibly changing it. A change
    /// raises the bid by two (one when changing to no-trump); a raise past
    /// twenty is rejected.
    pub fn trump_change(
        &mut self,
        player: PlayerId,
        trump: Trump,
    ) -> Result<(), TrumpChangeError> {
        if self.phase != Phase::TrumpChange {
            return Err(TrumpChangeError::UnexpectedCall);
        }
        if Some(player) != self.declarer {
            return Err(TrumpChangeError::InvalidPlayer);
        }

        if Some(trump) != self.trump {
            let bid_increase = if trump.is_no_trump() { 1 } else { 2 };
            let bid = self.require_bid();
            if bid + bid_increase > MAX_BID {
                return Err(TrumpChangeError::BidRaiseImpossible);
            }
            self.bid = Some(bid + bid_increase);
        }

        self.trump = Some(trump);
        self.mighty = Some(trump_to_mighty(trump));
        self.ripper = Some(trump_to_ripper(trump));

        info!(?trump, bid = self.require_bid(), "trump finalized");
        self.phase = Phase::MissDealCheck;
        Ok(())
    }

    /// One seat confirms its hand or claims a miss-deal. A valid claim
    /// forces a redeal; once all five seats confirm, the friend call opens.
    pub fn miss_deal_check(&mut self, player: PlayerId, claim: bool) -> Result<(), MissDealError> {
        if self.phase != Phase::MissDealCheck {
            return Err(MissDealError::UnexpectedCall);
        }
        if player as usize >= PLAYERS {
            return Err(MissDealError::InvalidPlayer);
        }

        if claim {
            let mighty = self.require_mighty();
            if !is_miss_deal(&self.hands[player as usize], mighty) {
                return Err(MissDealError::InvalidClaim);
            }
            info!(player, "miss-deal claimed, redeal");
            self.phase = Phase::Redeal;
        } else {
            self.hand_confirmed[player as usize] = true;
            debug!(player, "hand confirmed");
            if self.hand_confirmed.iter().all(|&confirmed| confirmed) {
                self.phase = Phase::FriendCall;
            }
        }
        Ok(())
    }

    /// The declarer designates the friend and leads the first trick.
    pub fn friend_call(
        &mut self,
        player: PlayerId,
        call: FriendCall,
    ) -> Result<(), FriendCallError> {
        if self.phase != Phase::FriendCall {
            return Err(FriendCallError::UnexpectedCall);
        }
        if Some(player) != self.declarer {
            return Err(FriendCallError::InvalidPlayer);
        }

        self.called_friend = Some(call);
        self.leader = self.declarer;
        self.phase = Phase::Play;
        info!(?call, "friend called");
        Ok(())
    }

    /// One card into the ongoing trick. The fifth play resolves the trick;
    /// the tenth resolved trick finalizes scoring and ends the deal.
    pub fn play(&mut self, play: Play) -> Result<(), PlayError> {
        if self.phase != Phase::Play {
            return Err(PlayError::UnexpectedCall);
        }
        let trump = self.require_trump();
        let is_leading = self.current_trick.is_empty();

        if Some(play.player()) != self.next_player() {
            return Err(PlayError::InvalidPlayer);
        }
        if !self.hands[play.player() as usize].contains(&play.card()) {
            return Err(PlayError::CardNotInHand);
        }
        if play.is_joker_call() && !(is_leading && Some(play.card()) == self.ripper) {
            return Err(PlayError::InvalidJokerCall);
        }
        if is_leading && !play.is_leading_play() {
            return Err(PlayError::SuitLedNotSet);
        }
        if !is_leading && play.is_leading_play() {
            return Err(PlayError::UnexpectedSuitLed);
        }
        if !is_valid_move(
            self.completed_tricks.len(),
            &self.current_trick,
            trump,
            &self.hands[play.player() as usize],
            &play,
        ) {
            return Err(PlayError::InvalidPlay);
        }

        self.friend_just_revealed = false;
        if let Some(FriendCall::CardSpecified(friend_card)) = self.called_friend {
            if friend_card == play.card() {
                self.friend_just_revealed = true;
                self.friend = Some(play.player());
                info!(friend = play.player(), "friend revealed");
            }
        }

        self.hands[play.player() as usize].retain(|&card| card != play.card());
        self.current_trick.push(play);
        debug!(player = play.player(), card = %play.card(), "card played");

        if self.current_trick.len() == PLAYERS {
            self.complete_trick(trump);
        }
        Ok(())
    }

    fn complete_trick(&mut self, trump: Trump) {
        let trick = std::mem::take(&mut self.current_trick);
        let winner = trick_winner(trump, self.completed_tricks.len(), &trick);

        for play in &trick {
            if play.card().is_pointcard() {
                self.point_cards[winner as usize].push(play.card());
            }
        }

        self.previous_suit_leds.push(trick[0].suit_led());
        self.completed_tricks.push(trick);
        self.trick_winners.push(winner);
        self.leader = Some(winner);
        debug!(winner, trick_no = self.completed_tricks.len(), "trick resolved");

        if matches!(self.called_friend, Some(FriendCall::FirstTrickWinner))
            && self.completed_tricks.len() == 1
        {
            self.friend_just_revealed = true;
            self.friend = Some(winner);
            info!(friend = winner, "first-trick-winner friend revealed");
        }

        if self.completed_tricks.len() == TRICKS_PER_DEAL {
            self.finalize_scoring();
            self.phase = Phase::GameOver;
        }
    }

    /// Computed exactly once, in the call that completes the tenth trick.
    fn finalize_scoring(&mut self) {
        let declarer = self.require_declarer();
        let bid = self.require_bid();
        let trump = self.require_trump();
        let called_friend = match self.called_friend {
            Some(call) => call,
            None => panic!("invariant violated: friend call must be set before scoring"),
        };

        let mut team_points = self.point_cards[declarer as usize].len();
        if let Some(friend) = self.friend {
            if friend != declarer {
                team_points += self.point_cards[friend as usize].len();
            }
        }
        let team_points = team_points as u8;

        self.declarer_team_points = Some(team_points);
        self.declarer_won = Some(team_points >= bid);
        self.gamepoints_rewarded = Some(gamepoint_rewards(
            team_points,
            declarer,
            self.friend,
            bid,
            trump,
            &called_friend,
            self.minimum_bid,
        ));

        info!(
            declarer_won = team_points >= bid,
            declarer_team_points = team_points,
            "deal complete"
        );
    }

    // --- Invariant accessors ------------------------------------------------
    //
    // These fields are set when their phase is entered; reading them earlier
    // is an engine defect, not a caller error, and aborts.

    fn require_declarer(&self) -> PlayerId {
        match self.declarer {
            Some(declarer) => declarer,
            None => panic!("invariant violated: declarer must be set in {:?}", self.phase),
        }
    }

    fn require_trump(&self) -> Trump {
        match self.trump {
            Some(trump) => trump,
            None => panic!("invariant violated: trump must be set in {:?}", self.phase),
        }
    }

    fn require_bid(&self) -> u8 {
        match self.bid {
            Some(bid) => bid,
            None => panic!("invariant violated: bid must be set in {:?}", self.phase),
        }
    }

    fn require_mighty(&self) -> Card {
        match self.mighty {
            Some(mighty) => mighty,
            None => panic!("invariant violated: mighty must be set in {:?}", self.phase),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
