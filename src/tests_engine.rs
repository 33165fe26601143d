//! Engine-level tests driving whole deals through every phase.

use crate::domain::cards_serde::parse_cards;
use crate::domain::dealing::full_deck;
use crate::domain::rules::PLAYERS;
use crate::engine::GameEngine;
use crate::errors::{
    ExchangeError, FriendCallError, MissDealError, PlayError, TrumpChangeError,
};
use crate::{Card, FriendCall, Phase, Play, Suit, Trump};

fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// The unshuffled deck cut into five ten-card chunks plus the tail.
///
/// Seat 0 gets 2C..JC, seat 1 QC/KC/AC and 2D..8D, seat 2 9D..AD and
/// 2H..5H, seat 3 6H..AH and 2S, seat 4 3S..QS; the kitty is KS, AS and
/// the joker.
fn fixed_deal() -> ([Vec<Card>; PLAYERS], Vec<Card>) {
    let deck = full_deck();
    let hands = std::array::from_fn(|seat| deck[seat * 10..(seat + 1) * 10].to_vec());
    let kitty = deck[50..].to_vec();
    (hands, kitty)
}

fn engine_at_exchange() -> GameEngine {
    let (hands, kitty) = fixed_deal();
    let mut engine = GameEngine::from_deal(hands, kitty).expect("fixture deal is well formed");
    engine.bidding(0, Trump::Clubs, 13).expect("opening bid");
    for seat in 1..PLAYERS as u8 {
        engine.bidding(seat, Trump::Clubs, 0).expect("pass");
    }
    assert_eq!(engine.phase(), Phase::Exchange);
    engine
}

fn engine_at_play(call: FriendCall) -> GameEngine {
    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "2C"]))
        .expect("exchange");
    engine.trump_change(0, Trump::Clubs).expect("keep trump");
    for seat in 0..PLAYERS as u8 {
        engine.miss_deal_check(seat, false).expect("confirm hand");
    }
    engine.friend_call(0, call).expect("friend call");
    assert_eq!(engine.phase(), Phase::Play);
    assert_eq!(engine.leader(), Some(0));
    engine
}

#[test]
fn from_deal_rejects_malformed_deals() {
    use crate::errors::DealError;

    let (mut hands, kitty) = fixed_deal();
    hands[0].pop();
    assert_eq!(
        GameEngine::from_deal(hands, kitty).err(),
        Some(DealError::WrongHandSize)
    );

    let (mut hands, kitty) = fixed_deal();
    hands[0][0] = hands[1][0];
    assert_eq!(
        GameEngine::from_deal(hands, kitty).err(),
        Some(DealError::DuplicateCard)
    );

    let (hands, mut kitty) = fixed_deal();
    kitty.pop();
    assert_eq!(
        GameEngine::from_deal(hands, kitty).err(),
        Some(DealError::WrongKittySize)
    );
}

#[test]
fn same_seed_deals_the_same_cards() {
    let first = GameEngine::from_seed(42);
    let second = GameEngine::from_seed(42);
    for seat in 0..PLAYERS as u8 {
        assert_eq!(
            first.get_perspective(seat).hand,
            second.get_perspective(seat).hand
        );
    }
}

#[test]
fn only_the_declarer_sees_the_kitty() {
    let engine = engine_at_exchange();
    assert_eq!(
        engine.get_perspective(0).kitty,
        Some(parse_cards(&["KS", "AS", "JK"]))
    );
    assert_eq!(engine.get_perspective(1).kitty, None);
    assert_eq!(engine.get_perspective(3).hand_sizes, [10; PLAYERS]);
}

#[test]
fn exchange_absorbs_the_kitty_and_credits_point_discards() {
    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "2C"]))
        .expect("exchange");

    assert_eq!(engine.phase(), Phase::TrumpChange);
    let view = engine.get_perspective(0);
    assert_eq!(view.hand.len(), 10);
    assert!(view.hand.contains(&Card::Joker));
    assert!(!view.hand.contains(&card("2C")));
    // The discards are the new kitty; the point cards among them already
    // count for the declarer.
    assert_eq!(view.kitty, Some(parse_cards(&["KS", "AS", "2C"])));
    assert_eq!(view.point_cards[0], parse_cards(&["KS", "AS"]));
}

#[test]
fn exchange_rejections_leave_the_state_untouched() {
    let mut engine = engine_at_exchange();

    assert_eq!(
        engine.exchange(1, parse_cards(&["KS", "AS", "JK"])),
        Err(ExchangeError::InvalidPlayer)
    );
    assert_eq!(
        engine.exchange(0, parse_cards(&["KS", "AS"])),
        Err(ExchangeError::InvalidDiscard)
    );
    // A card from another seat's hand, and a repeated discard.
    assert_eq!(
        engine.exchange(0, parse_cards(&["KS", "AS", "2D"])),
        Err(ExchangeError::InvalidDiscard)
    );
    assert_eq!(
        engine.exchange(0, parse_cards(&["KS", "KS", "AS"])),
        Err(ExchangeError::InvalidDiscard)
    );

    assert_eq!(engine.phase(), Phase::Exchange);
    let view = engine.get_perspective(0);
    assert_eq!(view.hand.len(), 10);
    assert_eq!(view.kitty, Some(parse_cards(&["KS", "AS", "JK"])));
    assert!(view.point_cards[0].is_empty());
}

#[test]
fn changing_trump_raises_the_bid_and_moves_the_special_cards() {
    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");

    assert_eq!(
        engine.trump_change(1, Trump::Spades),
        Err(TrumpChangeError::InvalidPlayer)
    );

    engine.trump_change(0, Trump::Spades).expect("change trump");
    assert_eq!(engine.phase(), Phase::MissDealCheck);
    assert_eq!(engine.trump(), Some(Trump::Spades));
    assert_eq!(engine.bid(), Some(15));
    assert_eq!(engine.mighty(), Some(card("AD")));
    assert_eq!(engine.ripper(), Some(card("3C")));

    assert_eq!(
        engine.trump_change(0, Trump::Clubs),
        Err(TrumpChangeError::UnexpectedCall)
    );
}

#[test]
fn keeping_the_trump_costs_nothing_and_no_trump_costs_one() {
    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");
    engine.trump_change(0, Trump::Clubs).expect("keep trump");
    assert_eq!(engine.bid(), Some(13));
    assert_eq!(engine.mighty(), Some(card("AS")));
    assert_eq!(engine.ripper(), Some(card("3S")));

    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");
    engine.trump_change(0, Trump::NoTrump).expect("to no-trump");
    assert_eq!(engine.bid(), Some(14));
}

#[test]
fn a_trump_change_may_not_push_the_bid_past_twenty() {
    let (hands, kitty) = fixed_deal();
    let mut engine = GameEngine::from_deal(hands, kitty).expect("fixture deal");
    engine.bidding(0, Trump::Clubs, 19).expect("opening bid");
    for seat in 1..PLAYERS as u8 {
        engine.bidding(seat, Trump::Clubs, 0).expect("pass");
    }
    engine
        .exchange(0, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");

    assert_eq!(
        engine.trump_change(0, Trump::Hearts),
        Err(TrumpChangeError::BidRaiseImpossible)
    );
    // One more step still fits: 19 + 1 = 20.
    engine.trump_change(0, Trump::NoTrump).expect("to no-trump");
    assert_eq!(engine.bid(), Some(20));
}

#[test]
fn a_rich_hand_may_not_claim_a_miss_deal() {
    let mut engine = engine_at_exchange();
    engine
        .exchange(0, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");
    engine.trump_change(0, Trump::Clubs).expect("keep trump");

    // Seat 0 holds TC and JC, two point cards.
    assert_eq!(
        engine.miss_deal_check(0, true),
        Err(MissDealError::InvalidClaim)
    );
    assert_eq!(
        engine.miss_deal_check(7, false),
        Err(MissDealError::InvalidPlayer)
    );
    assert_eq!(engine.phase(), Phase::MissDealCheck);
}

#[test]
fn a_pointless_hand_forces_a_redeal() {
    // Rearrange the fixture so seat 0 holds no point card at all.
    let deck = full_deck();
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    hands[0] = [&deck[0..8], &deck[13..15]].concat(); // 2C..9C, 2D, 3D
    hands[1] = [&deck[8..13], &deck[15..20]].concat(); // TC..AC, 4D..8D
    hands[2] = deck[20..30].to_vec();
    hands[3] = deck[30..40].to_vec();
    hands[4] = deck[40..50].to_vec();
    let kitty = deck[50..].to_vec();

    let mut engine = GameEngine::from_deal(hands, kitty).expect("rearranged deal");
    engine.bidding(0, Trump::Clubs, 0).expect("pass");
    engine.bidding(1, Trump::Clubs, 13).expect("opening bid");
    for seat in 2..PLAYERS as u8 {
        engine.bidding(seat, Trump::Clubs, 0).expect("pass");
    }
    engine
        .exchange(1, parse_cards(&["KS", "AS", "JK"]))
        .expect("exchange");
    engine.trump_change(1, Trump::Clubs).expect("keep trump");

    engine.miss_deal_check(0, true).expect("valid claim");
    assert_eq!(engine.phase(), Phase::Redeal);
}

#[test]
fn the_friend_call_is_the_declarers_alone() {
    let mut engine = engine_at_exchange();
    assert_eq!(
        engine.friend_call(0, FriendCall::NoFriend),
        Err(FriendCallError::UnexpectedCall)
    );

    engine
        .exchange(0, parse_cards(&["KS", "AS", "2C"]))
        .expect("exchange");
    engine.trump_change(0, Trump::Clubs).expect("keep trump");
    for seat in 0..PLAYERS as u8 {
        engine.miss_deal_check(seat, false).expect("confirm hand");
    }
    assert_eq!(
        engine.friend_call(2, FriendCall::NoFriend),
        Err(FriendCallError::InvalidPlayer)
    );

    engine
        .friend_call(0, FriendCall::FirstTrickWinner)
        .expect("friend call");
    assert_eq!(engine.phase(), Phase::Play);
    assert_eq!(engine.leader(), Some(0));
    assert_eq!(engine.called_friend(), Some(FriendCall::FirstTrickWinner));
    assert_eq!(engine.friend(), None);
}

#[test]
fn play_protocol_rejections_leave_the_trick_untouched() {
    let mut engine = engine_at_play(FriendCall::NoFriend);

    // Leader is seat 0; its hand is 3C..JC plus the joker, Clubs is trump.
    assert_eq!(
        engine.play(Play::lead(1, card("QC"))),
        Err(PlayError::InvalidPlayer)
    );
    assert_eq!(
        engine.play(Play::lead(0, card("AS"))),
        Err(PlayError::CardNotInHand)
    );
    assert_eq!(
        engine.play(Play::follow(0, card("3C"))),
        Err(PlayError::SuitLedNotSet)
    );
    // 3C is held but the Ripper under Clubs is 3S.
    assert_eq!(
        engine.play(Play::joker_call(0, card("3C"))),
        Err(PlayError::InvalidJokerCall)
    );
    // Leading a trump card on the first trick while the joker is an
    // alternative.
    assert_eq!(
        engine.play(Play::lead(0, card("3C"))),
        Err(PlayError::InvalidPlay)
    );
    assert!(engine.get_perspective(0).current_trick.is_empty());

    engine
        .play(Play::lead_joker(0, Some(Suit::Clubs)))
        .expect("joker lead");
    assert_eq!(
        engine.play(Play::lead(1, card("QC"))),
        Err(PlayError::UnexpectedSuitLed)
    );
    // Seat 1 holds clubs and must follow them.
    assert_eq!(
        engine.play(Play::follow(1, card("2D"))),
        Err(PlayError::InvalidPlay)
    );
    engine.play(Play::follow(1, card("QC"))).expect("follow");
    assert_eq!(engine.get_perspective(2).current_trick.len(), 2);
    assert_eq!(engine.get_perspective(2).suit_led, Some(Suit::Clubs));
}

#[test]
fn a_full_deal_plays_to_completion_and_balances_the_books() {
    let mut engine = engine_at_play(FriendCall::FirstTrickWinner);

    let mut plays_made = 0;
    while engine.phase() == Phase::Play {
        let plays = engine.legal_plays();
        assert!(!plays.is_empty(), "a seat on turn must have a legal play");
        let on_turn = engine.next_player().expect("play phase has a next player");
        assert_eq!(engine.get_perspective(on_turn).legal_plays(), plays);
        engine.play(plays[0]).expect("legal play is accepted");
        plays_made += 1;
        assert!(plays_made <= 50, "a deal is ten tricks of five plays");
        assert_eq!(engine.is_trick_complete(), plays_made % 5 == 0);
        // The first-trick winner is revealed as the friend exactly once.
        if plays_made == 5 {
            assert!(engine.friend_just_revealed());
            assert!(engine.friend().is_some());
        } else if plays_made == 6 {
            assert!(!engine.friend_just_revealed());
        }
    }

    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(plays_made, 50);

    let view = engine.get_perspective(0);
    assert_eq!(view.completed_tricks.len(), 10);
    assert_eq!(view.trick_winners.len(), 10);
    assert_eq!(view.previous_suit_leds.len(), 10);
    assert_eq!(view.hand_sizes, [0; PLAYERS]);

    // The first-trick winner became the friend.
    assert_eq!(engine.friend(), Some(view.trick_winners[0]));

    // Every one of the twenty point cards was credited exactly once.
    let credited: usize = view.point_cards.iter().map(Vec::len).sum();
    assert_eq!(credited, 20);

    let team_points = engine.declarer_team_points().expect("scored");
    let mut expected = view.point_cards[0].len();
    if let Some(friend) = engine.friend() {
        if friend != 0 {
            expected += view.point_cards[friend as usize].len();
        }
    }
    assert_eq!(team_points as usize, expected);
    assert_eq!(engine.declarer_won(), Some(team_points >= 13));

    let rewards = engine.gamepoints_rewarded().expect("rewarded");
    assert_eq!(rewards.iter().sum::<i32>(), 0);
}

#[test]
fn scoring_is_reported_once_and_play_stops_at_game_over() {
    let mut engine = engine_at_play(FriendCall::NoFriend);
    while engine.phase() == Phase::Play {
        let plays = engine.legal_plays();
        engine.play(plays[0]).expect("legal play is accepted");
    }
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.legal_plays().is_empty());
    assert_eq!(
        engine.play(Play::lead(0, card("2C"))),
        Err(PlayError::UnexpectedCall)
    );
    // With no friend the declarer's side is seat 0 alone.
    let team_points = engine.declarer_team_points().expect("scored");
    assert_eq!(
        team_points as usize,
        engine.get_perspective(0).point_cards[0].len()
    );
    assert_eq!(engine.friend(), None);
}
