//! Property tests for trick resolution, legal-play enumeration, dealing,
//! and scoring.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::{is_trump_card, trump_to_mighty};
use crate::domain::dealing::{deal_deck, full_deck};
use crate::domain::scoring::gamepoint_rewards;
use crate::domain::test_gens;
use crate::domain::tricks::{is_valid_move, legal_plays, trick_winner};
use crate::domain::{Card, FriendCall, Play};

proptest! {
    #[test]
    fn winner_is_a_seat_that_played((trick, trump) in test_gens::complete_trick(),
                                    trick_number in 0usize..10) {
        let winner = trick_winner(trump, trick_number, &trick);
        prop_assert!(trick.iter().any(|p| p.player() == winner));
    }

    #[test]
    fn mighty_wins_from_any_seat((trick, trump) in test_gens::complete_trick(),
                                 trick_number in 0usize..10) {
        let mighty = trump_to_mighty(trump);
        if let Some(holder) = trick.iter().find(|p| p.card() == mighty) {
            prop_assert_eq!(trick_winner(trump, trick_number, &trick), holder.player());
        }
    }

    #[test]
    fn joker_wins_middle_tricks_absent_the_mighty(
        (trick, trump) in test_gens::complete_trick(),
        trick_number in 1usize..9,
    ) {
        let mighty = trump_to_mighty(trump);
        let has_mighty = trick.iter().any(|p| p.card() == mighty);
        if let Some(holder) = trick.iter().find(|p| p.card().is_joker()) {
            if !has_mighty && !trick[0].is_joker_call() {
                prop_assert_eq!(trick_winner(trump, trick_number, &trick), holder.player());
            }
        }
    }

    #[test]
    fn plain_tricks_go_to_the_top_of_the_suit_led(
        (trick, trump) in test_gens::standard_trick(),
        trick_number in 0usize..10,
    ) {
        let mighty = trump_to_mighty(trump);
        let no_mighty = trick.iter().all(|p| p.card() != mighty);
        let no_trump_played = trick.iter().all(|p| !is_trump_card(p.card(), trump));
        if no_mighty && no_trump_played {
            let suit_led = trick[0].suit_led();
            let expected = trick
                .iter()
                .filter(|p| p.card().suit() == suit_led)
                .max_by_key(|p| p.card().rank())
                .map(|p| p.player());
            prop_assert_eq!(Some(trick_winner(trump, trick_number, &trick)), expected);
        }
    }

    #[test]
    fn leading_seat_always_has_a_legal_play(
        hand in test_gens::unique_cards(10),
        trump in test_gens::trump(),
        trick_number in 0usize..10,
    ) {
        let plays = legal_plays(0, &hand, trick_number, &[], trump);
        prop_assert!(!plays.is_empty());
        for play in &plays {
            prop_assert!(is_valid_move(trick_number, &[], trump, &hand, play));
            prop_assert!(play.is_leading_play() || play.is_joker_call());
        }
    }

    #[test]
    fn following_seat_always_has_a_legal_play(
        cards in test_gens::unique_cards(13),
        trump in test_gens::trump(),
        named in test_gens::suit(),
        trick_number in 0usize..10,
    ) {
        let (played, hand) = cards.split_at(3);
        let mut trick = Vec::new();
        for (seat, &card) in played.iter().enumerate() {
            let seat = seat as u8;
            let play = match (seat, card) {
                (0, Card::Joker) => Play::lead_joker(0, Some(named)),
                (0, card) => Play::lead(0, card),
                (seat, card) => Play::follow(seat, card),
            };
            trick.push(play);
        }
        let plays = legal_plays(3, hand, trick_number, &trick, trump);
        prop_assert!(!plays.is_empty());
        for play in &plays {
            prop_assert!(is_valid_move(trick_number, &trick, trump, hand, play));
            prop_assert!(!play.is_leading_play());
        }
    }

    #[test]
    fn every_seed_deals_a_partition_of_the_deck(seed in any::<u64>()) {
        let (hands, kitty) = deal_deck(seed);
        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), 10);
            prop_assert!(hand.windows(2).all(|w| w[0] <= w[1]));
            seen.extend(hand.iter().copied());
        }
        prop_assert_eq!(kitty.len(), 3);
        seen.extend(kitty.iter().copied());
        prop_assert_eq!(seen.len(), full_deck().len());
    }

    #[test]
    fn rewards_are_zero_sum_and_won_deals_pay_the_declarer(
        points in 0u8..=20,
        declarer in 0u8..5,
        friend_seat in 0u8..5,
        with_friend in any::<bool>(),
        bid in 12u8..=20,
        trump in test_gens::trump(),
        minimum_bid in 12u8..=13,
    ) {
        let friend = (with_friend && friend_seat != declarer).then_some(friend_seat);
        let call = if with_friend {
            FriendCall::FirstTrickWinner
        } else {
            FriendCall::NoFriend
        };
        let rewards =
            gamepoint_rewards(points, declarer, friend, bid, trump, &call, minimum_bid);
        prop_assert_eq!(rewards.iter().sum::<i32>(), 0);
        let declarer_reward = rewards[declarer as usize];
        if points >= bid {
            prop_assert!(declarer_reward >= 0);
        } else {
            prop_assert!(declarer_reward < 0);
        }
    }
}
