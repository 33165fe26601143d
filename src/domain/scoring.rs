//! End-of-deal gamepoint rewards.

use crate::domain::cards_types::Trump;
use crate::domain::play::FriendCall;
use crate::domain::rules::{OPENING_MINIMUM_BID, PLAYERS, POINT_CARDS_IN_DECK};
use crate::domain::state::PlayerId;

/// The unit of gamepoint transfer. The friend and each defender move one
/// unit; the declarer moves the balance.
pub fn gamepoint_transfer_unit(
    declarer_won: bool,
    multiplier: i32,
    bid: u8,
    declarer_team_points: u8,
    minimum_bid: u8,
) -> i32 {
    let bid = i32::from(bid);
    let points = i32::from(declarer_team_points);
    let minimum_bid = i32::from(minimum_bid);
    if declarer_won {
        multiplier * ((points - bid) + (bid - minimum_bid) * 2)
    } else {
        multiplier * (bid - points)
    }
}

/// Gamepoints rewarded to each seat at the end of a deal.
///
/// The declarer side wins iff it collected at least the bid. The transfer
/// unit doubles independently for a no-friend call, a no-trump bid, a
/// 20-point sweep by a winning declarer side (run), and a sub-10 collapse by
/// a losing one (back-run). The friend wins one unit, each defender loses
/// one, and the declarer takes the exact balance (two units with a friend at
/// the table, four without), so the rewards always sum to zero; every sign
/// flips when the declarer side lost.
pub fn gamepoint_rewards(
    declarer_team_points: u8,
    declarer: PlayerId,
    friend: Option<PlayerId>,
    bid: u8,
    trump: Trump,
    friend_call: &FriendCall,
    minimum_bid: u8,
) -> [i32; PLAYERS] {
    debug_assert!(minimum_bid <= OPENING_MINIMUM_BID);

    let declarer_won = declarer_team_points >= bid;

    let mut multiplier = 1;
    if matches!(friend_call, FriendCall::NoFriend) {
        multiplier *= 2;
    }
    if trump.is_no_trump() {
        multiplier *= 2;
    }
    if declarer_won && declarer_team_points as usize == POINT_CARDS_IN_DECK {
        multiplier *= 2; // run
    }
    if !declarer_won && declarer_team_points < 10 {
        multiplier *= 2; // back-run
    }

    let unit = gamepoint_transfer_unit(
        declarer_won,
        multiplier,
        bid,
        declarer_team_points,
        minimum_bid,
    );

    let mut rewards = [0i32; PLAYERS];
    for (seat, reward) in rewards.iter_mut().enumerate() {
        let seat = seat as PlayerId;
        if seat == declarer {
            continue;
        }
        *reward = if Some(seat) == friend { unit } else { -unit };
    }
    // The declarer takes the balance, keeping the table zero-sum.
    rewards[declarer as usize] = -rewards.iter().sum::<i32>();

    if !declarer_won {
        for reward in &mut rewards {
            *reward = -*reward;
        }
    }
    rewards
}
