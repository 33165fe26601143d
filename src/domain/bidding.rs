//! Bid records and the bid validity rule.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Trump;
use crate::domain::rules::MAX_BID;

/// One seat's recorded entry for the current bidding round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BidEntry {
    Pass,
    Bid { trump: Trump, bid: u8 },
}

impl BidEntry {
    pub fn is_pass(&self) -> bool {
        matches!(self, BidEntry::Pass)
    }
}

/// Whether a non-pass bid is acceptable.
///
/// The first bid of a round must reach `minimum_bid`, except that a no-trump
/// bid may undercut it by one (no-trump counts one stronger at equal value).
/// Later bids must exceed the standing highest bid, except that a no-trump
/// bid over a non-no-trump bid may merely equal it. No bid may exceed 20.
pub fn is_valid_bid(
    trump: Trump,
    bid: u8,
    minimum_bid: u8,
    prev: Option<(Trump, u8)>,
) -> bool {
    let lower_bound = match prev {
        None => {
            if trump.is_no_trump() {
                minimum_bid - 1
            } else {
                minimum_bid
            }
        }
        Some((prev_trump, highest_bid)) => {
            if trump.is_no_trump() && !prev_trump.is_no_trump() {
                highest_bid
            } else {
                highest_bid + 1
            }
        }
    };
    (lower_bound..=MAX_BID).contains(&bid)
}
