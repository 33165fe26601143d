//! Rejection reasons for every engine operation.
//!
//! Each operation has its own closed error set; `code()` maps a rejection to
//! the small positive integer of the engine's numeric protocol (0 is
//! success, i.e. the `Ok` arm of the operation's `Result`). Rejections are
//! non-fatal: the engine state is unchanged and the caller may retry with a
//! corrected command. Internal invariant breaches are not represented here;
//! they abort.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum BidError {
    #[error("engine is not expecting a bid")]
    UnexpectedCall = 1,
    #[error("not this seat's turn to bid")]
    InvalidBidder = 2,
    #[error("bid violates the bidding rules")]
    InvalidBid = 3,
}

impl BidError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum ExchangeError {
    #[error("engine is not expecting an exchange")]
    UnexpectedCall = 1,
    #[error("only the declarer may exchange")]
    InvalidPlayer = 2,
    #[error("discard list is not three distinct held cards")]
    InvalidDiscard = 3,
}

impl ExchangeError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum TrumpChangeError {
    #[error("engine is not expecting a trump change")]
    UnexpectedCall = 1,
    #[error("only the declarer may change trump")]
    InvalidPlayer = 2,
    #[error("bid cannot be raised past twenty")]
    BidRaiseImpossible = 3,
}

impl TrumpChangeError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum MissDealError {
    #[error("engine is not expecting a miss-deal check")]
    UnexpectedCall = 1,
    #[error("no such seat")]
    InvalidPlayer = 2,
    #[error("hand does not qualify as a miss-deal")]
    InvalidClaim = 3,
}

impl MissDealError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum FriendCallError {
    #[error("engine is not expecting a friend call")]
    UnexpectedCall = 1,
    #[error("only the declarer may call a friend")]
    InvalidPlayer = 2,
}

impl FriendCallError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum PlayError {
    #[error("engine is not expecting a play")]
    UnexpectedCall = 1,
    #[error("not this seat's turn to play")]
    InvalidPlayer = 2,
    #[error("card not in hand")]
    CardNotInHand = 3,
    #[error("play violates the trick rules")]
    InvalidPlay = 4,
    #[error("joker call must lead a trick with the ripper")]
    InvalidJokerCall = 5,
    #[error("a leading play must carry its suit-led context")]
    SuitLedNotSet = 6,
    #[error("a following play must not carry suit-led context")]
    UnexpectedSuitLed = 7,
}

impl PlayError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum DealError {
    #[error("every hand must hold exactly ten cards")]
    WrongHandSize = 1,
    #[error("the kitty must hold exactly three cards")]
    WrongKittySize = 2,
    #[error("deal contains a duplicate card")]
    DuplicateCard = 3,
}

impl DealError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The no-trump label has no suit to convert to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot convert NoTrump to a suit")]
pub struct TrumpConversionError;

/// An unrecognized card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized card token: {0}")]
pub struct ParseCardError(pub String);
