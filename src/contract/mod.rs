
use crate::hand::Suit;
use core::fmt;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Denomination of a bid, a trump suit or notrump
///
/// The derived order is the bidding order: ♣ < ♦ < ♥ < ♠ < NT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Strain {
    /// ♣
    Clubs,
    /// ♦
    Diamonds,
    /// ♥
    Hearts,
    /// ♠
    Spades,
    /// NT, the strain not proposing a trump suit
    Notrump,
}

impl Strain {
    /// Helper constant for iteration over all strains
    pub const ALL: [Self; 5] = [
        Self::Clubs,
        Self::Diamonds,
        Self::Hearts,
        Self::Spades,
        Self::Notrump,
    ];

    /// The text code of the strain
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Notrump => "NT",
        }
    }
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Self::Clubs,
            Suit::Diamonds => Self::Diamonds,
            Suit::Hearts => Self::Hearts,
            Suit::Spades => Self::Spades,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A call that proposes a contract
///
/// The order of the fields ensures natural ordering by deriving [`PartialOrd`]
/// and [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bid {
    /// The number of tricks (adding the book of 6 tricks) to take to fulfill
    /// the contract, from 1 to 7
    pub level: u8,

    /// The strain of the contract
    pub strain: Strain,
}

impl Bid {
    /// Create a bid from level and strain
    ///
    /// # Panics
    /// Panics if the level is not in the range 1..=7.
    #[must_use]
    pub const fn new(level: u8, strain: Strain) -> Self {
        assert!(level >= 1 && level <= 7);
        Self { level, strain }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)
    }
}

/// Error raised when parsing a bid or a strain
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid bid")]
pub struct ParseBidError;

impl FromStr for Strain {
    type Err = ParseBidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strain| strain.code() == s)
            .ok_or(ParseBidError)
    }
}

static BID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([1-7])(C|D|H|S|NT)$").expect("bid pattern is valid"));

impl FromStr for Bid {
    type Err = ParseBidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = BID.captures(s).ok_or(ParseBidError)?;
        let level = captures[1].parse().map_err(|_| ParseBidError)?;
        let strain = captures[2].parse()?;
        Ok(Self::new(level, strain))
    }
}
