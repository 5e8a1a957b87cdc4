#[cfg(test)]
mod test;

use crate::hand::{Hand, Suit};
use core::fmt;

/// Quantity of a hand measured by a [`Condition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// High-card points of the whole hand
    Points,
    /// Number of cards held in a suit
    Cards(Suit),
}

impl Variable {
    /// Measure this quantity on a hand
    #[must_use]
    pub fn measure(self, hand: &Hand) -> usize {
        match self {
            Self::Points => usize::from(hand.points()),
            Self::Cards(suit) => hand.length(suit),
        }
    }
}

/// Name of a suit in the genitive plural, as in "od 5 kierów"
const fn genitive(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "trefli",
        Suit::Diamonds => "kar",
        Suit::Hearts => "kierów",
        Suit::Spades => "pików",
    }
}

/// A predicate bounding a [`Variable`] of a hand
///
/// Both bounds are inclusive.  A condition without bounds holds for every
/// hand and displays as the empty string.
///
/// The [`Display`](fmt::Display) form is the Polish rule fragment, e.g.
/// `15-17 PC` or `od 5 kierów`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    /// The measured quantity
    pub variable: Variable,
    /// Inclusive lower bound
    pub min: Option<u8>,
    /// Inclusive upper bound
    pub max: Option<u8>,
}

impl Condition {
    /// Create a condition from a variable and its bounds
    #[must_use]
    pub const fn new(variable: Variable, min: Option<u8>, max: Option<u8>) -> Self {
        Self { variable, min, max }
    }

    /// Whether the hand satisfies every bound that is set
    #[must_use]
    pub fn evaluate(&self, hand: &Hand) -> bool {
        let value = self.variable.measure(hand);
        self.min.map_or(true, |min| value >= usize::from(min))
            && self.max.map_or(true, |max| value <= usize::from(max))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.variable {
            Variable::Points => match (self.min, self.max) {
                (Some(min), Some(max)) if min == max => write!(f, "{min} PC"),
                (Some(min), Some(max)) => write!(f, "{min}-{max} PC"),
                (Some(min), None) => write!(f, "od {min} PC"),
                (None, Some(max)) => write!(f, "do {max} PC"),
                (None, None) => Ok(()),
            },
            Variable::Cards(suit) => {
                let name = genitive(suit);
                match (self.min, self.max) {
                    (Some(min), Some(max)) if min == max => write!(f, "{min} {name}"),
                    (Some(min), Some(max)) => write!(f, "od {min} do {max} {name}"),
                    (Some(min), None) => write!(f, "od {min} {name}"),
                    (None, Some(max)) => write!(f, "do {max} {name}"),
                    (None, None) => Ok(()),
                }
            }
        }
    }
}

/// Exactly `count` high-card points
#[must_use]
pub const fn points(count: u8) -> Condition {
    Condition::new(Variable::Points, Some(count), Some(count))
}

/// At least `count` high-card points
#[must_use]
pub const fn points_min(count: u8) -> Condition {
    Condition::new(Variable::Points, Some(count), None)
}

/// At most `count` high-card points
#[must_use]
pub const fn points_max(count: u8) -> Condition {
    Condition::new(Variable::Points, None, Some(count))
}

/// From `min` to `max` high-card points
#[must_use]
pub const fn points_range(min: u8, max: u8) -> Condition {
    Condition::new(Variable::Points, Some(min), Some(max))
}

/// Exactly `count` cards in `suit`
#[must_use]
pub const fn cards(count: u8, suit: Suit) -> Condition {
    Condition::new(Variable::Cards(suit), Some(count), Some(count))
}

/// At least `count` cards in `suit`
#[must_use]
pub const fn cards_min(count: u8, suit: Suit) -> Condition {
    Condition::new(Variable::Cards(suit), Some(count), None)
}

/// At most `count` cards in `suit`
#[must_use]
pub const fn cards_max(count: u8, suit: Suit) -> Condition {
    Condition::new(Variable::Cards(suit), None, Some(count))
}

/// From `min` to `max` cards in `suit`
#[must_use]
pub const fn cards_range(min: u8, max: u8, suit: Suit) -> Condition {
    Condition::new(Variable::Cards(suit), Some(min), Some(max))
}
