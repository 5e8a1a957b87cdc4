#[cfg(test)]
mod test;

use crate::hand::{Card, Hand, SmallSet as _, ALL_CARDS};
use rand::prelude::SliceRandom as _;
use thiserror::Error;

/// Most high-card points 13 cards can hold: four aces, kings, queens and a jack
///
/// Only 4 of the 635 013 559 600 possible hands reach it, so minima close to
/// it make redealing extremely slow.
pub const MAX_POINTS: u8 = 37;

/// A deck of playing cards
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}

impl Deck {
    /// Create a standard 52-card deck
    #[must_use]
    pub fn standard_52() -> Self {
        Self {
            cards: ALL_CARDS.to_vec(),
        }
    }

    /// Shuffle the deck
    pub fn shuffle(&mut self, rng: &mut (impl rand::Rng + ?Sized)) {
        self.cards.shuffle(rng);
    }

    /// The hand of the top 13 cards
    #[must_use]
    pub fn deal_hand(&self) -> Hand {
        self.cards.iter().take(13).fold(Hand::EMPTY, |mut hand, &card| {
            hand.insert(card);
            hand
        })
    }
}

/// Error raised when no 13-card hand can reach the requested points
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no hand holds {0} points, the maximum is {MAX_POINTS}")]
pub struct UnreachablePointsError(pub u8);

/// Dealer of random hands with a minimum strength
#[derive(Debug, Clone)]
pub struct Dealer {
    deck: Deck,
    min_points: u8,
}

impl Dealer {
    /// Create a dealer of hands with at least `min_points` high-card points
    ///
    /// Every hand is dealt by rejection sampling, so a minimum near
    /// [`MAX_POINTS`] is accepted yet makes [`Dealer::deal`] run practically
    /// forever.
    ///
    /// # Errors
    /// [`UnreachablePointsError`] if `min_points` exceeds [`MAX_POINTS`].
    pub fn new(min_points: u8) -> Result<Self, UnreachablePointsError> {
        if min_points > MAX_POINTS {
            return Err(UnreachablePointsError(min_points));
        }
        Ok(Self {
            deck: Deck::standard_52(),
            min_points,
        })
    }

    /// The minimum points of dealt hands
    #[must_use]
    pub const fn min_points(&self) -> u8 {
        self.min_points
    }

    /// Shuffle until the top 13 cards are strong enough
    pub fn deal(&mut self, rng: &mut (impl rand::Rng + ?Sized)) -> Hand {
        let mut redeals = 0_u64;

        loop {
            self.deck.shuffle(rng);
            let hand = self.deck.deal_hand();

            if hand.points() >= self.min_points {
                log::debug!("dealt {hand} after {redeals} redeals");
                return hand;
            }
            redeals += 1;
        }
    }

    /// Endless stream of dealt hands
    pub fn hands<'a, R: rand::Rng + ?Sized>(
        &'a mut self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Hand> + 'a {
        core::iter::repeat_with(move || self.deal(&mut *rng))
    }
}
