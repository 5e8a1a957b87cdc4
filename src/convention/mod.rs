
use crate::condition::{cards, cards_min, cards_range, points_min, points_range};
use crate::contract::{Bid, Strain};
use crate::hand::{Hand, Suit};
use crate::rule::Rule;
use once_cell::sync::Lazy;

/// Opening bids of the convention, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opening {
    /// 1♣ with a balanced 12-17 points
    OneClubBalanced,
    /// 1♣ with 12-17 points and 5+ clubs
    OneClubNatural,
    /// 1♣ with 18-22 points
    OneClubStrong,
    /// 1♦ with 12-17 points and 5+ diamonds
    OneDiamond,
    /// 1♥ with 12-17 points and 5+ hearts
    OneHeart,
    /// 1♠ with 12-17 points and 5+ spades
    OneSpade,
    /// 1NT with a balanced 15-17 points
    OneNotrump,
    /// 2♣ with 23+ points
    TwoClubs,
    /// Weak 2♦ with exactly 6 diamonds and no 4-card major
    TwoDiamonds,
    /// Weak 2♥ with exactly 6 hearts and no 4 spades
    TwoHearts,
    /// Weak 2♠ with exactly 6 spades and no 4 hearts
    TwoSpades,
    /// 2NT with a balanced 23-24 points
    TwoNotrump,
    /// Preemptive 3♣ with 7+ clubs
    ThreeClubs,
    /// Preemptive 3♦ with 7+ diamonds
    ThreeDiamonds,
    /// Preemptive 3♥ with 7+ hearts
    ThreeHearts,
    /// Preemptive 3♠ with 7+ spades
    ThreeSpades,
}

impl Opening {
    /// All openings in the order they are tried
    pub const ALL: [Self; 16] = [
        Self::OneClubBalanced,
        Self::OneClubNatural,
        Self::OneClubStrong,
        Self::OneDiamond,
        Self::OneHeart,
        Self::OneSpade,
        Self::OneNotrump,
        Self::TwoClubs,
        Self::TwoDiamonds,
        Self::TwoHearts,
        Self::TwoSpades,
        Self::TwoNotrump,
        Self::ThreeClubs,
        Self::ThreeDiamonds,
        Self::ThreeHearts,
        Self::ThreeSpades,
    ];

    /// The rule defining this opening
    #[must_use]
    pub fn rule(self) -> &'static Rule {
        &OPENINGS[self as usize]
    }

    fn build(self) -> Rule {
        match self {
            Self::OneClubBalanced => Rule::new(Bid::new(1, Strain::Clubs))
                .require([points_range(12, 17)])
                .exclude(Suit::DESC.map(|suit| cards_min(5, suit)))
                .note("balanced"),
            Self::OneClubNatural => one_level(Suit::Clubs).note("natural"),
            Self::OneClubStrong => Rule::new(Bid::new(1, Strain::Clubs))
                .require([points_range(18, 22)])
                .note("strong"),
            Self::OneDiamond => one_level(Suit::Diamonds),
            Self::OneHeart => one_level(Suit::Hearts),
            Self::OneSpade => one_level(Suit::Spades),
            Self::OneNotrump => Rule::new(Bid::new(1, Strain::Notrump)).require([
                points_range(15, 17),
                cards_range(3, 4, Suit::Hearts),
                cards_range(3, 4, Suit::Spades),
                cards_range(3, 5, Suit::Clubs),
                cards_range(3, 5, Suit::Diamonds),
            ]),
            Self::TwoClubs => Rule::new(Bid::new(2, Strain::Clubs)).require([points_min(23)]),
            Self::TwoDiamonds => weak_two(Suit::Diamonds)
                .exclude([cards_min(4, Suit::Hearts), cards_min(4, Suit::Spades)]),
            Self::TwoHearts => weak_two(Suit::Hearts).exclude([cards_min(4, Suit::Spades)]),
            Self::TwoSpades => weak_two(Suit::Spades).exclude([cards_min(4, Suit::Hearts)]),
            Self::TwoNotrump => Rule::new(Bid::new(2, Strain::Notrump))
                .require([points_range(23, 24)])
                .require(Suit::DESC.map(|suit| cards_range(2, 4, suit))),
            Self::ThreeClubs => preempt(Suit::Clubs),
            Self::ThreeDiamonds => preempt(Suit::Diamonds),
            Self::ThreeHearts => preempt(Suit::Hearts),
            Self::ThreeSpades => preempt(Suit::Spades),
        }
    }
}

fn one_level(suit: Suit) -> Rule {
    Rule::new(Bid::new(1, suit.into())).require([points_range(12, 17), cards_min(5, suit)])
}

fn weak_two(suit: Suit) -> Rule {
    Rule::new(Bid::new(2, suit.into())).require([cards(6, suit), points_range(7, 11)])
}

fn preempt(suit: Suit) -> Rule {
    Rule::new(Bid::new(3, suit.into())).require([points_range(6, 10), cards_min(7, suit)])
}

static OPENINGS: Lazy<[Rule; 16]> = Lazy::new(|| Opening::ALL.map(Opening::build));

/// Every opening rule, in the order of [`Opening::ALL`]
#[must_use]
pub fn openings() -> &'static [Rule] {
    OPENINGS.as_slice()
}

/// Opening rules the hand qualifies for
///
/// Several rules may match the same hand; none is preferred over another.
pub fn matching_openings(hand: &Hand) -> impl Iterator<Item = &'static Rule> + '_ {
    openings().iter().filter(move |rule| {
        let matched = rule.matches(hand);
        if matched {
            log::trace!("{hand} qualifies for {rule}");
        }
        matched
    })
}
