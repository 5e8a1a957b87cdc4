use super::*;
use crate::hand::{SmallSet as _, ALL_CARDS};
use core::str::FromStr;
use proptest::prelude::*;

const SUIT_NAMES: [(Suit, &str); 4] = [
    (Suit::Clubs, "trefli"),
    (Suit::Diamonds, "kar"),
    (Suit::Hearts, "kierów"),
    (Suit::Spades, "pików"),
];

#[test]
fn test_describe_points() {
    (1..24).step_by(2).for_each(|n| {
        assert_eq!(points(n).to_string(), format!("{n} PC"));
        assert_eq!(points_min(n).to_string(), format!("od {n} PC"));
        assert_eq!(points_max(n).to_string(), format!("do {n} PC"));
    });

    for start in [1, 5, 8] {
        for add in [1, 2, 5] {
            let end = start + add;
            assert_eq!(points_range(start, end).to_string(), format!("{start}-{end} PC"));
        }
    }

    assert_eq!(points_range(15, 17).to_string(), "15-17 PC");
    assert_eq!(points_range(12, 12).to_string(), "12 PC");
}

#[test]
fn test_describe_cards() {
    for (suit, name) in SUIT_NAMES {
        for n in [2, 4, 5] {
            assert_eq!(cards(n, suit).to_string(), format!("{n} {name}"));
            assert_eq!(cards_min(n, suit).to_string(), format!("od {n} {name}"));
            assert_eq!(cards_max(n, suit).to_string(), format!("do {n} {name}"));
        }

        for start in [1, 5, 8] {
            for add in [1, 2, 5] {
                let end = start + add;
                assert_eq!(
                    cards_range(start, end, suit).to_string(),
                    format!("od {start} do {end} {name}")
                );
            }
        }
    }

    assert_eq!(cards_min(2, Suit::Clubs).to_string(), "od 2 trefli");
}

#[test]
fn test_describe_unbounded() {
    assert_eq!(Condition::new(Variable::Points, None, None).to_string(), "");
    assert_eq!(
        Condition::new(Variable::Cards(Suit::Hearts), None, None).to_string(),
        ""
    );
}

#[test]
fn test_unbounded_always_holds() {
    let condition = Condition::new(Variable::Cards(Suit::Spades), None, None);
    assert!(condition.evaluate(&Hand::EMPTY));
    assert!(condition.evaluate(&Hand::ALL));
}

#[test]
fn test_evaluate_examples() {
    let hand = Hand::from_str("87.AJ10.QJ3.KQ1075").expect("valid hand");
    assert!(points(13).evaluate(&hand));
    assert!(points_range(12, 17).evaluate(&hand));
    assert!(!points_min(14).evaluate(&hand));
    assert!(points_max(13).evaluate(&hand));
    assert!(cards_min(5, Suit::Clubs).evaluate(&hand));
    assert!(!cards_min(6, Suit::Clubs).evaluate(&hand));
    assert!(cards(2, Suit::Spades).evaluate(&hand));
    assert!(cards_range(3, 4, Suit::Hearts).evaluate(&hand));
    assert!(!cards_max(2, Suit::Diamonds).evaluate(&hand));
}

fn any_hand() -> impl Strategy<Value = Hand> {
    proptest::sample::subsequence(ALL_CARDS.to_vec(), 13)
        .prop_map(|cards| Hand::with_cards(cards).expect("distinct cards"))
}

fn any_suit() -> impl Strategy<Value = Suit> {
    proptest::sample::select(Suit::ASC.to_vec())
}

proptest! {
    #[test]
    fn prop_points_conditions(hand in any_hand(), n in 0u8..=37, width in 0u8..=10) {
        let pc = hand.points();
        prop_assert_eq!(points(n).evaluate(&hand), pc == n);
        prop_assert_eq!(points_min(n).evaluate(&hand), pc >= n);
        prop_assert_eq!(points_max(n).evaluate(&hand), pc <= n);
        prop_assert_eq!(
            points_range(n, n + width).evaluate(&hand),
            n <= pc && pc <= n + width
        );
    }

    #[test]
    fn prop_cards_conditions(
        hand in any_hand(),
        suit in any_suit(),
        n in 0u8..=13,
        width in 0u8..=4
    ) {
        let count = hand.iter().filter(|card| card.suit() == suit).count();
        let least = usize::from(n);
        let end = usize::from(n + width);
        prop_assert_eq!(cards(n, suit).evaluate(&hand), count == least);
        prop_assert_eq!(cards_min(n, suit).evaluate(&hand), count >= least);
        prop_assert_eq!(cards_max(n, suit).evaluate(&hand), count <= least);
        prop_assert_eq!(
            cards_range(n, n + width, suit).evaluate(&hand),
            least <= count && count <= end
        );
    }
}
