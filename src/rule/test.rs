use super::*;
use crate::condition::{cards, cards_min, points_range, Condition, Variable};
use crate::contract::Strain;
use crate::hand::{SmallSet as _, Suit};
use core::str::FromStr;

fn hand(text: &str) -> Hand {
    Hand::from_str(text).expect("valid hand")
}

fn one_club_natural() -> Rule {
    Rule::new(Bid::new(1, Strain::Clubs))
        .require([points_range(12, 17), cards_min(5, Suit::Clubs)])
        .note("natural")
}

#[test]
fn test_conjunction_of_requirements() {
    let rule = one_club_natural();
    assert!(rule.matches(&hand("87.AJ10.QJ3.KQ1075")));
    // Not enough clubs
    assert!(!rule.matches(&hand("87.AJ1087.QJ3.KQ10")));
    // Not enough points
    assert!(!rule.matches(&hand("87.987.QJ3.KQ1043")));
}

#[test]
fn test_exclusion() {
    let rule = Rule::new(Bid::new(1, Strain::Notrump)).exclude([cards_min(5, Suit::Spades)]);
    assert!(rule.matches(&hand("KQJ8.KQJ8.9876.J")));
    assert!(!rule.matches(&hand("KQJ87.KQJ8.986.J")));
}

#[test]
fn test_empty_rule_matches_everything() {
    let rule = Rule::new(Bid::new(7, Strain::Notrump));
    assert!(rule.matches(&Hand::EMPTY));
    assert!(rule.matches(&Hand::ALL));
}

#[test]
fn test_display() {
    assert_eq!(one_club_natural().to_string(), "1C (natural)");
    assert_eq!(Rule::new(Bid::new(2, Strain::Notrump)).to_string(), "2NT");
    assert_eq!(Rule::new(Bid::new(2, Strain::Hearts)).note("").to_string(), "2H");
}

#[test]
fn test_describe() {
    assert_eq!(
        one_club_natural().describe().to_string(),
        "1C: 12-17 PC, od 5 trefli"
    );

    let weak_two = Rule::new(Bid::new(2, Strain::Hearts))
        .require([cards(6, Suit::Hearts), points_range(7, 11)])
        .exclude([cards_min(4, Suit::Spades)]);
    assert_eq!(
        weak_two.describe().to_string(),
        "2H: 6 kierów, 7-11 PC wyklucza od 4 pików"
    );

    let exclusive = Rule::new(Bid::new(1, Strain::Clubs))
        .exclude([cards_min(5, Suit::Hearts), cards_min(5, Suit::Spades)]);
    assert_eq!(
        exclusive.describe().to_string(),
        "1C: wyklucza od 5 kierów, od 5 pików"
    );

    assert_eq!(Rule::new(Bid::new(3, Strain::Spades)).describe().to_string(), "3S");
}

#[test]
fn test_describe_skips_blank_part() {
    let blank = Condition::new(Variable::Points, None, None);
    let rule = Rule::new(Bid::new(1, Strain::Diamonds)).require([blank]);
    assert_eq!(rule.describe().to_string(), "1D");
}
