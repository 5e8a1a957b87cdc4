use super::*;
use crate::hand::{SmallSet as _, ALL_CARDS};
use rand::rngs::StdRng;
use rand::SeedableRng as _;

#[test]
fn test_standard_deck() {
    let deck = Deck::standard_52();
    assert_eq!(deck.cards, ALL_CARDS);
    assert_eq!(Deck::default().cards, ALL_CARDS);
}

#[test]
fn test_unshuffled_hand() {
    // The 13 lowest cards: every two, three, four and the club five
    let hand = Deck::standard_52().deal_hand();
    assert_eq!(hand.len(), 13);
    assert_eq!(hand.points(), 0);
    assert_eq!(hand.to_string(), "432.432.432.5432");
}

#[test]
fn test_shuffle_keeps_cards() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut rng);

    let mut cards = deck.cards.clone();
    cards.sort_unstable_by_key(|card| (card.rank(), card.suit()));
    assert_eq!(cards, ALL_CARDS);
    assert_eq!(deck.deal_hand().len(), 13);
}

#[test]
fn test_dealt_hands_are_strong_enough() {
    let mut rng = StdRng::seed_from_u64(42);

    for min_points in [0, 12, 20] {
        let mut dealer = Dealer::new(min_points).expect("reachable minimum");
        assert_eq!(dealer.min_points(), min_points);

        dealer.hands(&mut rng).take(50).for_each(|hand| {
            assert_eq!(hand.len(), 13);
            assert!(hand.points() >= min_points);
        });
    }
}

#[test]
fn test_seeded_dealing_is_reproducible() {
    let deal = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dealer = Dealer::new(12).expect("reachable minimum");
        dealer.hands(&mut rng).take(10).collect::<Vec<_>>()
    };
    assert_eq!(deal(7), deal(7));
}

#[test]
fn test_unreachable_points() {
    assert!(Dealer::new(MAX_POINTS).is_ok());
    assert_eq!(Dealer::new(38).err(), Some(UnreachablePointsError(38)));
    assert_eq!(
        UnreachablePointsError(40).to_string(),
        "no hand holds 40 points, the maximum is 37"
    );
}
