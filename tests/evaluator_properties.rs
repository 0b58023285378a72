use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::comparator::{compare_hands, HandComparator, HighCardRule};
use draw_poker::deck::Deck;
use draw_poker::evaluator::{classify, Category};
use draw_poker::hand::Hand;
use draw_poker::search::{search, search_with};
use proptest::prelude::*;
use std::cmp::Ordering;

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Spades), Just(Suit::Clubs), Just(Suit::Diamonds),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::array::uniform5(any_card()).prop_map(Hand::new)
}

fn any_deck() -> impl Strategy<Value = Deck> {
    prop::collection::vec(any_card(), 0..8).prop_map(Deck::new)
}

fn any_rule() -> impl Strategy<Value = HighCardRule> {
    prop_oneof![Just(HighCardRule::AceHigh), Just(HighCardRule::AlwaysEqual)]
}

proptest! {
    #[test]
    fn classification_code_is_in_range(hand in any_hand()) {
        let code = classify(&hand).code();
        prop_assert!((1..=10).contains(&code));
    }

    #[test]
    fn classification_ignores_card_order(cards in prop::array::uniform5(any_card()), shift in 0usize..5) {
        let mut rotated = cards;
        rotated.rotate_left(shift);
        rotated.swap(0, 4);
        prop_assert_eq!(classify(&Hand::new(cards)), classify(&Hand::new(rotated)));
    }

    #[test]
    fn search_is_never_worse(hand in any_hand(), deck in any_deck(), rule in any_rule()) {
        let comparator = HandComparator::new(rule);
        let outcome = search_with(&hand, &deck, &comparator);
        prop_assert!(outcome.category <= classify(&hand));
        prop_assert_ne!(comparator.compare(&outcome.hand, &hand), Ordering::Less);
        prop_assert_eq!(outcome.category, classify(&outcome.hand));
    }

    #[test]
    fn discarded_cards_match_draws(hand in any_hand(), deck in any_deck()) {
        let outcome = search_with(&hand, &deck, &HandComparator::default());
        let k = outcome.discarded.len();
        prop_assert!(k <= deck.len());
        if k > 0 {
            let drawn = &outcome.hand.cards()[5 - k..];
            prop_assert_eq!(drawn, &deck.as_slice()[..k]);
        } else {
            prop_assert_eq!(outcome.hand, hand);
        }
    }

    #[test]
    fn empty_deck_returns_the_start(hand in any_hand()) {
        prop_assert_eq!(search(&hand, &Deck::default()), hand);
    }

    #[test]
    fn comparison_is_antisymmetric(a in any_hand(), b in any_hand(), rule in any_rule()) {
        let comparator = HandComparator::new(rule);
        prop_assert_eq!(comparator.compare(&a, &b), comparator.compare(&b, &a).reverse());
    }

    #[test]
    fn different_categories_never_tie(a in any_hand(), b in any_hand()) {
        let (ca, cb) = (classify(&a), classify(&b));
        prop_assume!(ca != cb);
        let expected = if ca < cb { Ordering::Greater } else { Ordering::Less };
        prop_assert_eq!(compare_hands(&a, &b), expected);
    }

    #[test]
    fn single_suit_is_at_least_a_flush(ranks in prop::array::uniform5(any_rank()), suit in any_suit()) {
        // repeated cards can still make quads or a full house
        let category = classify(&Hand::new(ranks.map(|r| Card::new(r, suit))));
        prop_assert!(category <= Category::Flush);
    }
}
