use crate::cards::{Card, CardError};
use crate::comparator::HandComparator;
use crate::deck::Deck;
use crate::evaluator::{classify, Category};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid hand: {0}")]
    Hand(#[from] HandError),
    #[error("invalid deck: {0}")]
    Card(#[from] CardError),
}

/// Iterator over the discard sets of one size, as 5-bit position masks in
/// ascending order. There are C(5, k) of them.
pub struct Discards {
    size: u32,
    next: u8,
}

impl Discards {
    pub fn new(size: usize) -> Self {
        Self { size: size as u32, next: 1 }
    }
}

impl Iterator for Discards {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < 1u8 << Hand::SIZE {
            let mask = self.next;
            self.next += 1;
            if mask.count_ones() == self.size {
                return Some(mask);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(10))
    }
}

/// Best hand found by a search, with the cards given up to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome {
    pub hand: Hand,
    pub category: Category,
    /// Held cards that were replaced, in their original order. Empty when the
    /// starting hand was kept.
    pub discarded: Vec<Card>,
}

/// Build the hand left after discarding the masked positions and drawing the
/// same number of cards from `drawn`.
fn replace(hand: &Hand, mask: u8, drawn: &[Card]) -> Option<Hand> {
    let kept = hand.iter().enumerate().filter(|(i, _)| mask & (1u8 << i) == 0).map(|(_, c)| *c);
    let cards: Vec<Card> = kept.chain(drawn.iter().copied()).collect();
    Hand::from_slice(&cards).ok()
}

/// Search every discard of 1..=5 held cards, drawing the same number of cards
/// from the front of `deck`, and keep the strongest hand.
///
/// A candidate replaces the current best only when it is strictly stronger,
/// so the starting hand wins ties. Discard sizes larger than the deck are
/// skipped.
pub fn search_with(hand: &Hand, deck: &Deck, comparator: &HandComparator) -> Outcome {
    log::debug!("{:<24}{} | deck {} cards", "searching from", hand, deck.len());
    let mut best = *hand;
    let mut best_mask = 0u8;

    for size in 1..=Hand::SIZE {
        let Some(drawn) = deck.leading(size) else {
            log::debug!("deck holds {} cards, skipping discards of {}..=5", deck.len(), size);
            break;
        };
        for mask in Discards::new(size) {
            let Some(candidate) = replace(hand, mask, drawn) else {
                continue;
            };
            if comparator.compare(&candidate, &best) == Ordering::Greater {
                log::trace!("{:<24}{} ({})", "improved to", candidate, classify(&candidate));
                best = candidate;
                best_mask = mask;
            }
        }
    }

    let discarded = hand
        .iter()
        .enumerate()
        .filter(|(i, _)| best_mask & (1u8 << i) != 0)
        .map(|(_, c)| *c)
        .collect();
    let category = classify(&best);
    log::debug!("{:<24}{} ({})", "best hand", best, category);
    Outcome { hand: best, category, discarded }
}

/// Best hand reachable from `hand` with the default comparator.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::evaluator::{classify, Category};
/// use draw_poker::hand::Hand;
/// use draw_poker::search::search;
///
/// let hand: Hand = "th jh qc qd qs".parse().unwrap();
/// let deck: Deck = "qh kh ah 2s 6s".parse().unwrap();
/// assert_eq!(classify(&search(&hand, &deck)), Category::RoyalFlush);
/// ```
pub fn search(hand: &Hand, deck: &Deck) -> Hand {
    search_with(hand, deck, &HandComparator::default()).hand
}

/// Parse a hand and a deck of card tokens, search, and classify the result.
///
/// ```
/// use draw_poker::search::guess;
///
/// assert_eq!(guess("2h 2s 3h 3s 3c", "2d 3d 6c 9c th").unwrap().label(), "four-of-a-kind");
/// assert!(guess("2h 2s 3h 3s", "2d").is_err());
/// ```
pub fn guess(hand: &str, deck: &str) -> Result<Category, SearchError> {
    let hand: Hand = hand.parse()?;
    let deck: Deck = deck.parse()?;
    Ok(classify(&search(&hand, &deck)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};
    use crate::comparator::HighCardRule;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    fn deck(s: &str) -> Deck {
        s.parse().expect("valid deck")
    }

    #[test]
    fn discards_enumerate_each_size() {
        let counts: Vec<usize> = (1..=5).map(|k| Discards::new(k).count()).collect();
        assert_eq!(counts, vec![5, 10, 10, 5, 1]);
        assert_eq!(Discards::new(5).next(), Some(0b11111));
        assert_eq!(Discards::new(0).count(), 0);
    }

    #[test]
    fn replace_keeps_order_then_draws() {
        let h = hand("2h 3h 4h 5h 6h");
        let drawn = [Card::new(Rank::King, Suit::Clubs), Card::new(Rank::Queen, Suit::Clubs)];
        let out = replace(&h, 0b00101, &drawn).unwrap();
        assert_eq!(out, hand("3h 5h 6h kc qc"));
    }

    #[test]
    fn empty_deck_keeps_the_hand() {
        let h = hand("3d 5s 2h qd td");
        let outcome = search_with(&h, &Deck::default(), &HandComparator::default());
        assert_eq!(outcome.hand, h);
        assert!(outcome.discarded.is_empty());
        assert_eq!(outcome.category, Category::HighestCard);
    }

    #[test]
    fn short_deck_limits_discard_size() {
        // two queens only help when three cards are swapped
        let h = hand("2c 7d 9s qh 4s");
        assert_eq!(classify(&search(&h, &deck("qd qs"))), Category::ThreeOfAKind);
        // a lone three never beats the queen-high start
        assert_eq!(search(&h, &deck("3c")), h);
    }

    #[test]
    fn outcome_reports_discarded_cards() {
        let outcome =
            search_with(&hand("th jh qc qd qs"), &deck("qh kh ah 2s 6s"), &HandComparator::default());
        assert_eq!(outcome.category, Category::RoyalFlush);
        assert_eq!(outcome.discarded, parse_cards("qc qd qs").unwrap());
        assert_eq!(outcome.hand, hand("th jh qh kh ah"));
    }

    #[test]
    fn ties_keep_the_starting_hand() {
        // every candidate is at best a pair, as is the start
        let h = hand("ah ad 3c 5s 9h");
        let outcome = search_with(&h, &deck("2c 7d"), &HandComparator::default());
        assert_eq!(outcome.hand, h);
    }

    #[test]
    fn high_card_rule_changes_the_chosen_hand() {
        let h = hand("2c 4d 6s 8h tc");
        let d = deck("kd");
        let ace_high = search_with(&h, &d, &HandComparator::new(HighCardRule::AceHigh));
        assert_eq!(ace_high.discarded.len(), 1);
        assert!(ace_high.hand.iter().any(|c| c.rank() == Rank::King));

        let equal = search_with(&h, &d, &HandComparator::new(HighCardRule::AlwaysEqual));
        assert_eq!(equal.hand, h);
    }

    #[test]
    fn guess_reports_parse_errors() {
        assert!(matches!(guess("2h 2s 3h 3s", ""), Err(SearchError::Hand(HandError::InvalidHandSize(4)))));
        assert!(matches!(guess("2h 2s 3h 3s 3c", "2x"), Err(SearchError::Card(CardError::InvalidSuit('x')))));
    }
}
