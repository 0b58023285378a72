use crate::cards::{parse_cards, Card, CardError};
use std::str::FromStr;

/// Replacement cards, drawn in order from the front.
///
/// The deck is never consumed by a search; every discard size draws from the
/// same leading cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck: Deck = "qh kh ah".parse().unwrap();
    /// assert_eq!(deck.len(), 3);
    /// assert_eq!(deck.leading(2).unwrap().len(), 2);
    /// assert!(deck.leading(4).is_none());
    /// ```
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// The first `n` cards, or `None` if the deck is shorter than `n`.
    pub fn leading(&self, n: usize) -> Option<&[Card]> {
        self.cards.get(..n)
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl FromStr for Deck {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Self::new)
    }
}
