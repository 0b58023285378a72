use crate::cards::{parse_cards, Card, CardError};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand has exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("card parse error: {0}")]
    Card(#[from] CardError),
}

/// Five held cards, in the order they were given.
///
/// Repeated cards are accepted; a hand is only checked for its size.
///
/// ```
/// use draw_poker::hand::{Hand, HandError};
///
/// let hand: Hand = "th jh qc qd qs".parse().unwrap();
/// assert_eq!(hand.to_string(), "Th Jh Qc Qd Qs");
/// assert_eq!("th jh".parse::<Hand>(), Err(HandError::InvalidHandSize(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub const SIZE: usize = 5;

    pub const fn new(cards: [Card; 5]) -> Self {
        Self { cards }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] =
            slice.try_into().map_err(|_| HandError::InvalidHandSize(slice.len()))?;
        Ok(Self::new(cards))
    }

    pub const fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hand_requires_exactly_five_cards() {
        let c = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(Hand::from_slice(&[c; 4]), Err(HandError::InvalidHandSize(4)));
        assert_eq!(Hand::from_slice(&[c; 6]), Err(HandError::InvalidHandSize(6)));
        assert_eq!(Hand::from_slice(&[]), Err(HandError::InvalidHandSize(0)));
        assert!(Hand::from_slice(&[c; 5]).is_ok());
    }

    #[test]
    fn duplicate_cards_are_accepted() {
        let two = Card::new(Rank::Two, Suit::Hearts);
        let hand = Hand::try_from(vec![two, two, two, two, two]).unwrap();
        assert!(hand.iter().all(|&c| c == two));
    }

    #[test]
    fn parsing_keeps_card_order() {
        let hand: Hand = "2h ad 5h ac 7h".parse().unwrap();
        assert_eq!(hand.cards()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(hand.cards()[1], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(hand.cards()[4], Card::new(Rank::Seven, Suit::Hearts));
    }

    #[test]
    fn parsing_reports_bad_cards() {
        let err = "2h ad 5x ac 7h".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::Card(CardError::InvalidSuit('x')));
    }
}
