use crate::cards::Card;

/// Whether all cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first_suit = cards[0].suit();
        SuitInfo { is_flush: cards.iter().all(|c| c.suit() == first_suit) }
    }
}
