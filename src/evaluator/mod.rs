pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use detector::DETECTORS;
use hand_analysis::HandAnalysis;
use std::fmt;

/// Poker hand category, numbered from strongest (1) to weakest (10).
///
/// The derived ordering follows the code, so a *smaller* category is the
/// *stronger* one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOfAKind = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOfAKind = 7,
    TwoPairs = 8,
    OnePair = 9,
    HighestCard = 10,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPairs,
        Category::OnePair,
        Category::HighestCard,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, EvalError> {
        Category::ALL
            .get(usize::from(code).wrapping_sub(1))
            .copied()
            .ok_or(EvalError::UnknownCategory(code))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "royal-flush",
            Category::StraightFlush => "straight-flush",
            Category::FourOfAKind => "four-of-a-kind",
            Category::FullHouse => "full-house",
            Category::Flush => "flush",
            Category::Straight => "straight",
            Category::ThreeOfAKind => "three-of-a-kind",
            Category::TwoPairs => "two-pairs",
            Category::OnePair => "one-pair",
            Category::HighestCard => "highest-card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Category {
    type Error = EvalError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Category::from_code(code)
    }
}

/// Classification of one hand plus what the highest-card tie-break needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Highest rank held, ace playing high.
    pub high_card: Rank,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("unknown category code: {0}")]
    UnknownCategory(u8),
}

/// Evaluate exactly five cards. The first detector that matches, strongest
/// first, decides the category.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = HandAnalysis::new(cards);
    let category = DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map_or(Category::HighestCard, |d| d.category());
    Evaluation { category, high_card: analysis.high_card() }
}

pub fn evaluate(hand: &Hand) -> Evaluation {
    evaluate_five(hand.cards())
}

/// Classify a hand.
///
/// ```
/// use draw_poker::evaluator::{classify, Category};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "th jh qh kh ah".parse().unwrap();
/// assert_eq!(classify(&hand), Category::RoyalFlush);
///
/// // Ace-high runs are not straights unless suited
/// let hand: Hand = "th jc qh kh ah".parse().unwrap();
/// assert_eq!(classify(&hand), Category::HighestCard);
/// ```
pub fn classify(hand: &Hand) -> Category {
    evaluate(hand).category
}

/// Label for a category code.
///
/// ```
/// use draw_poker::evaluator::label;
///
/// assert_eq!(label(4).unwrap(), "full-house");
/// assert!(label(11).is_err());
/// ```
pub fn label(code: u8) -> Result<&'static str, EvalError> {
    Category::from_code(code).map(Category::label)
}
