use crate::evaluator::{evaluate, Category, Evaluation};
use crate::hand::Hand;
use core::cmp::Ordering;

/// How two highest-card hands are ranked against each other.
///
/// No other category has a tie-break: two hands in the same category compare
/// equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HighCardRule {
    /// The single highest card wins, the ace playing high. Equal top ranks tie.
    #[default]
    AceHigh,
    /// Highest-card hands always tie.
    AlwaysEqual,
}

/// Orders hands by category, then by the configured highest-card rule.
///
/// ```
/// use draw_poker::comparator::{HandComparator, HighCardRule};
/// use draw_poker::hand::Hand;
/// use std::cmp::Ordering;
///
/// let ace: Hand = "ah 3c 5d 7s 9h".parse().unwrap();
/// let king: Hand = "kh 3c 5d 7s 9h".parse().unwrap();
///
/// assert_eq!(HandComparator::default().compare(&ace, &king), Ordering::Greater);
/// let tied = HandComparator::new(HighCardRule::AlwaysEqual);
/// assert_eq!(tied.compare(&ace, &king), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandComparator {
    pub high_card: HighCardRule,
}

impl HandComparator {
    pub const fn new(high_card: HighCardRule) -> Self {
        Self { high_card }
    }

    /// `Greater` means `a` is the stronger hand.
    pub fn compare(&self, a: &Hand, b: &Hand) -> Ordering {
        self.compare_evaluations(&evaluate(a), &evaluate(b))
    }

    pub fn compare_evaluations(&self, a: &Evaluation, b: &Evaluation) -> Ordering {
        // lower code is stronger
        match b.category.cmp(&a.category) {
            Ordering::Equal if a.category == Category::HighestCard => match self.high_card {
                HighCardRule::AceHigh => a.high_card.high_value().cmp(&b.high_card.high_value()),
                HighCardRule::AlwaysEqual => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

/// Compare two hands with the default comparator.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    HandComparator::default().compare(a, b)
}
