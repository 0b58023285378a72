use super::hand_analysis::HandAnalysis;
use super::rank_groups::ROYAL_MASK;
use crate::evaluator::Category;

/// Each detector owns one category and the predicate that recognises it.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: strongest to weakest)
// ============================================================================

/// Royal Flush: one suit, ranks exactly {A, K, Q, J, T}
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.rank_groups.mask() == ROYAL_MASK
    }
}

/// Straight Flush: one suit, ranks form a run in base order
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(&[1, 4])
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(&[2, 3])
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(&[1, 1, 3])
    }
}

pub struct TwoPairsDetector;

impl CategoryDetector for TwoPairsDetector {
    fn category(&self) -> Category {
        Category::TwoPairs
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(&[1, 2, 2])
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(&[1, 1, 1, 2])
    }
}

/// Highest Card: fallback when nothing above matches
pub struct HighestCardDetector;

impl CategoryDetector for HighestCardDetector {
    fn category(&self) -> Category {
        Category::HighestCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairsDetector,
    &OnePairDetector,
    &HighestCardDetector,
];
