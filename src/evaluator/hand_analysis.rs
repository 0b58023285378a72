use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted by base order, ace first.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = (*cards).map(Card::rank);
        ranks.sort_by_key(|r| r.index());

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    /// Highest rank in the hand with the ace playing high.
    pub fn high_card(&self) -> Rank {
        // ranks is sorted ace-first, so an ace sits at the front
        if self.ranks[0] == Rank::Ace {
            Rank::Ace
        } else {
            self.ranks[4]
        }
    }
}
