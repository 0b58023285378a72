use crate::cards::Rank;

/// Whether five ranks form a run in base order.
///
/// A run must appear inside [`Rank::ORDER`] ("A23456789TJQK"), so A-2-3-4-5
/// is a run and T-J-Q-K-A is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Ranks may be given in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut indices = ranks.map(Rank::index);
        indices.sort_unstable();
        let is_straight = indices.windows(2).all(|w| w[1] == w[0] + 1);
        StraightInfo { is_straight }
    }
}
