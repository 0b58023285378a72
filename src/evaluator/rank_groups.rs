use crate::cards::Rank;

/// Occurrence count of each rank in a hand, indexed by base rank order.
///
/// Example: 2 2 3 3 3 has counts {2: 2, 3: 3} and shape [2, 3].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 13],
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 13];
        for rank in ranks {
            counts[rank.index() as usize] += 1;
        }
        Self { counts }
    }

    /// The non-zero counts sorted ascending.
    pub fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self.counts.iter().copied().filter(|&c| c > 0).collect();
        shape.sort_unstable();
        shape
    }

    pub fn has_shape(&self, expected: &[u8]) -> bool {
        self.shape() == expected
    }

    /// One bit per rank present, bit `i` for base index `i`.
    pub fn mask(&self) -> u16 {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .fold(0u16, |mask, (i, _)| mask | (1u16 << i))
    }

    #[cfg(test)]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.index() as usize]
    }
}

/// Rank mask of exactly {A, T, J, Q, K}.
pub const ROYAL_MASK: u16 = (1u16 << Rank::Ace.index())
    | (1u16 << Rank::Ten.index())
    | (1u16 << Rank::Jack.index())
    | (1u16 << Rank::Queen.index())
    | (1u16 << Rank::King.index());
