use crate::cards::{Card, Rank};

/// 13-bit rank presence set: bit `r - 2` is set iff some card has rank `r`.
pub type RankMask = u16;

/// The five broadway ranks Ten..Ace. A straight flush over exactly this mask
/// is a royal flush.
pub const ROYAL_MASK: RankMask = 0b1_1111_0000_0000;

/// {A,2,3,4,5}: the wheel, where the ace plays low.
pub const WHEEL_MASK: RankMask = 0b1_0000_0000_1111;

/// Rank/suit histogram of an exact five-card hand: which ranks are present,
/// how often each occurs, and whether all suits match.
///
/// A pure function of the card multiset; input order never affects the
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    rank_mask: RankMask,
    counts: [u8; 15],
    all_same_suit: bool,
}

impl Histogram {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut rank_mask: RankMask = 0;
        let mut counts = [0u8; 15];
        for card in cards {
            let r = card.rank().value();
            rank_mask |= 1 << (r - 2);
            counts[r as usize] += 1;
        }
        let all_same_suit = cards.iter().all(|c| c.suit() == cards[0].suit());
        Self { rank_mask, counts, all_same_suit }
    }

    pub const fn rank_mask(&self) -> RankMask {
        self.rank_mask
    }

    pub const fn all_same_suit(&self) -> bool {
        self.all_same_suit
    }

    /// How many cards in the hand have this rank (0..=4).
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Present ranks with their counts, sorted by count descending then rank
    /// descending.
    ///
    /// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
    pub fn groups(&self) -> Vec<(Rank, u8)> {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = self.counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        groups
    }

    /// True iff the five ranks form a straight, wheel included.
    ///
    /// Shifting the mask down to its lowest set bit leaves exactly `0b11111`
    /// when the five ranks are consecutive; the wheel is the one pattern
    /// that rule misses and is matched directly.
    pub fn is_straight(&self) -> bool {
        self.rank_mask >> self.rank_mask.trailing_zeros() == 0b11111
            || self.rank_mask == WHEEL_MASK
    }

    /// Top rank of the straight, if the hand is one. The wheel tops out at
    /// Five since its ace plays low.
    pub fn straight_top(&self) -> Option<Rank> {
        if !self.is_straight() {
            return None;
        }
        if self.rank_mask == WHEEL_MASK {
            return Some(Rank::Five);
        }
        let high_bit = 15 - self.rank_mask.leading_zeros() as usize;
        Some(Rank::ALL[high_bit])
    }
}
