use crate::cards::Rank;

/// Width of one packed rank field. Ranks 2..=14 fit in four bits.
const FIELD_BITS: u32 = 4;

/// Pack the group ranks into fixed-width fields of a `u32`, most significant
/// field first, so the primary group dominates the comparison.
///
/// `groups` must already be ordered by (count desc, rank desc); for a full
/// house this yields the trip rank then the pair rank, for one pair the pair
/// rank then the kickers high to low. Unused trailing fields stay zero.
///
/// The result orders hands correctly only within one category; across
/// categories the category itself dominates.
pub fn pack_groups(groups: &[(Rank, u8)]) -> u32 {
    debug_assert!(groups.len() <= 5);
    let mut key: u32 = 0;
    for (i, &(rank, _)) in groups.iter().take(5).enumerate() {
        key |= u32::from(rank.value()) << (FIELD_BITS * (4 - i as u32));
    }
    key
}

/// Tiebreak for straights and straight flushes: the top rank alone.
///
/// All counts are one in a straight, so the packed-groups rule is overridden
/// by the single high card. The wheel already reports Five as its top, which
/// pins it below every other straight; a royal flush keys on Ace.
pub fn straight_key(top: Rank) -> u32 {
    u32::from(top.value())
}
