pub(crate) mod combinations;
pub(crate) mod histogram;
pub(crate) mod tiebreak;

use crate::cards::Card;
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use histogram::{Histogram, ROYAL_MASK};

/// Poker hand categories, strictly increasing in strength.
///
/// A royal flush is the straight flush whose ranks are exactly Ten..Ace; it
/// gets its own category at the top of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display name; one distinct string per category.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of an exact five-card hand.
///
/// `a < b` iff `(a.category, a.tiebreak) < (b.category, b.tiebreak)`
/// lexicographically; equality requires both components equal. The rank mask
/// is carried for inspection (royal/wheel detection, display) and never
/// compared, so suit identity cannot influence ordering.
#[derive(Debug, Clone, Copy)]
pub struct HandRank {
    category: HandCategory,
    tiebreak: u32,
    rank_mask: u16,
}

impl HandRank {
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Packed comparison key, meaningful only among hands of the same
    /// category.
    pub const fn tiebreak(&self) -> u32 {
        self.tiebreak
    }

    /// 13-bit rank presence set, bit `r - 2` per rank `r`.
    pub const fn rank_mask(&self) -> u16 {
        self.rank_mask
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then(self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tiebreak == other.tiebreak
    }
}

impl Eq for HandRank {}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Caller errors; none are transient and none are retried. The evaluator
/// never coerces or truncates malformed input into a wrong answer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("need at least 5 cards, got {0}")]
    InsufficientCards(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Classify exactly five cards.
///
/// Fails with [`EvalError::InvalidHandSize`] for any other count and
/// [`EvalError::DuplicateCard`] if two cards share (rank, suit) — a deck
/// bug upstream, surfaced rather than deduplicated.
///
/// ```
/// use hand_rank::cards::parse_cards;
/// use hand_rank::evaluator::{classify, HandCategory};
///
/// let cards = parse_cards("Ah Kh Qh Jh 10h").unwrap();
/// let rank = classify(&cards).unwrap();
/// assert_eq!(rank.category(), HandCategory::RoyalFlush);
/// ```
pub fn classify(cards: &[Card]) -> Result<HandRank, EvalError> {
    let five: [Card; 5] =
        cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    check_distinct(cards)?;
    Ok(classify_five(&five))
}

/// Best five-card hand among five or more distinct cards (typically 6 or 7:
/// hole cards plus however much of the board is known).
///
/// Enumerates every five-card subset, classifies each, and keeps the
/// strictly greater one, so the result is deterministic for a fixed input
/// set: tied subsets produce equal `HandRank`s and whichever wins compares
/// equal to the rest.
///
/// Fails with [`EvalError::InsufficientCards`] below five cards and
/// [`EvalError::DuplicateCard`] on repeated (rank, suit) pairs.
///
/// ```
/// use hand_rank::cards::parse_cards;
/// use hand_rank::evaluator::{best_hand, HandCategory};
///
/// let seven = parse_cards("As Ah Kc Qd 9h 3s 2c").unwrap();
/// let best = best_hand(&seven).unwrap();
/// assert_eq!(best.category(), HandCategory::Pair);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<HandRank, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards(cards.len()));
    }
    check_distinct(cards)?;

    let mut best: Option<HandRank> = None;
    for idx in combinations::Choose5::new(cards.len()) {
        let hand = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let rank = classify_five(&hand);
        if best.as_ref().map_or(true, |b| rank > *b) {
            best = Some(rank);
        }
    }

    // len >= 5 guarantees at least one subset
    best.ok_or(EvalError::InsufficientCards(cards.len()))
}

fn check_distinct(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen: HashSet<Card> = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Classify five cards known to be distinct.
///
/// Resolution order: royal flush, straight flush, then the {4,1} and {3,2}
/// count shapes, then flush, straight, and the remaining shapes. A straight
/// has five distinct ranks so it can never collide with the quads or full
/// house shapes; a coincidental flush still loses to those shapes per the
/// category order.
fn classify_five(cards: &[Card; 5]) -> HandRank {
    let hist = Histogram::new(cards);
    let rank_mask = hist.rank_mask();
    let groups = hist.groups();
    let straight_top = hist.straight_top();
    let flush = hist.all_same_suit();

    if let Some(top) = straight_top {
        if flush {
            let category = if rank_mask == ROYAL_MASK {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRank { category, tiebreak: tiebreak::straight_key(top), rank_mask };
        }
    }

    let shape: Vec<u8> = groups.iter().map(|&(_, count)| count).collect();
    match shape.as_slice() {
        [4, 1] => {
            return HandRank {
                category: HandCategory::FourOfAKind,
                tiebreak: tiebreak::pack_groups(&groups),
                rank_mask,
            }
        }
        [3, 2] => {
            return HandRank {
                category: HandCategory::FullHouse,
                tiebreak: tiebreak::pack_groups(&groups),
                rank_mask,
            }
        }
        _ => {}
    }

    if flush {
        return HandRank {
            category: HandCategory::Flush,
            tiebreak: tiebreak::pack_groups(&groups),
            rank_mask,
        };
    }
    if let Some(top) = straight_top {
        return HandRank {
            category: HandCategory::Straight,
            tiebreak: tiebreak::straight_key(top),
            rank_mask,
        };
    }

    let category = match shape.as_slice() {
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };
    HandRank { category, tiebreak: tiebreak::pack_groups(&groups), rank_mask }
}
