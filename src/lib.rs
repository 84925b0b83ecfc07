//! hand-rank: five-card poker hand classification and comparison
//!
//! Goals:
//! - Classify exactly five cards into one of ten ordered hand categories
//! - Totally order any two hands, ties included; suits never break ties
//! - Pick the best five-card hand out of 5..=7 known cards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! The core is pure and stateless: every call reads its input cards and
//! returns a fresh value, so it is safe to invoke from parallel workers
//! without any locking.
//!
//! ## Quick start: classify a hand
//! ```
//! use hand_rank::cards::{Card, Rank, Suit};
//! use hand_rank::evaluator::{classify, HandCategory};
//!
//! let quads = [
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! let rank = classify(&quads).unwrap();
//! assert_eq!(rank.category(), HandCategory::FourOfAKind);
//! ```
//!
//! ## Best hand from hole cards plus board
//! ```
//! use hand_rank::cards::parse_cards;
//! use hand_rank::evaluator::{best_hand, HandCategory};
//!
//! let known = parse_cards("As Ks Qs Js 10s 2h 3h").unwrap();
//! let best = best_hand(&known).unwrap();
//! assert_eq!(best.category(), HandCategory::RoyalFlush);
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
