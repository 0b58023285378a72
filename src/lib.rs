//! draw-poker: five-card hand classification and draw replacement search
//!
//! Goals:
//! - Classify a five-card hand into one of ten categories, strongest first
//! - Find the best hand reachable by swapping held cards for the leading cards
//!   of a replacement deck
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Ranks use a base order with the ace low (`A23456789TJQK`). A run is a
//! straight only if it appears in that order, so an offsuit ten-to-ace run is
//! classified as highest card. The ace plays high only when two highest-card
//! hands are compared.
//!
//! ## Quick start
//! ```
//! use draw_poker::deck::Deck;
//! use draw_poker::evaluator::{classify, Category};
//! use draw_poker::hand::Hand;
//! use draw_poker::search::search;
//!
//! let hand: Hand = "2h ad 5h ac 7h".parse().unwrap();
//! let deck: Deck = "ah 6h 9h 4h 3c".parse().unwrap();
//!
//! assert_eq!(classify(&hand), Category::OnePair);
//! let best = search(&hand, &deck);
//! assert_eq!(classify(&best), Category::Flush);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin draw-poker -- --hand "th jh qc qd qs" --deck "qh kh ah 2s 6s"
//! ```

pub mod cards;
pub mod comparator;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod search;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
