//! Deck circulation: piles of cards and the four-pile deck engine.
//!
//! ## Key Types
//!
//! - [`Pile`]: an ordered list of cards (order is draw order)
//! - [`Deck`]: draw, hand, discard, and exhaust piles plus the circulation
//!   count invariant
//! - [`DeckError`]: bounds and lookup failures; the deck is never mutated
//!   when an operation fails

use thiserror::Error;

use crate::cards::CardId;

pub mod deck;
pub mod pile;

pub use deck::Deck;
pub use pile::Pile;

/// Errors from pile and deck operations.
///
/// These are local, recoverable failures: the caller may retry with a
/// corrected index, and the deck state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Attempted to access an element outside the collection.
    #[error("index {index} out of bounds for pile of {len} cards")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the pile at the time.
        len: usize,
    },

    /// A card id had no entry in the registry.
    #[error("unknown card id {0}")]
    UnknownCard(CardId),
}
