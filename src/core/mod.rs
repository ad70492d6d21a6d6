//! Core simulation types: identities, RNG, configuration.
//!
//! These are the building blocks the rest of the crate is written against.
//! Nothing here knows about cards, decks, or turn phases.

pub mod config;
pub mod id;
pub mod rng;

pub use config::BattleConfig;
pub use id::{PawnId, Side};
pub use rng::BattleRng;
