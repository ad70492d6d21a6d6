//! Card data: immutable card values and the lookup registry.
//!
//! A [`Card`] is static data. Decks copy cards out of templates rather than
//! sharing them, so per-instance pile membership never aliases a template.

pub mod card;
pub mod registry;

pub use card::{Card, CardId};
pub use registry::CardRegistry;
