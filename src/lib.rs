//! # cardfray
//!
//! The turn-based combat simulation core of a card-driven battle game:
//! whose turn it is, what actions are queued and resolved, how status
//! effects persist and expire, and how a deck of cards is drawn, played,
//! and reshuffled.
//!
//! ## Design Principles
//!
//! 1. **Simulation only**: Rendering, input, and asset loading are external
//!    collaborators reached through narrow interfaces (`view`). Nothing in
//!    the core depends on how a pawn is drawn.
//!
//! 2. **One execution path**: Player plays and status-triggered effects are
//!    both [`Action`]s. Uniformity is what lets status resolution and play
//!    resolution share the same pipeline.
//!
//! 3. **Explicit randomness**: The RNG is a constructor parameter
//!    ([`BattleRng`]), never ambient global state. Tests seed it; play uses
//!    entropy.
//!
//! ## Architecture
//!
//! - **Turn machine**: `Start -> InProgress -> Resolving -> End -> Start`,
//!   flipping the acting side on each wrap. Every transition resolves the
//!   active side's statuses first, then does the phase's own work.
//!
//! - **Deck circulation**: four piles (draw, hand, discard, exhaust) with a
//!   conservation invariant - a card is in exactly one pile, and the
//!   circulating count only changes through `add_card` and `exhaust`.
//!
//! ## Modules
//!
//! - `core`: identity types, deterministic RNG, battle configuration
//! - `cards`: card values and the card-lookup registry
//! - `deck`: piles and the four-pile circulation engine
//! - `combat`: pawns, statuses, actions, the turn state machine
//! - `view`: the narrow render boundary (positions, sprite handles, layout)

pub mod cards;
pub mod combat;
pub mod core;
pub mod deck;
pub mod view;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BattleRng, PawnId, Side};

pub use crate::cards::{Card, CardId, CardRegistry};

pub use crate::deck::{Deck, DeckError, Pile};

pub use crate::combat::{
    Action, Battle, BattleBuilder, BattleError, Decider, EffectKind, FoeId, FoeRegistry,
    FoeTemplate, NullDecider, Outcome, PartyMember, Pawn, ScriptedDecider, Status, TurnPhase,
};

pub use crate::view::{arrange_on_axis, PawnView, Point, SpriteId};
