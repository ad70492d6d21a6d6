//! The combat simulation: pawns, statuses, actions, and the turn machine.
//!
//! ## Key Types
//!
//! - [`TurnPhase`]: the four-phase turn cycle with an invalid sentinel
//! - [`Pawn`]: a combatant on either side
//! - [`Status`]: a self-resolving modifier attached to a pawn
//! - [`Action`]: a bound, executable effect - the sole mutation path
//! - [`Battle`]: the encounter context driving it all
//! - [`Decider`]: the decision-point contract for AI and player input

pub mod action;
pub mod battle;
pub mod decision;
pub mod pawn;
pub mod phase;
pub mod status;

pub use action::{Action, EffectKind};
pub use battle::{Battle, BattleBuilder, BattleError, Outcome};
pub use decision::{Decider, FoeId, FoeRegistry, FoeTemplate, NullDecider, ScriptedDecider};
pub use pawn::{PartyMember, Pawn};
pub use phase::TurnPhase;
pub use status::Status;
