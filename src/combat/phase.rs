//! Turn phases.
//!
//! A side's turn walks `Start -> InProgress -> Resolving -> End`, then wraps
//! to `Start` for the other side. [`TurnPhase::next`] is a pure, total
//! function; [`TurnPhase::Invalid`] is a sticky sentinel that the battle
//! surfaces as a fatal error rather than silently continuing from.

use serde::{Deserialize, Serialize};

/// Phase of the acting side's turn.
///
/// ```
/// use cardfray::combat::TurnPhase;
///
/// assert_eq!(TurnPhase::Start.next(), TurnPhase::InProgress);
/// assert_eq!(TurnPhase::End.next(), TurnPhase::Start);
/// assert_eq!(TurnPhase::Invalid.next(), TurnPhase::Invalid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Programming-error sentinel. Never a legal phase to run a battle in.
    Invalid,
    /// The turn has just begun; the acting side flipped on entry.
    Start,
    /// Decisions are being made; the action queue is open.
    InProgress,
    /// Queued actions execute in FIFO order.
    Resolving,
    /// Turn-end statuses fire and the hand is topped back up.
    End,
}

impl TurnPhase {
    /// The phase that follows this one.
    ///
    /// `End` wraps back to `Start`; the battle flips the acting side on
    /// that entry. `Invalid` maps to itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            TurnPhase::Start => TurnPhase::InProgress,
            TurnPhase::InProgress => TurnPhase::Resolving,
            TurnPhase::Resolving => TurnPhase::End,
            TurnPhase::End => TurnPhase::Start,
            TurnPhase::Invalid => TurnPhase::Invalid,
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Invalid => "invalid",
            TurnPhase::Start => "start",
            TurnPhase::InProgress => "in-progress",
            TurnPhase::Resolving => "resolving",
            TurnPhase::End => "end",
        };
        write!(f, "{name}")
    }
}
