//! Status effects.
//!
//! Each status is a small state machine: asked to resolve at a turn phase,
//! it optionally emits an [`Action`] to execute immediately and optionally
//! replaces itself with a successor. Returning no successor expires the
//! status.
//!
//! Statuses are a closed variant set, each carrying its own countdown and
//! trigger data. The battle resolves a pawn's list sequentially in list
//! order, executing each emitted action before the next status resolves -
//! order is part of the contract.

use serde::{Deserialize, Serialize};

use crate::core::PawnId;

use super::action::{Action, EffectKind};
use super::phase::TurnPhase;

/// A persistent, self-resolving modifier attached to a pawn.
///
/// ```
/// use cardfray::combat::{Status, TurnPhase};
/// use cardfray::core::PawnId;
///
/// // Poison on its last turn: emits damage, then expires.
/// let poison = Status::Poison { damage: 1, turns: 1 };
/// let (action, successor) = poison.resolve(PawnId::player(0), TurnPhase::End);
/// assert!(action.is_some());
/// assert!(successor.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Deals `damage` to the owner at turn end for `turns` more turns,
    /// then expires.
    Poison {
        /// Damage dealt per resolution.
        damage: i32,
        /// Resolutions remaining.
        turns: u32,
    },

    /// Restores `heal` to the owner at turn start for `turns` more turns,
    /// then expires.
    Regen {
        /// Health restored per resolution.
        heal: i32,
        /// Resolutions remaining.
        turns: u32,
    },

    /// Suppresses the owner's decisions for `turns` turns. Emits no action;
    /// deciders observe it through `Pawn::is_stunned`.
    Stun {
        /// Turns remaining, counted down at turn start.
        turns: u32,
    },
}

impl Status {
    /// Resolve this status at a turn phase.
    ///
    /// Returns an optional action to carry out immediately and an optional
    /// status to replace this one with after resolution. A phase that is
    /// not the status's trigger leaves it untouched: no action, successor
    /// identical to the original.
    #[must_use]
    pub fn resolve(self, owner: PawnId, trigger: TurnPhase) -> (Option<Action>, Option<Status>) {
        match self {
            Status::Poison { damage, turns } => {
                if trigger != TurnPhase::End {
                    return (None, Some(self));
                }
                let action =
                    Action::with_targets(owner, &[owner], EffectKind::Damage(damage));
                let successor = (turns > 1).then(|| Status::Poison {
                    damage,
                    turns: turns - 1,
                });
                (Some(action), successor)
            }

            Status::Regen { heal, turns } => {
                if trigger != TurnPhase::Start {
                    return (None, Some(self));
                }
                let action = Action::with_targets(owner, &[owner], EffectKind::Heal(heal));
                let successor = (turns > 1).then(|| Status::Regen {
                    heal,
                    turns: turns - 1,
                });
                (Some(action), successor)
            }

            Status::Stun { turns } => {
                if trigger != TurnPhase::Start {
                    return (None, Some(self));
                }
                let successor = (turns > 1).then(|| Status::Stun { turns: turns - 1 });
                (None, successor)
            }
        }
    }
}
