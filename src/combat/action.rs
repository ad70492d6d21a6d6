//! Actions: bound, executable effects.
//!
//! An [`Action`] is a plain data record - an executor, a target list, and
//! an effect identifier - not a closure. [`EffectKind::apply`] is the one
//! table mapping effect identifiers to their behavior against the battle.
//!
//! Actions are the sole mechanism by which anything mutates battle state:
//! player plays, AI attacks, and status-triggered effects all flow through
//! [`Action::execute`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::PawnId;

use super::battle::{Battle, BattleError};
use super::status::Status;

/// The effect an action applies to its targets.
///
/// Each variant names a pure transformation of (battle, executor, targets);
/// the dispatch lives in [`EffectKind::apply`]. Keeping effects as data
/// rather than closures keeps actions comparable and serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Deal damage to each target. Fails on a defeated target.
    Damage(i32),

    /// Restore health to each target. Fails on a defeated target.
    Heal(i32),

    /// Attach a status to each target. Fails on a defeated target.
    ApplyStatus(Status),

    /// Draw cards into the executor's side's hand. Fails for a side that
    /// owns no deck.
    DrawCards(usize),
}

impl EffectKind {
    /// Apply this effect with the battle as context.
    ///
    /// The error is the effect's own legality failure - no generic
    /// validation happens here.
    pub fn apply(
        &self,
        battle: &mut Battle,
        executor: PawnId,
        targets: &[PawnId],
    ) -> Result<(), BattleError> {
        match self {
            EffectKind::Damage(amount) => {
                for &target in targets {
                    let dealt = battle.living_pawn_mut(target)?.take_damage(*amount);
                    debug!(%executor, %target, dealt, "damage");
                }
                Ok(())
            }

            EffectKind::Heal(amount) => {
                for &target in targets {
                    let healed = battle.living_pawn_mut(target)?.heal(*amount);
                    debug!(%executor, %target, healed, "heal");
                }
                Ok(())
            }

            EffectKind::ApplyStatus(status) => {
                for &target in targets {
                    battle.living_pawn_mut(target)?.add_status(status.clone());
                    debug!(%executor, %target, "status applied");
                }
                Ok(())
            }

            EffectKind::DrawCards(count) => {
                let drawn = battle.deck_for_mut(executor.side)?.draw_cards(*count);
                debug!(%executor, drawn, "drew cards");
                Ok(())
            }
        }
    }
}

/// A combat action: an executor, a set of targets, and an effect.
///
/// Executing it applies the effect to all targets, in target-list order,
/// and may fail; the wrapper imposes no validation of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The pawn performing the action.
    pub executor: PawnId,

    /// The pawns the effect applies to. Most actions have one or two
    /// targets; effects like card draw have none.
    pub targets: SmallVec<[PawnId; 2]>,

    /// What the action does.
    pub effect: EffectKind,
}

impl Action {
    /// Create an action with no targets.
    #[must_use]
    pub fn new(executor: PawnId, effect: EffectKind) -> Self {
        Self {
            executor,
            targets: SmallVec::new(),
            effect,
        }
    }

    /// Create an action with the given targets.
    #[must_use]
    pub fn with_targets(executor: PawnId, targets: &[PawnId], effect: EffectKind) -> Self {
        Self {
            executor,
            targets: SmallVec::from_slice(targets),
            effect,
        }
    }

    /// Perform the action against the battle.
    pub fn execute(&self, battle: &mut Battle) -> Result<(), BattleError> {
        self.effect.apply(battle, self.executor, &self.targets)
    }
}
