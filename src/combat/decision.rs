//! The decision point: how a side produces its queued action.
//!
//! The core exposes one contract, [`Decider`], for both AI-controlled and
//! (indirectly) player-controlled sides: given the battle and a trigger
//! reason, produce zero-or-one action. How the decision is made - scripted
//! routine, player UI - is not this crate's concern, only that it happens
//! before the resolving phase consumes the queue.
//!
//! Foe identities resolve through the [`FoeRegistry`], the enemy-lookup
//! collaborator battles are built against.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PawnId;
use crate::view::SpriteId;

use super::action::{Action, EffectKind};
use super::battle::{Battle, BattleError};
use super::phase::TurnPhase;

/// Unique identifier for a foe's static data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoeId(pub u32);

impl FoeId {
    /// Create a new foe id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FoeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Foe({})", self.0)
    }
}

/// Static data for an opposing combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoeTemplate {
    /// Identifier the template is registered under.
    pub id: FoeId,
    /// Display name.
    pub name: String,
    /// Health the foe enters combat with.
    pub max_health: i32,
    /// Damage dealt by the foe's basic attack.
    pub attack: i32,
    /// Visual handle, resolved by the render layer.
    pub sprite: Option<SpriteId>,
}

impl FoeTemplate {
    /// Create a foe template.
    #[must_use]
    pub fn new(id: FoeId, name: impl Into<String>, max_health: i32, attack: i32) -> Self {
        Self {
            id,
            name: name.into(),
            max_health,
            attack,
            sprite: None,
        }
    }

    /// Attach a visual handle.
    #[must_use]
    pub fn with_sprite(mut self, sprite: SpriteId) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

/// Registry of foe templates.
///
/// ## Example
///
/// ```
/// use cardfray::combat::{FoeId, FoeRegistry, FoeTemplate};
///
/// let mut registry = FoeRegistry::new();
/// registry.register(FoeTemplate::new(FoeId::new(1), "Slime", 8, 2));
///
/// assert_eq!(registry.get(FoeId::new(1)).unwrap().name, "Slime");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FoeRegistry {
    foes: FxHashMap<FoeId, FoeTemplate>,
}

impl FoeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a foe template.
    ///
    /// Panics if a foe with the same id already exists.
    pub fn register(&mut self, template: FoeTemplate) {
        if self.foes.contains_key(&template.id) {
            panic!("Foe with id {} already registered", template.id);
        }
        self.foes.insert(template.id, template);
    }

    /// Get a foe template by id.
    #[must_use]
    pub fn get(&self, id: FoeId) -> Option<&FoeTemplate> {
        self.foes.get(&id)
    }

    /// Check if a foe id is registered.
    #[must_use]
    pub fn contains(&self, id: FoeId) -> bool {
        self.foes.contains_key(&id)
    }

    /// Get the number of registered foes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foes.is_empty()
    }

    /// Iterate over all foe templates.
    pub fn iter(&self) -> impl Iterator<Item = &FoeTemplate> {
        self.foes.values()
    }
}

/// The decision-point contract.
///
/// Called once per living pawn of the acting side when the turn reaches
/// its in-progress phase. Returning `Ok(None)` queues nothing - the pawn
/// sits the turn out (or, for player pawns, the UI queues separately
/// through `Battle::queue_action`).
pub trait Decider {
    /// Choose a course of action for `pawn`, or none.
    fn decide(
        &mut self,
        battle: &Battle,
        pawn: PawnId,
        trigger: TurnPhase,
    ) -> Result<Option<Action>, BattleError>;
}

/// A decider that never acts.
///
/// Stand-in for sides whose actions arrive from outside the tick (a player
/// UI), and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDecider;

impl Decider for NullDecider {
    fn decide(
        &mut self,
        _battle: &Battle,
        _pawn: PawnId,
        _trigger: TurnPhase,
    ) -> Result<Option<Action>, BattleError> {
        Ok(None)
    }
}

/// A minimal scripted routine: attack the first living opponent with the
/// pawn's own attack value.
///
/// Stunned pawns and pawns with no attack pass. This is the reference AI;
/// anything smarter belongs to the embedding game.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedDecider;

impl Decider for ScriptedDecider {
    fn decide(
        &mut self,
        battle: &Battle,
        pawn: PawnId,
        _trigger: TurnPhase,
    ) -> Result<Option<Action>, BattleError> {
        let actor = battle.pawn(pawn)?;
        if actor.is_stunned() || actor.attack <= 0 {
            return Ok(None);
        }

        let target_side = pawn.side.opponent();
        let target = battle
            .pawns(target_side)
            .iter()
            .position(|p| !p.is_defeated())
            .map(|index| PawnId::new(target_side, index));

        Ok(target.map(|target| {
            Action::with_targets(pawn, &[target], EffectKind::Damage(actor.attack))
        }))
    }
}
