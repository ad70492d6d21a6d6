//! Combatants.
//!
//! A [`Pawn`] is a participant in a battle: health, an ordered list of
//! active statuses, and an opaque handle to whatever visual represents it.
//! Player-side pawns are built from [`PartyMember`] templates; foe-side
//! pawns from resolved [`FoeTemplate`]s.
//!
//! [`FoeTemplate`]: super::FoeTemplate

use serde::{Deserialize, Serialize};

use crate::view::SpriteId;

use super::decision::FoeTemplate;
use super::status::Status;

/// A party member template used to build player-side pawns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    /// Display name.
    pub name: String,
    /// Health ceiling.
    pub max_health: i32,
    /// Health carried into the encounter.
    pub current_health: i32,
    /// Visual handle, resolved by the render layer.
    pub sprite: Option<SpriteId>,
}

impl PartyMember {
    /// Create a member at full health.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        Self {
            name: name.into(),
            max_health,
            current_health: max_health,
            sprite: None,
        }
    }

    /// Set the health carried into the encounter.
    #[must_use]
    pub fn with_health(mut self, current_health: i32) -> Self {
        self.current_health = current_health;
        self
    }

    /// Attach a visual handle.
    #[must_use]
    pub fn with_sprite(mut self, sprite: SpriteId) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

/// A combatant.
///
/// Health always satisfies `0 <= current_health <= max_health`; the
/// [`Pawn::take_damage`] and [`Pawn::heal`] operations clamp to keep it so.
/// Statuses resolve in list order - see the battle's status pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawn {
    /// Display name.
    pub name: String,
    /// Health ceiling.
    pub max_health: i32,
    /// Current health. 0 means defeated.
    pub current_health: i32,
    /// Damage dealt by this pawn's basic attack. 0 for pawns that act only
    /// through cards.
    pub attack: i32,
    /// Active statuses, in resolution order.
    pub statuses: Vec<Status>,
    /// Visual handle, resolved by the render layer.
    pub sprite: Option<SpriteId>,
}

impl Pawn {
    /// Create a pawn at full health with no statuses.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        Self {
            name: name.into(),
            max_health,
            current_health: max_health,
            attack: 0,
            statuses: Vec::new(),
            sprite: None,
        }
    }

    /// Build a player-side pawn from a party member, clamping carried
    /// health into range.
    #[must_use]
    pub fn from_member(member: &PartyMember) -> Self {
        Self {
            name: member.name.clone(),
            max_health: member.max_health,
            current_health: member.current_health.clamp(0, member.max_health),
            attack: 0,
            statuses: Vec::new(),
            sprite: member.sprite,
        }
    }

    /// Build a foe-side pawn from a resolved foe template.
    #[must_use]
    pub fn from_foe(template: &FoeTemplate) -> Self {
        Self {
            name: template.name.clone(),
            max_health: template.max_health,
            current_health: template.max_health,
            attack: template.attack,
            statuses: Vec::new(),
            sprite: template.sprite,
        }
    }

    /// Reduce health by `amount`, clamping at zero.
    ///
    /// Negative amounts are treated as zero. Returns the damage actually
    /// dealt.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let dealt = amount.max(0).min(self.current_health);
        self.current_health -= dealt;
        dealt
    }

    /// Raise health by `amount`, clamping at the ceiling.
    ///
    /// Negative amounts are treated as zero. Returns the health actually
    /// restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.max(0).min(self.max_health - self.current_health);
        self.current_health += healed;
        healed
    }

    /// A pawn at zero health is out of the fight.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0
    }

    /// Whether a stun status is active. Deciders consult this.
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.statuses
            .iter()
            .any(|s| matches!(s, Status::Stun { .. }))
    }

    /// Append a status to the resolution list.
    pub fn add_status(&mut self, status: Status) {
        self.statuses.push(status);
    }
}
