//! Combatant identity.
//!
//! A battle holds two pawn collections, one per [`Side`]. A [`PawnId`] names
//! a pawn by side and position so that actions and statuses can refer to
//! combatants without borrowing them - the battle resolves the id at
//! execution time.

use serde::{Deserialize, Serialize};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player-controlled party. Owns the shared deck.
    Player,
    /// The opposing, AI-controlled side.
    Foe,
}

impl Side {
    /// The side this side is fighting.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Foe,
            Side::Foe => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Foe => write!(f, "foe"),
        }
    }
}

/// Identifies a pawn within a battle: a side plus the index into that side's
/// pawn list.
///
/// Ids stay valid for the lifetime of the battle - pawn lists never reorder
/// or shrink; defeated pawns stay in place at zero health.
///
/// ```
/// use cardfray::core::{PawnId, Side};
///
/// let id = PawnId::new(Side::Foe, 1);
/// assert_eq!(id.side, Side::Foe);
/// assert_eq!(format!("{}", id), "foe[1]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnId {
    /// Which side's list the pawn lives in.
    pub side: Side,
    /// Position in that side's list.
    pub index: usize,
}

impl PawnId {
    /// Create a pawn id.
    #[must_use]
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    /// Id of the pawn at `index` on the player side.
    #[must_use]
    pub const fn player(index: usize) -> Self {
        Self::new(Side::Player, index)
    }

    /// Id of the pawn at `index` on the foe side.
    #[must_use]
    pub const fn foe(index: usize) -> Self {
        Self::new(Side::Foe, index)
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.side, self.index)
    }
}
