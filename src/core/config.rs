//! Battle configuration.
//!
//! Knobs the encounter driver sets once at construction. Defaults match the
//! standard encounter: a five-card hand and up to three party members.

use serde::{Deserialize, Serialize};

/// Configuration for a single battle.
///
/// ```
/// use cardfray::core::BattleConfig;
///
/// let config = BattleConfig::default().with_hand_size(7);
/// assert_eq!(config.hand_size, 7);
/// assert_eq!(config.max_party_size, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Hand size the player's hand is topped back up to at turn end.
    pub hand_size: usize,

    /// Maximum pawns allowed on the player side.
    pub max_party_size: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            max_party_size: 3,
        }
    }
}

impl BattleConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the party size cap.
    #[must_use]
    pub fn with_max_party_size(mut self, max_party_size: usize) -> Self {
        self.max_party_size = max_party_size;
        self
    }
}
