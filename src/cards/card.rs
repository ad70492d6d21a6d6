//! Card values.
//!
//! `CardId` is the preferred way to communicate card data between systems;
//! the full [`Card`] is resolved through the [`CardRegistry`] when a deck is
//! built.
//!
//! [`CardRegistry`]: super::CardRegistry

use serde::{Deserialize, Serialize};

/// Unique identifier for a card's static data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card id.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static data for a card.
///
/// Immutable once created. Decks clone cards rather than share them, so a
/// card value in a pile belongs to that deck alone.
///
/// ```
/// use cardfray::cards::{Card, CardId};
///
/// let strike = Card::new(CardId::new(1), "Strike", "Deal 3 damage.");
/// assert_eq!(strike.name, "Strike");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identifier for pulling static card data.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rules/flavor text shown to the player.
    pub description: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Placeholder card for when a real one isn't available yet.
    #[must_use]
    pub fn dummy() -> Self {
        Self::new(CardId::new(0), "Dummy", "This card does nothing!")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
