//! Card registry for template lookup.
//!
//! The registry is the card-lookup collaborator the deck engine resolves
//! `CardId -> quantity` maps through. Where the card data itself comes from
//! (asset manifests, test fixtures) is not this crate's concern.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use cardfray::cards::{Card, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Strike", "Deal 3 damage."));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    ///
    /// Panics if a card with the same id already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with id {} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned id.
    ///
    /// Returns the assigned id.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CardId {
        let id = CardId::new(self.next_id);
        self.register(Card::new(id, name, description));
        id
    }

    /// Get a card template by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card templates.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}
