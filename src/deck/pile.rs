//! An ordered pile of cards.
//!
//! Order is significant everywhere except across a shuffle: the front of
//! the pile is the next card drawn.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::BattleRng;

use super::DeckError;

/// An ordered collection of cards.
///
/// ```
/// use cardfray::cards::{Card, CardId};
/// use cardfray::deck::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(CardId::new(1), "Strike", ""));
/// pile.push(Card::new(CardId::new(2), "Guard", ""));
///
/// assert_eq!(pile.len(), 2);
/// assert_eq!(pile.peek(1)[0].name, "Strike");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile(Vec<Card>);

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    /// View the whole pile in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Get the first `count` cards without removing them, fewer if
    /// unavailable.
    #[must_use]
    pub fn peek(&self, count: usize) -> &[Card] {
        &self.0[..count.min(self.0.len())]
    }

    /// Add a card to the back of the pile.
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Insert a card at `index`, shifting later cards back.
    ///
    /// `index == 0` prepends and `index == len` appends. Fails with
    /// [`DeckError::OutOfBounds`] for `index > len`, leaving the pile
    /// unchanged.
    pub fn insert(&mut self, card: Card, index: usize) -> Result<(), DeckError> {
        if index > self.0.len() {
            return Err(DeckError::OutOfBounds {
                index,
                len: self.0.len(),
            });
        }
        self.0.insert(index, card);
        Ok(())
    }

    /// Remove and return the card at `index`, shifting later cards forward.
    pub fn remove(&mut self, index: usize) -> Result<Card, DeckError> {
        if index >= self.0.len() {
            return Err(DeckError::OutOfBounds {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Remove the first `count` cards, preserving their relative order.
    ///
    /// Takes the whole pile if `count` exceeds its length.
    pub fn take_front(&mut self, count: usize) -> Vec<Card> {
        self.0.drain(..count.min(self.0.len())).collect()
    }

    /// Move every card of `other` to the back of this pile, leaving `other`
    /// empty.
    pub fn append(&mut self, other: &mut Pile) {
        self.0.append(&mut other.0);
    }

    /// Shuffle the pile in place (uniform Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut BattleRng) {
        rng.shuffle(&mut self.0);
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|c| c.name.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}
