//! The four-pile deck engine.
//!
//! A [`Deck`] circulates cards between its draw, hand, and discard piles;
//! the exhaust pile is where cards leave circulation. The invariant after
//! every operation except [`Deck::exhaust`]:
//!
//! `count == draw.len() + discard.len() + hand.len()`
//!
//! A card lives in exactly one pile at a time. `count` only changes through
//! [`Deck::add_card`] (+1) and [`Deck::exhaust`] (-1) - never through
//! drawing, discarding, or reshuffling.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::BattleRng;

use super::{DeckError, Pile};

/// A collection of cards, arranged into draw, hand, discard, and exhaust
/// piles.
///
/// The RNG is an explicit dependency handed in at construction; all
/// shuffles and random placements draw from it.
///
/// ```
/// use cardfray::cards::{Card, CardId};
/// use cardfray::core::BattleRng;
/// use cardfray::deck::Deck;
///
/// let cards: Vec<Card> = (0..10)
///     .map(|i| Card::new(CardId::new(i), format!("Card {i}"), ""))
///     .collect();
/// let mut deck = Deck::new(&cards, BattleRng::new(42));
///
/// assert_eq!(deck.draw_pile().len(), 10);
/// assert_eq!(deck.count(), 10);
///
/// deck.draw_cards(3);
/// assert_eq!(deck.hand().len(), 3);
/// assert_eq!(deck.count(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw: Pile,
    discard: Pile,
    hand: Pile,
    exhaust: Pile,
    count: usize,
    rng: BattleRng,
}

impl Deck {
    /// Create a new deck from a list of card templates.
    ///
    /// Cards are deep-copied, so later mutation of a template never affects
    /// the deck. The full set is shuffled into the draw pile; the other
    /// piles start empty.
    #[must_use]
    pub fn new(cards: &[Card], mut rng: BattleRng) -> Self {
        let mut draw: Pile = cards.iter().cloned().collect();
        draw.shuffle(&mut rng);
        Self {
            count: draw.len(),
            draw,
            discard: Pile::new(),
            hand: Pile::new(),
            exhaust: Pile::new(),
            rng,
        }
    }

    /// Create a deck from card ids mapped to their quantity, resolved
    /// through the registry.
    ///
    /// Fails with [`DeckError::UnknownCard`] if any id has no registered
    /// template; nothing is partially built.
    pub fn from_counts(
        counts: &FxHashMap<CardId, u32>,
        registry: &CardRegistry,
        rng: BattleRng,
    ) -> Result<Self, DeckError> {
        let mut cards = Vec::new();
        for (&id, &quantity) in counts {
            let template = registry.get(id).ok_or(DeckError::UnknownCard(id))?;
            cards.extend(std::iter::repeat_with(|| template.clone()).take(quantity as usize));
        }
        Ok(Self::new(&cards, rng))
    }

    /// The draw pile, front first.
    #[must_use]
    pub fn draw_pile(&self) -> &Pile {
        &self.draw
    }

    /// The discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard
    }

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &Pile {
        &self.hand
    }

    /// The exhaust pile (cards out of circulation).
    #[must_use]
    pub fn exhaust_pile(&self) -> &Pile {
        &self.exhaust
    }

    /// Total cards in circulation (draw + discard + hand).
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Draw cards into the hand. Takes as many as possible from the draw
    /// pile; if it runs out, reshuffles the discard into it and keeps going.
    ///
    /// Asking for more cards than draw and discard hold together is not an
    /// error: the request is capped at what exists, so drawing 0 cards is
    /// fine and the reshuffle loop always terminates.
    ///
    /// Returns the number of cards actually drawn.
    pub fn draw_cards(&mut self, how_many: usize) -> usize {
        let mut remaining = how_many.min(self.draw.len() + self.discard.len());
        let drawn = remaining;
        while remaining > 0 {
            if remaining >= self.draw.len() {
                remaining -= self.draw.len();
                let all = self.draw.take_front(self.draw.len());
                for card in all {
                    self.hand.push(card);
                }
                self.reset_draw();
            } else {
                for card in self.draw.take_front(remaining) {
                    self.hand.push(card);
                }
                remaining = 0;
            }
        }
        drawn
    }

    /// Shuffle the draw and discard piles together into a fresh draw pile.
    ///
    /// Callable with an empty discard - the draw pile alone is reshuffled.
    pub fn reset_draw(&mut self) {
        debug!(
            draw = self.draw.len(),
            discard = self.discard.len(),
            "resetting draw pile"
        );
        self.draw.append(&mut self.discard);
        self.draw.shuffle(&mut self.rng);
    }

    /// Move the hand card at `index` to the front of the discard pile.
    ///
    /// Fails with [`DeckError::OutOfBounds`] for an invalid hand index; the
    /// deck is unchanged on failure.
    pub fn discard(&mut self, index: usize) -> Result<(), DeckError> {
        let card = self.hand.remove(index)?;
        self.discard
            .insert(card, 0)
            .expect("front insert cannot be out of bounds");
        Ok(())
    }

    /// Move the hand card at `index` to the exhaust pile, removing it from
    /// circulation. Decrements the count.
    ///
    /// Fails with [`DeckError::OutOfBounds`] for an invalid hand index; the
    /// deck is unchanged on failure.
    pub fn exhaust(&mut self, index: usize) -> Result<(), DeckError> {
        let card = self.hand.remove(index)?;
        debug!(card = %card, "exhausting card");
        self.exhaust.push(card);
        self.count -= 1;
        Ok(())
    }

    /// Add a card to the circulating pool without disturbing the hand.
    ///
    /// If `to_discard` is true the card goes to the back of the discard
    /// pile, otherwise to a uniformly random position in the draw pile.
    /// Increments the count. This is how combat rewards and curses enter
    /// the deck.
    pub fn add_card(&mut self, card: Card, to_discard: bool) {
        if to_discard {
            self.discard.push(card);
        } else {
            let index = self.rng.gen_range_usize(0..self.draw.len() + 1);
            self.draw
                .insert(card, index)
                .expect("random index is within bounds");
        }
        self.count += 1;
    }
}
