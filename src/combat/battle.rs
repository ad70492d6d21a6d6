//! The battle: two pawn collections, a deck, an action queue, and the turn
//! state machine that drives them.
//!
//! ## Turn machine
//!
//! `Start -> InProgress -> Resolving -> End -> Start (other side) -> ...`
//!
//! Each [`Battle::tick`] performs exactly one transition. Entering `Start`
//! flips the acting side; every transition resolves the active side's
//! statuses with the new phase as trigger before anything else happens in
//! that phase. Queued actions drain FIFO during `Resolving`; the player's
//! hand is topped back up at the player side's `End`.
//!
//! ## Failure semantics
//!
//! Any error out of status resolution or action execution aborts the
//! transition and propagates. The battle stays in its partially-mutated
//! state - the encounter driver must treat such an error as fatal to the
//! encounter, not retryable mid-transition.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::cards::{CardId, CardRegistry};
use crate::core::{BattleConfig, BattleRng, PawnId, Side};
use crate::deck::{Deck, DeckError};

use super::action::Action;
use super::decision::{Decider, FoeId, FoeRegistry};
use super::pawn::{PartyMember, Pawn};
use super::phase::TurnPhase;

/// Errors from battle construction and turn processing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A battle must have at least one opposing pawn.
    #[error("battle must have at least one opposing pawn")]
    NoFoes,

    /// A battle must have at least one party member.
    #[error("battle must have at least one party member")]
    EmptyParty,

    /// The party exceeds the configured cap.
    #[error("party of {got} pawns exceeds the limit of {max}")]
    PartyTooLarge {
        /// Members supplied.
        got: usize,
        /// Configured cap.
        max: usize,
    },

    /// A foe id had no entry in the registry.
    #[error("unknown foe id {0}")]
    UnknownFoe(FoeId),

    /// The turn machine was asked to advance out of an invalid phase.
    #[error("turn machine reached an invalid phase")]
    InvalidPhase,

    /// An action or status referred to a pawn that doesn't exist.
    #[error("no pawn with id {0}")]
    UnknownPawn(PawnId),

    /// An effect cannot legally apply to a defeated pawn.
    #[error("target {0} is already defeated")]
    InvalidTarget(PawnId),

    /// A draw effect was issued for a side that owns no deck.
    #[error("side {0} has no deck")]
    NoDeck(Side),

    /// Only the acting side may queue actions.
    #[error("pawn {pawn} cannot queue while the {active} side is acting")]
    InactiveSide {
        /// The pawn that tried to queue.
        pawn: PawnId,
        /// The side whose turn it is.
        active: Side,
    },

    /// Actions queue during the start and in-progress phases only.
    #[error("action queue is closed during the {0} phase")]
    QueueClosed(TurnPhase),

    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every foe is defeated.
    Victory,
    /// Every party member is defeated.
    Defeat,
}

/// A combat encounter.
///
/// The sole mutable context for the simulation: actions and status
/// resolutions all operate through it. Constructed once per encounter via
/// [`Battle::builder`] and driven by calling [`Battle::tick`] until
/// [`Battle::outcome`] reports a result.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    player_pawns: Vec<Pawn>,
    foe_pawns: Vec<Pawn>,
    deck: Deck,
    action_queue: VecDeque<Action>,
    active_side: Side,
    starting_side: Side,
    turn_number: u32,
    phase: TurnPhase,
}

impl Battle {
    /// Start building a battle.
    #[must_use]
    pub fn builder() -> BattleBuilder {
        BattleBuilder::new()
    }

    /// The current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The side currently acting.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// The turn counter. Starts at 1 and increments each time control
    /// returns to the side that started the encounter.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The battle's configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// A side's pawns, in formation order.
    #[must_use]
    pub fn pawns(&self, side: Side) -> &[Pawn] {
        match side {
            Side::Player => &self.player_pawns,
            Side::Foe => &self.foe_pawns,
        }
    }

    /// Look up a pawn by id.
    pub fn pawn(&self, id: PawnId) -> Result<&Pawn, BattleError> {
        self.pawns(id.side)
            .get(id.index)
            .ok_or(BattleError::UnknownPawn(id))
    }

    /// Look up a pawn by id, mutably.
    pub fn pawn_mut(&mut self, id: PawnId) -> Result<&mut Pawn, BattleError> {
        let pawns = match id.side {
            Side::Player => &mut self.player_pawns,
            Side::Foe => &mut self.foe_pawns,
        };
        pawns.get_mut(id.index).ok_or(BattleError::UnknownPawn(id))
    }

    /// A pawn that must still be in the fight to be a legal effect target.
    pub(crate) fn living_pawn_mut(&mut self, id: PawnId) -> Result<&mut Pawn, BattleError> {
        let pawn = self.pawn_mut(id)?;
        if pawn.is_defeated() {
            return Err(BattleError::InvalidTarget(id));
        }
        Ok(pawn)
    }

    /// The player side's deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The player side's deck, mutably. How a UI plays and discards cards.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// The deck belonging to a side, if it owns one. Only the player side
    /// circulates cards.
    pub(crate) fn deck_for_mut(&mut self, side: Side) -> Result<&mut Deck, BattleError> {
        match side {
            Side::Player => Ok(&mut self.deck),
            Side::Foe => Err(BattleError::NoDeck(side)),
        }
    }

    /// The actions waiting to resolve, front of the queue first.
    pub fn queued_actions(&self) -> impl Iterator<Item = &Action> {
        self.action_queue.iter()
    }

    /// The action queued by `pawn`, if any.
    #[must_use]
    pub fn queued_action(&self, pawn: PawnId) -> Option<&Action> {
        self.action_queue.iter().find(|a| a.executor == pawn)
    }

    /// Queue an action for the resolving phase.
    ///
    /// Open to the acting side during its start and in-progress phases. A
    /// pawn holds at most one queued action: re-queuing evicts the earlier
    /// entry and takes a fresh place at the back of the FIFO. The queue is
    /// unchanged when this fails.
    pub fn queue_action(&mut self, action: Action) -> Result<(), BattleError> {
        self.pawn(action.executor)?;
        if action.executor.side != self.active_side {
            return Err(BattleError::InactiveSide {
                pawn: action.executor,
                active: self.active_side,
            });
        }
        if !matches!(self.phase, TurnPhase::Start | TurnPhase::InProgress) {
            return Err(BattleError::QueueClosed(self.phase));
        }

        self.action_queue.retain(|a| a.executor != action.executor);
        self.action_queue.push_back(action);
        Ok(())
    }

    /// Advance the turn machine by one transition.
    ///
    /// Resolves the active side's statuses with the new phase as trigger
    /// before the phase's own work: decision collection (`InProgress`),
    /// queue drain (`Resolving`), hand top-up (`End`). Entering `Start`
    /// flips the acting side and, when control returns to the side that
    /// started, increments the turn counter.
    ///
    /// Returns the phase transitioned into. Errors abort the transition
    /// mid-flight; see the module docs for the failure contract.
    pub fn tick(&mut self, decider: &mut dyn Decider) -> Result<TurnPhase, BattleError> {
        let next = self.phase.next();
        if next == TurnPhase::Invalid {
            return Err(BattleError::InvalidPhase);
        }
        self.phase = next;

        if next == TurnPhase::Start {
            self.active_side = self.active_side.opponent();
            if self.active_side == self.starting_side {
                self.turn_number += 1;
            }
            debug!(side = %self.active_side, turn = self.turn_number, "turn start");
        }

        self.resolve_statuses(self.active_side, next)?;

        match next {
            TurnPhase::InProgress => self.collect_decisions(decider, next)?,
            TurnPhase::Resolving => self.run_action_queue()?,
            TurnPhase::End => self.refill_hand(),
            _ => {}
        }

        Ok(next)
    }

    /// Whether the encounter has ended, and how.
    ///
    /// A wiped party is a defeat even if the last foe fell simultaneously.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player_pawns.iter().all(Pawn::is_defeated) {
            Some(Outcome::Defeat)
        } else if self.foe_pawns.iter().all(Pawn::is_defeated) {
            Some(Outcome::Victory)
        } else {
            None
        }
    }

    /// Whether the encounter has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Resolve every status on a side's pawns, in pawn order then list
    /// order, executing emitted actions immediately.
    ///
    /// Each pawn's list is replaced by exactly the successors its statuses
    /// returned. Pawns already defeated when the pass begins are skipped; a
    /// pawn that falls mid-pass still resolves its remaining statuses.
    fn resolve_statuses(&mut self, side: Side, trigger: TurnPhase) -> Result<(), BattleError> {
        for index in 0..self.pawns(side).len() {
            let id = PawnId::new(side, index);
            if self.pawn(id)?.is_defeated() {
                continue;
            }

            let statuses = std::mem::take(&mut self.pawn_mut(id)?.statuses);
            let mut successors = Vec::with_capacity(statuses.len());
            for status in statuses {
                let (action, successor) = status.resolve(id, trigger);
                if let Some(action) = action {
                    action.execute(self)?;
                }
                match successor {
                    Some(successor) => successors.push(successor),
                    None => debug!(pawn = %id, "status expired"),
                }
            }
            self.pawn_mut(id)?.statuses = successors;
        }
        Ok(())
    }

    /// Ask the decider for each living pawn of the acting side and queue
    /// whatever it produces.
    fn collect_decisions(
        &mut self,
        decider: &mut dyn Decider,
        trigger: TurnPhase,
    ) -> Result<(), BattleError> {
        for index in 0..self.pawns(self.active_side).len() {
            let id = PawnId::new(self.active_side, index);
            if self.pawn(id)?.is_defeated() {
                continue;
            }
            if let Some(action) = decider.decide(self, id, trigger)? {
                self.queue_action(action)?;
            }
        }
        Ok(())
    }

    /// Execute queued actions in FIFO order of queuing.
    fn run_action_queue(&mut self) -> Result<(), BattleError> {
        while let Some(action) = self.action_queue.pop_front() {
            debug!(executor = %action.executor, "executing queued action");
            action.execute(self)?;
        }
        Ok(())
    }

    /// Top the player's hand back up to the configured hand size. The foe
    /// side owns no deck, so its turn end circulates nothing.
    fn refill_hand(&mut self) {
        if self.active_side != Side::Player {
            return;
        }
        let want = self.config.hand_size.saturating_sub(self.deck.hand().len());
        if want > 0 {
            let drawn = self.deck.draw_cards(want);
            debug!(drawn, hand = self.deck.hand().len(), "hand topped up");
        }
    }
}

/// Builder for a [`Battle`].
///
/// ## Example
///
/// ```
/// use cardfray::cards::CardRegistry;
/// use cardfray::combat::{Battle, FoeId, FoeRegistry, FoeTemplate, PartyMember};
/// use cardfray::core::BattleRng;
///
/// let mut cards = CardRegistry::new();
/// let strike = cards.register_auto("Strike", "Deal 3 damage.");
///
/// let mut foes = FoeRegistry::new();
/// foes.register(FoeTemplate::new(FoeId::new(0), "Slime", 8, 2));
///
/// let battle = Battle::builder()
///     .member(PartyMember::new("Ranger", 20))
///     .foe(FoeId::new(0))
///     .card(strike, 10)
///     .build(&cards, &foes, BattleRng::new(42))
///     .unwrap();
///
/// assert_eq!(battle.deck().hand().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct BattleBuilder {
    party: Vec<PartyMember>,
    foes: Vec<FoeId>,
    player_starts: bool,
    cards: FxHashMap<CardId, u32>,
    config: BattleConfig,
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self {
            party: Vec::new(),
            foes: Vec::new(),
            player_starts: true,
            cards: FxHashMap::default(),
            config: BattleConfig::default(),
        }
    }
}

impl BattleBuilder {
    /// Create a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a party member.
    #[must_use]
    pub fn member(mut self, member: PartyMember) -> Self {
        self.party.push(member);
        self
    }

    /// Add a whole party.
    #[must_use]
    pub fn party(mut self, members: &[PartyMember]) -> Self {
        self.party.extend_from_slice(members);
        self
    }

    /// Add an opposing pawn by foe id.
    #[must_use]
    pub fn foe(mut self, id: FoeId) -> Self {
        self.foes.push(id);
        self
    }

    /// Add several opposing pawns.
    #[must_use]
    pub fn foes(mut self, ids: &[FoeId]) -> Self {
        self.foes.extend_from_slice(ids);
        self
    }

    /// Which side takes the first turn. Defaults to the player.
    #[must_use]
    pub fn player_starts(mut self, player_starts: bool) -> Self {
        self.player_starts = player_starts;
        self
    }

    /// Add `quantity` copies of a card to the player's deck.
    #[must_use]
    pub fn card(mut self, id: CardId, quantity: u32) -> Self {
        *self.cards.entry(id).or_insert(0) += quantity;
        self
    }

    /// Override the battle configuration.
    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the battle, resolving cards and foes through their registries
    /// and drawing the opening hand.
    ///
    /// Fails on a malformed roster (no foes, no party, oversized party, an
    /// unknown foe id) or an unresolvable card id.
    pub fn build(
        self,
        cards: &CardRegistry,
        foes: &FoeRegistry,
        rng: BattleRng,
    ) -> Result<Battle, BattleError> {
        if self.foes.is_empty() {
            return Err(BattleError::NoFoes);
        }
        if self.party.is_empty() {
            return Err(BattleError::EmptyParty);
        }
        if self.party.len() > self.config.max_party_size {
            return Err(BattleError::PartyTooLarge {
                got: self.party.len(),
                max: self.config.max_party_size,
            });
        }

        let foe_pawns: Vec<Pawn> = self
            .foes
            .iter()
            .map(|&id| {
                foes.get(id)
                    .map(Pawn::from_foe)
                    .ok_or(BattleError::UnknownFoe(id))
            })
            .collect::<Result<_, _>>()?;
        let player_pawns: Vec<Pawn> = self.party.iter().map(Pawn::from_member).collect();

        let mut deck = Deck::from_counts(&self.cards, cards, rng)?;
        let opening = deck.draw_cards(self.config.hand_size);

        let starting_side = if self.player_starts {
            Side::Player
        } else {
            Side::Foe
        };
        debug!(
            party = player_pawns.len(),
            foes = foe_pawns.len(),
            opening,
            side = %starting_side,
            "battle ready"
        );

        Ok(Battle {
            action_queue: VecDeque::with_capacity(player_pawns.len().max(foe_pawns.len())),
            config: self.config,
            player_pawns,
            foe_pawns,
            deck,
            active_side: starting_side,
            starting_side,
            turn_number: 1,
            phase: TurnPhase::Start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::decision::FoeTemplate;

    fn registries() -> (CardRegistry, FoeRegistry) {
        let mut cards = CardRegistry::new();
        for i in 0..10 {
            cards.register_auto(format!("Card {i}"), "");
        }
        let mut foes = FoeRegistry::new();
        foes.register(FoeTemplate::new(FoeId::new(0), "Slime", 8, 2));
        (cards, foes)
    }

    fn small_battle() -> Battle {
        let (cards, foes) = registries();
        let mut builder = Battle::builder()
            .member(PartyMember::new("Ranger", 20))
            .foe(FoeId::new(0));
        for card in cards.iter() {
            builder = builder.card(card.id, 1);
        }
        builder.build(&cards, &foes, BattleRng::new(42)).unwrap()
    }

    #[test]
    fn test_build_requires_foes() {
        let (cards, foes) = registries();
        let err = Battle::builder()
            .member(PartyMember::new("Ranger", 20))
            .build(&cards, &foes, BattleRng::new(42))
            .unwrap_err();
        assert_eq!(err, BattleError::NoFoes);
    }

    #[test]
    fn test_build_caps_party_size() {
        let (cards, foes) = registries();
        let member = PartyMember::new("Ranger", 20);
        let err = Battle::builder()
            .party(&[member.clone(), member.clone(), member.clone(), member])
            .foe(FoeId::new(0))
            .build(&cards, &foes, BattleRng::new(42))
            .unwrap_err();
        assert_eq!(err, BattleError::PartyTooLarge { got: 4, max: 3 });
    }

    #[test]
    fn test_build_rejects_unknown_foe() {
        let (cards, foes) = registries();
        let err = Battle::builder()
            .member(PartyMember::new("Ranger", 20))
            .foe(FoeId::new(99))
            .build(&cards, &foes, BattleRng::new(42))
            .unwrap_err();
        assert_eq!(err, BattleError::UnknownFoe(FoeId::new(99)));
    }

    #[test]
    fn test_build_draws_opening_hand() {
        let battle = small_battle();
        assert_eq!(battle.deck().hand().len(), 5);
        assert_eq!(battle.deck().count(), 10);
        assert_eq!(battle.phase(), TurnPhase::Start);
        assert_eq!(battle.turn_number(), 1);
        assert_eq!(battle.active_side(), Side::Player);
    }

    #[test]
    fn test_queue_rejects_inactive_side() {
        let mut battle = small_battle();
        let action = Action::with_targets(
            PawnId::foe(0),
            &[PawnId::player(0)],
            crate::combat::EffectKind::Damage(2),
        );
        let err = battle.queue_action(action).unwrap_err();
        assert_eq!(
            err,
            BattleError::InactiveSide {
                pawn: PawnId::foe(0),
                active: Side::Player,
            }
        );
        assert_eq!(battle.queued_actions().count(), 0);
    }
}
