//! Turn machine integration tests.
//!
//! These drive whole turns through `Battle::tick` and verify the phase
//! sequence, side flipping, status resolution order, FIFO action
//! execution, hand top-up, and the decision-point contract.

use cardfray::cards::CardRegistry;
use cardfray::combat::{
    Action, Battle, BattleError, Decider, EffectKind, FoeId, FoeRegistry, FoeTemplate,
    NullDecider, Outcome, PartyMember, ScriptedDecider, Status, TurnPhase,
};
use cardfray::core::{BattleRng, PawnId, Side};

fn registries() -> (CardRegistry, FoeRegistry) {
    let mut cards = CardRegistry::new();
    for i in 0..10 {
        cards.register_auto(format!("Card {i}"), "");
    }

    let mut foes = FoeRegistry::new();
    foes.register(FoeTemplate::new(FoeId::new(0), "Slime", 8, 2));
    foes.register(FoeTemplate::new(FoeId::new(1), "Bandit", 12, 3));

    (cards, foes)
}

fn builder_with_deck(cards: &CardRegistry) -> cardfray::combat::BattleBuilder {
    let mut builder = Battle::builder();
    for card in cards.iter() {
        builder = builder.card(card.id, 1);
    }
    builder
}

/// One member, one foe, player starts.
fn duel() -> Battle {
    let (cards, foes) = registries();
    builder_with_deck(&cards)
        .member(PartyMember::new("Ranger", 20))
        .foe(FoeId::new(0))
        .build(&cards, &foes, BattleRng::new(42))
        .unwrap()
}

// =============================================================================
// Phase sequence and side flipping
// =============================================================================

/// A full cycle is Start -> InProgress -> Resolving -> End -> Start, with
/// the side flipping exactly once, on the wrap into Start.
#[test]
fn test_cycle_flips_side_exactly_once() {
    let mut battle = duel();
    let mut decider = NullDecider;
    assert_eq!(battle.phase(), TurnPhase::Start);
    assert_eq!(battle.active_side(), Side::Player);

    let expected = [
        (TurnPhase::InProgress, Side::Player),
        (TurnPhase::Resolving, Side::Player),
        (TurnPhase::End, Side::Player),
        (TurnPhase::Start, Side::Foe),
    ];
    for (phase, side) in expected {
        assert_eq!(battle.tick(&mut decider).unwrap(), phase);
        assert_eq!(battle.active_side(), side);
    }
    assert_eq!(battle.turn_number(), 1);
}

/// The turn counter increments when control returns to the side that
/// started the encounter, and only then.
#[test]
fn test_turn_counter_increments_on_return_to_starter() {
    let mut battle = duel();
    let mut decider = NullDecider;

    for _ in 0..4 {
        battle.tick(&mut decider).unwrap();
    }
    assert_eq!(battle.active_side(), Side::Foe);
    assert_eq!(battle.turn_number(), 1);

    for _ in 0..4 {
        battle.tick(&mut decider).unwrap();
    }
    assert_eq!(battle.active_side(), Side::Player);
    assert_eq!(battle.turn_number(), 2);
}

// =============================================================================
// Status resolution
// =============================================================================

/// A single poison with one turn left deals its damage at turn end and
/// expires, leaving zero statuses behind.
#[test]
fn test_poison_fires_and_expires() {
    let mut battle = duel();
    let hero = PawnId::player(0);
    battle
        .pawn_mut(hero)
        .unwrap()
        .add_status(Status::Poison { damage: 1, turns: 1 });

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap(); // InProgress
    battle.tick(&mut decider).unwrap(); // Resolving
    battle.tick(&mut decider).unwrap(); // End - poison triggers here

    let hero = battle.pawn(hero).unwrap();
    assert_eq!(hero.current_health, 19);
    assert!(hero.statuses.is_empty());
}

/// Regen triggers at the owner's turn start - which, for the player in a
/// player-first battle, is the start of the second cycle.
#[test]
fn test_regen_fires_on_owners_turn_start() {
    let mut battle = duel();
    let hero = PawnId::player(0);
    battle.pawn_mut(hero).unwrap().take_damage(10);
    battle
        .pawn_mut(hero)
        .unwrap()
        .add_status(Status::Regen { heal: 2, turns: 2 });

    let mut decider = NullDecider;
    // Player's remaining phases plus the whole foe turn: regen untouched.
    for _ in 0..7 {
        battle.tick(&mut decider).unwrap();
    }
    assert_eq!(battle.pawn(hero).unwrap().current_health, 10);

    // Control returns to the player: regen fires and counts down.
    assert_eq!(battle.tick(&mut decider).unwrap(), TurnPhase::Start);
    let hero = battle.pawn(hero).unwrap();
    assert_eq!(hero.current_health, 12);
    assert_eq!(hero.statuses, vec![Status::Regen { heal: 2, turns: 1 }]);
}

/// Statuses resolve in list order and their actions execute immediately:
/// when an earlier status kills the owner, a later self-targeting status
/// finds a defeated target and the transition aborts with its error.
#[test]
fn test_status_order_is_list_order() {
    let mut battle = duel();
    let hero = PawnId::player(0);
    {
        let pawn = battle.pawn_mut(hero).unwrap();
        pawn.take_damage(18); // 2 health left
        pawn.add_status(Status::Poison { damage: 5, turns: 1 });
        pawn.add_status(Status::Poison { damage: 1, turns: 1 });
    }

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap();
    battle.tick(&mut decider).unwrap();

    let err = battle.tick(&mut decider).unwrap_err();
    assert_eq!(err, BattleError::InvalidTarget(hero));
}

// =============================================================================
// Action queue
// =============================================================================

/// Queued actions drain in FIFO order of queuing: the first action kills
/// the foe, so the second finds a defeated target and errors.
#[test]
fn test_queue_drains_fifo() {
    let (cards, foes) = registries();
    let mut battle = builder_with_deck(&cards)
        .member(PartyMember::new("Ranger", 20))
        .member(PartyMember::new("Acolyte", 16))
        .foe(FoeId::new(0))
        .build(&cards, &foes, BattleRng::new(42))
        .unwrap();
    let target = PawnId::foe(0);

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap(); // InProgress - queue opens

    battle
        .queue_action(Action::with_targets(
            PawnId::player(0),
            &[target],
            EffectKind::Damage(50),
        ))
        .unwrap();
    battle
        .queue_action(Action::with_targets(
            PawnId::player(1),
            &[target],
            EffectKind::Heal(1),
        ))
        .unwrap();

    let err = battle.tick(&mut decider).unwrap_err();
    assert_eq!(err, BattleError::InvalidTarget(target));
    assert_eq!(battle.pawn(target).unwrap().current_health, 0);
}

/// Both queued actions execute when they stay legal.
#[test]
fn test_queue_executes_all_actions() {
    let mut battle = duel();
    let target = PawnId::foe(0);

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap();

    battle
        .queue_action(Action::with_targets(
            PawnId::player(0),
            &[target],
            EffectKind::Damage(3),
        ))
        .unwrap();
    battle.tick(&mut decider).unwrap(); // Resolving

    assert_eq!(battle.pawn(target).unwrap().current_health, 5);
    assert_eq!(battle.queued_actions().count(), 0);
}

/// Re-queuing for the same executor replaces the earlier entry.
#[test]
fn test_requeue_replaces_earlier_entry() {
    let mut battle = duel();
    let hero = PawnId::player(0);
    let target = PawnId::foe(0);

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap();

    battle
        .queue_action(Action::with_targets(hero, &[target], EffectKind::Damage(3)))
        .unwrap();
    battle
        .queue_action(Action::with_targets(hero, &[target], EffectKind::Damage(5)))
        .unwrap();

    assert_eq!(battle.queued_actions().count(), 1);
    assert_eq!(
        battle.queued_action(hero).unwrap().effect,
        EffectKind::Damage(5)
    );

    battle.tick(&mut decider).unwrap();
    assert_eq!(battle.pawn(target).unwrap().current_health, 3);
}

/// The queue closes once resolving begins.
#[test]
fn test_queue_closed_after_in_progress() {
    let mut battle = duel();
    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap();
    battle.tick(&mut decider).unwrap(); // now in Resolving

    let err = battle
        .queue_action(Action::with_targets(
            PawnId::player(0),
            &[PawnId::foe(0)],
            EffectKind::Damage(3),
        ))
        .unwrap_err();
    assert_eq!(err, BattleError::QueueClosed(TurnPhase::Resolving));
}

/// Card-draw effects run through the same action path as everything else,
/// and a side without a deck cannot draw.
#[test]
fn test_draw_action_and_no_deck_error() {
    let mut battle = duel();
    let mut decider = NullDecider;
    battle.deck_mut().discard(0).unwrap();
    battle.deck_mut().discard(0).unwrap();
    assert_eq!(battle.deck().hand().len(), 3);

    battle.tick(&mut decider).unwrap();
    battle
        .queue_action(Action::new(PawnId::player(0), EffectKind::DrawCards(2)))
        .unwrap();
    battle.tick(&mut decider).unwrap();
    assert_eq!(battle.deck().hand().len(), 5);

    // A foe trying the same thing has no deck to draw from.
    struct DrawingDecider;
    impl Decider for DrawingDecider {
        fn decide(
            &mut self,
            _battle: &Battle,
            pawn: PawnId,
            _trigger: TurnPhase,
        ) -> Result<Option<Action>, BattleError> {
            Ok(Some(Action::new(pawn, EffectKind::DrawCards(1))))
        }
    }

    battle.tick(&mut decider).unwrap(); // End
    battle.tick(&mut decider).unwrap(); // Start, foe side
    let mut drawing = DrawingDecider;
    battle.tick(&mut drawing).unwrap(); // InProgress - foe queues a draw
    let err = battle.tick(&mut drawing).unwrap_err();
    assert_eq!(err, BattleError::NoDeck(Side::Foe));
}

// =============================================================================
// Hand top-up
// =============================================================================

/// At the player's turn end the hand is topped back up to the configured
/// hand size.
#[test]
fn test_hand_topped_up_at_turn_end() {
    let mut battle = duel();
    battle.deck_mut().discard(0).unwrap();
    battle.deck_mut().discard(0).unwrap();
    assert_eq!(battle.deck().hand().len(), 3);

    let mut decider = NullDecider;
    battle.tick(&mut decider).unwrap(); // InProgress
    battle.tick(&mut decider).unwrap(); // Resolving
    battle.tick(&mut decider).unwrap(); // End

    assert_eq!(battle.deck().hand().len(), 5);
    assert_eq!(battle.deck().count(), 10);
}

// =============================================================================
// Decision point
// =============================================================================

/// The scripted routine attacks the first living opponent with the pawn's
/// attack value during the foe's turn.
#[test]
fn test_scripted_decider_attacks() {
    let (cards, foes) = registries();
    let mut battle = builder_with_deck(&cards)
        .member(PartyMember::new("Ranger", 20))
        .foes(&[FoeId::new(0), FoeId::new(1)])
        .player_starts(false)
        .build(&cards, &foes, BattleRng::new(42))
        .unwrap();
    assert_eq!(battle.active_side(), Side::Foe);

    let mut decider = ScriptedDecider;
    battle.tick(&mut decider).unwrap(); // InProgress - both foes decide
    assert_eq!(battle.queued_actions().count(), 2);
    battle.tick(&mut decider).unwrap(); // Resolving

    // Slime for 2 plus Bandit for 3.
    assert_eq!(battle.pawn(PawnId::player(0)).unwrap().current_health, 15);
}

/// A stunned pawn sits its turn out, and the stun counts down at its
/// owner's turn start.
#[test]
fn test_stun_suppresses_scripted_decider() {
    let (cards, foes) = registries();
    let mut battle = builder_with_deck(&cards)
        .member(PartyMember::new("Ranger", 20))
        .foe(FoeId::new(0))
        .player_starts(false)
        .build(&cards, &foes, BattleRng::new(42))
        .unwrap();
    battle
        .pawn_mut(PawnId::foe(0))
        .unwrap()
        .add_status(Status::Stun { turns: 1 });

    let mut decider = ScriptedDecider;
    battle.tick(&mut decider).unwrap(); // InProgress - stunned, no decision
    assert_eq!(battle.queued_actions().count(), 0);
    battle.tick(&mut decider).unwrap(); // Resolving
    assert_eq!(battle.pawn(PawnId::player(0)).unwrap().current_health, 20);

    // The stun expires at the foe's next turn start.
    for _ in 0..6 {
        battle.tick(&mut decider).unwrap();
    }
    assert_eq!(battle.active_side(), Side::Foe);
    assert_eq!(battle.phase(), TurnPhase::Start);
    assert!(battle.pawn(PawnId::foe(0)).unwrap().statuses.is_empty());
}

// =============================================================================
// Outcome
// =============================================================================

#[test]
fn test_outcome_reports_victory_and_defeat() {
    let mut battle = duel();
    assert_eq!(battle.outcome(), None);
    assert!(!battle.is_over());

    battle.pawn_mut(PawnId::foe(0)).unwrap().take_damage(100);
    assert_eq!(battle.outcome(), Some(Outcome::Victory));

    battle.pawn_mut(PawnId::player(0)).unwrap().take_damage(100);
    assert_eq!(battle.outcome(), Some(Outcome::Defeat));
    assert!(battle.is_over());
}
