use crate::battle::commands::{execute_command, BattleCommand, CombatantTarget};
use crate::battle::engine::{begin_round, execute_attack, resolve_round, RoundAction};
use crate::battle::state::{BattleEvent, EventBus, TurnRng};
use crate::battle::tests::common::{
    assert_ok, create_test_battle, predictable_rng, TestCombatantBuilder,
};
use pretty_assertions::assert_eq;
use schema::MoveId;

fn pp_of(state: &crate::battle::state::BattleState, target: CombatantTarget, slot: usize) -> u8 {
    state.combatant(target).moves[slot]
        .as_ref()
        .expect("move slot should be filled")
        .pp
}

#[test]
fn a_hit_spends_one_pp() {
    let player = TestCombatantBuilder::new("Squirtle", 20)
        .with_moves(vec![MoveId::Tackle])
        .build();
    let enemy = TestCombatantBuilder::new("Charmander", 20).build();
    let mut state = create_test_battle(player, enemy);
    let mut bus = EventBus::new();

    assert_eq!(pp_of(&state, CombatantTarget::Player, 0), 35);

    let mut rng = TurnRng::new_for_test(vec![0, 50]);
    assert_ok(execute_attack(
        &mut state,
        CombatantTarget::Player,
        0,
        &mut rng,
        &mut bus,
    ));

    assert_eq!(pp_of(&state, CombatantTarget::Player, 0), 34);
}

#[test]
fn a_miss_still_spends_pp() {
    let player = TestCombatantBuilder::new("Squirtle", 20)
        .with_moves(vec![MoveId::HydroPump]) // 80 accuracy
        .build();
    let enemy = TestCombatantBuilder::new("Charmander", 20).build();
    let mut state = create_test_battle(player, enemy);
    let mut bus = EventBus::new();

    let enemy_hp_before = state.combatant(CombatantTarget::Enemy).current_hp();

    let mut rng = TurnRng::new_for_test(vec![95]);
    assert_ok(execute_attack(
        &mut state,
        CombatantTarget::Player,
        0,
        &mut rng,
        &mut bus,
    ));

    assert_eq!(pp_of(&state, CombatantTarget::Player, 0), 4);
    assert_eq!(
        state.combatant(CombatantTarget::Enemy).current_hp(),
        enemy_hp_before
    );
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::MoveMissed { .. })));
}

#[test]
fn pp_at_zero_stays_at_zero_under_repeated_decrements() {
    let mut player = TestCombatantBuilder::new("Squirtle", 20)
        .with_moves(vec![MoveId::Tackle])
        .build();
    player.moves[0].as_mut().unwrap().pp = 0;
    let enemy = TestCombatantBuilder::new("Charmander", 20).build();
    let mut state = create_test_battle(player, enemy);
    let mut bus = EventBus::new();

    // The executor's decrement saturates rather than wrapping below zero.
    for _ in 0..3 {
        execute_command(
            BattleCommand::DecrementPp {
                target: CombatantTarget::Player,
                move_index: 0,
            },
            &mut state,
            &mut bus,
        )
        .unwrap();
        assert_eq!(pp_of(&state, CombatantTarget::Player, 0), 0);
    }
}

#[test]
fn each_round_costs_both_sides_their_move() {
    let player = TestCombatantBuilder::new("Squirtle", 20)
        .with_moves(vec![MoveId::Tackle])
        .build();
    let enemy = TestCombatantBuilder::new("Squirtle", 20)
        .with_moves(vec![MoveId::Tackle])
        .build();
    let mut state = create_test_battle(player, enemy);

    for expected_spent in 1..=3u8 {
        let token = assert_ok(begin_round(&mut state));
        // Equal speeds: the tiebreak roll decides who leads, both still act.
        assert_ok(resolve_round(
            &mut state,
            token,
            RoundAction::UseMove { move_index: 0 },
            RoundAction::UseMove { move_index: 0 },
            predictable_rng(),
        ));

        assert_eq!(
            pp_of(&state, CombatantTarget::Player, 0),
            35 - expected_spent
        );
        assert_eq!(
            pp_of(&state, CombatantTarget::Enemy, 0),
            35 - expected_spent
        );
    }
}
