use crate::battle::commands::{BattleCommand, CombatantTarget};
use crate::battle::state::{BattleEvent, BattleState, TurnRng};
use crate::battle::stats::{
    effective_attack, effective_defense, move_hits, type_multiplier, variance_multiplier,
};
use crate::combatant::StatusCondition;
use crate::errors::{BattleResult, PreconditionError};
use crate::move_data::get_move_data;
use schema::MoveCategory;

/// Calculate the outcome of an attack as a command list, without touching
/// the battle state. The engine has already cleared the preconditions
/// (attacker alive, slot filled, PP available) and the sleep/freeze gate;
/// everything from the accuracy check onward happens here.
///
/// Command order mirrors resolution order: announce, accuracy, damage,
/// secondary status, and finally the unconditional PP spend.
pub fn calculate_attack_outcome(
    state: &BattleState,
    attacker: CombatantTarget,
    move_index: usize,
    rng: &mut TurnRng,
) -> BattleResult<Vec<BattleCommand>> {
    let attacking = state.combatant(attacker);
    let defender_target = attacker.opponent();
    let defender = state.combatant(defender_target);

    let slot = attacking
        .moves
        .get(move_index)
        .ok_or(PreconditionError::InvalidMoveIndex(move_index))?
        .as_ref()
        .ok_or(PreconditionError::EmptyMoveSlot(move_index))?;
    let move_data = get_move_data(slot.id)?;

    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        attacker,
        move_id: slot.id,
    })];

    if !move_hits(move_data, rng) {
        // A miss still consumes PP.
        commands.push(BattleCommand::EmitEvent(BattleEvent::MoveMissed {
            attacker,
            move_id: slot.id,
        }));
        commands.push(BattleCommand::DecrementPp {
            target: attacker,
            move_index,
        });
        return Ok(commands);
    }

    if move_data.category != MoveCategory::Status {
        let attack = effective_attack(attacking, move_data);
        let defense = effective_defense(defender, move_data);
        let level = attacking.level as f32;

        let mut damage =
            ((2.0 * level / 5.0 + 2.0) * move_data.power as f32 * (attack / defense)) / 50.0 + 2.0;

        let effectiveness = type_multiplier(move_data.element, defender);
        if (effectiveness - 1.0).abs() > f32::EPSILON {
            commands.push(BattleCommand::EmitEvent(
                BattleEvent::AttackTypeEffectiveness {
                    multiplier: effectiveness,
                },
            ));
        }
        damage *= effectiveness;

        let variance_roll = rng.next_percent("Damage Variance");
        damage *= variance_multiplier(variance_roll);

        // Any successful non-status hit costs at least 1 HP.
        let final_damage = (damage.floor() as u16).max(1);
        commands.push(BattleCommand::DealDamage {
            target: defender_target,
            amount: final_damage,
        });
    }

    if let Some(effect) = move_data.effect {
        let roll = rng.next_percent("Status Effect Check");
        // An out-of-range chance in the data degrades to "always applies"
        // rather than erroring.
        if roll < effect.chance.min(100) {
            commands.push(BattleCommand::ApplyStatus {
                target: defender_target,
                status: StatusCondition::new(effect.status, effect.turns),
            });
        }
    }

    commands.push(BattleCommand::DecrementPp {
        target: attacker,
        move_index,
    });

    Ok(commands)
}
