use crate::battle::state::{BattleEvent, BattleState, EventBus};
use crate::combatant::StatusCondition;
use serde::{Deserialize, Serialize};

/// Side selector for commands and events - provides type safety over raw indices
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatantTarget {
    Player,
    Enemy,
}

impl CombatantTarget {
    pub fn to_index(self) -> usize {
        match self {
            CombatantTarget::Player => 0,
            CombatantTarget::Enemy => 1,
        }
    }

    pub fn opponent(self) -> CombatantTarget {
        match self {
            CombatantTarget::Player => CombatantTarget::Enemy,
            CombatantTarget::Enemy => CombatantTarget::Player,
        }
    }
}

/// Atomic commands representing final state changes. Calculators produce
/// these; only the executor below mutates combatant data, so every
/// invariant (HP floored at zero, single active status, PP never negative)
/// is enforced in exactly one place. Phase bookkeeping stays with the
/// engine, which owns the round state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    DealDamage {
        target: CombatantTarget,
        amount: u16,
    },
    ApplyStatus {
        target: CombatantTarget,
        status: StatusCondition,
    },
    DecrementPp {
        target: CombatantTarget,
        move_index: usize,
    },
    EmitEvent(BattleEvent),
}

/// Error types for command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    InvalidMoveSlot(usize),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidMoveSlot(index) => {
                write!(f, "Command referenced an empty or out-of-range move slot {}", index)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Apply a single command to the battle state, emitting any events it
/// produces.
pub fn execute_command(
    command: BattleCommand,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    match command {
        BattleCommand::DealDamage { target, amount } => {
            let combatant = state.combatant_mut(target);
            // Fainted combatants may not be targeted by further damage.
            if combatant.is_fainted() {
                return Ok(());
            }
            let fainted = combatant.take_damage(amount);
            let remaining_hp = combatant.current_hp();
            bus.push(BattleEvent::DamageDealt {
                target,
                amount,
                remaining_hp,
            });
            if fainted {
                bus.push(BattleEvent::CombatantFainted { target });
            }
        }

        BattleCommand::ApplyStatus { target, status } => {
            let combatant = state.combatant_mut(target);
            if combatant.is_fainted() {
                return Ok(());
            }
            // A second status while one is active is a silent no-op.
            if combatant.apply_status(status) {
                bus.push(BattleEvent::StatusApplied {
                    target,
                    status: status.kind,
                });
            }
        }

        BattleCommand::DecrementPp { target, move_index } => {
            let combatant = state.combatant_mut(target);
            let slot = combatant
                .moves
                .get_mut(move_index)
                .ok_or(ExecutionError::InvalidMoveSlot(move_index))?
                .as_mut()
                .ok_or(ExecutionError::InvalidMoveSlot(move_index))?;
            slot.spend_pp();
        }

        BattleCommand::EmitEvent(event) => {
            bus.push(event);
        }
    }

    Ok(())
}

/// Apply a batch of commands in order, stopping at the first failure.
pub fn execute_command_batch(
    commands: Vec<BattleCommand>,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    for command in commands {
        execute_command(command, state, bus)?;
    }
    Ok(())
}
