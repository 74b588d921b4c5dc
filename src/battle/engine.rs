use crate::battle::calculators::calculate_attack_outcome;
use crate::battle::commands::{execute_command_batch, CombatantTarget};
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus, SkipReason, TurnRng,
};
use crate::battle::stats::effective_speed;
use crate::errors::{BattleResult, PreconditionError};
use schema::StatusKind;

/// An action a combatant can take in a round. Running away is not an action:
/// fleeing bypasses resolution entirely via [`BattleState::flee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    UseMove { move_index: usize },
}

/// Proof that a round was opened and actions may be submitted. Consumed by
/// [`resolve_round`]; there is no hidden suspension between the two calls,
/// just this token crossing the function boundary while the caller collects
/// input.
#[derive(Debug)]
pub struct PendingRound {
    round_number: u32,
}

impl PendingRound {
    pub fn round_number(&self) -> u32 {
        self.round_number
    }
}

/// Open a round for action selection. Fails if the battle already ended.
pub fn begin_round(state: &mut BattleState) -> BattleResult<PendingRound> {
    if state.is_over() {
        return Err(PreconditionError::BattleAlreadyOver.into());
    }
    state.phase = BattlePhase::AwaitingActions;
    Ok(PendingRound {
        round_number: state.round_number,
    })
}

/// Resolve one full round: turn ordering, both attacks, end-of-round status
/// ticking, and the battle-end check. Returns the events the round produced;
/// the state is left in `RoundStart` for the next round, or `Ended`.
pub fn resolve_round(
    state: &mut BattleState,
    pending: PendingRound,
    player_action: RoundAction,
    enemy_action: RoundAction,
    mut rng: TurnRng,
) -> BattleResult<EventBus> {
    if state.is_over() {
        return Err(PreconditionError::BattleAlreadyOver.into());
    }
    if pending.round_number != state.round_number {
        return Err(PreconditionError::StaleRound {
            expected: state.round_number,
            got: pending.round_number,
        }
        .into());
    }

    let mut bus = EventBus::new();
    bus.push(BattleEvent::RoundStarted {
        round_number: state.round_number,
    });

    state.phase = BattlePhase::ResolvingTurnOrder;
    let order = resolve_turn_order(state, &mut rng);

    for side in order {
        if state.is_over() || state.combatant(side).is_fainted() {
            break;
        }
        state.phase = BattlePhase::ExecutingAttack(side);

        let RoundAction::UseMove { move_index } = match side {
            CombatantTarget::Player => player_action,
            CombatantTarget::Enemy => enemy_action,
        };
        execute_attack(state, side, move_index, &mut rng, &mut bus)?;

        check_battle_end(state, &mut bus);
    }

    if !state.is_over() {
        state.phase = BattlePhase::EndOfRound;
        end_of_round(state, &mut bus);

        state.round_number += 1;
        state.phase = BattlePhase::RoundStart;
        bus.push(BattleEvent::RoundEnded);
    }

    Ok(bus)
}

/// Attacker/defender ordering for a round: higher effective speed acts
/// first, ties broken by a coin flip from the injected rng.
pub fn resolve_turn_order(state: &BattleState, rng: &mut TurnRng) -> [CombatantTarget; 2] {
    let player_speed = effective_speed(state.combatant(CombatantTarget::Player));
    let enemy_speed = effective_speed(state.combatant(CombatantTarget::Enemy));

    let player_first = match player_speed.cmp(&enemy_speed) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => rng.next_percent("Turn Order Tiebreak") < 50,
    };

    if player_first {
        [CombatantTarget::Player, CombatantTarget::Enemy]
    } else {
        [CombatantTarget::Enemy, CombatantTarget::Player]
    }
}

/// Execute a single attack: preconditions, the sleep/freeze gate, then the
/// calculated command batch.
///
/// A sleeping or frozen attacker skips the attack entirely and spends no
/// PP. This is distinct from a miss, which does consume PP. An
/// exhausted move outside that skip path, a fainted attacker, or a bad slot
/// are caller programming errors and fail fast.
pub fn execute_attack(
    state: &mut BattleState,
    attacker: CombatantTarget,
    move_index: usize,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> BattleResult<()> {
    let attacking = state.combatant(attacker);
    if attacking.is_fainted() {
        return Err(PreconditionError::FaintedAttacker(attacking.name.clone()).into());
    }

    if attacking.has_status(StatusKind::Sleep) || attacking.has_status(StatusKind::Freeze) {
        let reason = if attacking.has_status(StatusKind::Sleep) {
            SkipReason::Asleep
        } else {
            SkipReason::Frozen
        };
        bus.push(BattleEvent::ActionSkipped {
            target: attacker,
            reason,
        });
        return Ok(());
    }

    let slot = attacking
        .moves
        .get(move_index)
        .ok_or(PreconditionError::InvalidMoveIndex(move_index))?
        .as_ref()
        .ok_or(PreconditionError::EmptyMoveSlot(move_index))?;
    if slot.is_exhausted() {
        return Err(PreconditionError::NoPpRemaining(slot.id).into());
    }

    let commands = calculate_attack_outcome(state, attacker, move_index, rng)?;
    execute_command_batch(commands, state, bus)?;

    Ok(())
}

/// End-of-round status bookkeeping: tick down timed statuses on both
/// surviving combatants and report expiries.
pub fn end_of_round(state: &mut BattleState, bus: &mut EventBus) {
    for target in [CombatantTarget::Player, CombatantTarget::Enemy] {
        let combatant = state.combatant_mut(target);
        if combatant.is_fainted() {
            continue;
        }
        if let Some(expired) = combatant.tick_status() {
            bus.push(BattleEvent::StatusExpired {
                target,
                status: expired,
            });
        }
    }
}

/// Transition to a terminal phase if either combatant has fainted. A fainted
/// player is a loss even in the (unreachable through normal resolution)
/// case where both are down.
pub fn check_battle_end(state: &mut BattleState, bus: &mut EventBus) {
    if state.is_over() {
        return;
    }

    let outcome = if state.combatant(CombatantTarget::Player).is_fainted() {
        Some(BattleOutcome::PlayerLoss)
    } else if state.combatant(CombatantTarget::Enemy).is_fainted() {
        Some(BattleOutcome::PlayerWin)
    } else {
        None
    };

    if let Some(outcome) = outcome {
        state.phase = BattlePhase::Ended(outcome);
        bus.push(BattleEvent::BattleEnded { outcome });
    }
}
