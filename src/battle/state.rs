use crate::battle::commands::CombatantTarget;
use crate::combatant::Combatant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{MoveId, StatusKind};
use serde::{Deserialize, Serialize};

/// How a finished battle ended, from the player's perspective. `Fled` is a
/// caller-initiated transition (see [`BattleState::flee`]); combat resolution
/// itself only ever produces wins and losses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    PlayerWin,
    PlayerLoss,
    Fled,
}

/// The round-resolution state machine. `RoundStart` is the initial state;
/// `Ended` is terminal. The intermediate states are visible to callers that
/// inspect the session mid-resolution (e.g. from event hooks), but a
/// completed `resolve_round` always leaves the session in `RoundStart` or
/// `Ended`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    RoundStart,
    AwaitingActions,
    ResolvingTurnOrder,
    ExecutingAttack(CombatantTarget),
    EndOfRound,
    Ended(BattleOutcome),
}

/// Why an attack was skipped outright (turn passes, no PP is consumed).
/// Distinct from a miss, which does consume PP.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Asleep,
    Frozen,
}

/// Structured outcome records emitted during resolution. The presentation
/// layer renders these; the engine itself never prints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    RoundStarted {
        round_number: u32,
    },
    RoundEnded,

    MoveUsed {
        attacker: CombatantTarget,
        move_id: MoveId,
    },
    MoveMissed {
        attacker: CombatantTarget,
        move_id: MoveId,
    },
    ActionSkipped {
        target: CombatantTarget,
        reason: SkipReason,
    },

    AttackTypeEffectiveness {
        multiplier: f32,
    },
    DamageDealt {
        target: CombatantTarget,
        amount: u16,
        remaining_hp: u16,
    },
    CombatantFainted {
        target: CombatantTarget,
    },

    StatusApplied {
        target: CombatantTarget,
        status: StatusKind,
    },
    StatusExpired {
        target: CombatantTarget,
        status: StatusKind,
    },

    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, state: &BattleState) -> Option<String> {
        let name = |target: &CombatantTarget| state.combatant(*target).name.clone();

        match self {
            BattleEvent::RoundStarted { round_number } => {
                Some(format!("=== Round {} ===", round_number))
            }
            BattleEvent::RoundEnded => None,

            BattleEvent::MoveUsed { attacker, move_id } => {
                Some(format!("{} used {}!", name(attacker), move_id))
            }
            BattleEvent::MoveMissed { attacker, .. } => {
                Some(format!("{}'s attack missed!", name(attacker)))
            }
            BattleEvent::ActionSkipped { target, reason } => {
                let text = match reason {
                    SkipReason::Asleep => "is fast asleep",
                    SkipReason::Frozen => "is frozen solid",
                };
                Some(format!("{} {}!", name(target), text))
            }

            BattleEvent::AttackTypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None,
            },
            BattleEvent::DamageDealt { target, amount, .. } => {
                Some(format!("{} took {} damage!", name(target), amount))
            }
            BattleEvent::CombatantFainted { target } => {
                Some(format!("{} fainted!", name(target)))
            }

            BattleEvent::StatusApplied { target, status } => {
                Some(format!("{} was afflicted by {}!", name(target), status))
            }
            BattleEvent::StatusExpired { target, status } => {
                Some(format!("{}'s {} wore off.", name(target), status))
            }

            BattleEvent::BattleEnded { outcome } => match outcome {
                BattleOutcome::PlayerWin => Some(format!(
                    "{} won the battle!",
                    state.combatant(CombatantTarget::Player).name
                )),
                BattleOutcome::PlayerLoss => Some(format!(
                    "{} lost the battle!",
                    state.combatant(CombatantTarget::Player).name
                )),
                BattleOutcome::Fled => Some("Got away safely!".to_string()),
            },
        }
    }
}

/// Event bus for collecting the structured records a resolution produces.
/// Callers drain it after each `resolve_round` to drive their rendering.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text, skipping silent ones.
    pub fn print_formatted(&self, state: &BattleState) {
        for event in &self.events {
            if let Some(formatted) = event.format(state) {
                println!("  {}", formatted);
            }
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
enum RngSource {
    /// Fixed outcomes for tests. Panics with the consumption reason when
    /// exhausted so a failing test names the draw it was missing.
    Scripted { outcomes: Vec<u8>, index: usize },
    Sampled(StdRng),
}

/// The randomness oracle every resolution draws from. All draws are uniform
/// integers in [0, 100); damage variance maps a draw onto [0.85, 1.0].
/// Inject a seeded oracle to make an entire battle deterministic.
#[derive(Debug)]
pub struct TurnRng {
    source: RngSource,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// A deterministic oracle: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Sampled(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Sampled(StdRng::from_os_rng()),
        }
    }

    /// Draw a uniform integer in [0, 100).
    pub fn next_percent(&mut self, reason: &str) -> u8 {
        match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);

                *index += 1;
                outcome
            }
            RngSource::Sampled(rng) => rng.random_range(0..100),
        }
    }
}

/// An explicit battle session: two owned combatant copies, a round counter,
/// and the resolution phase. There is no global battle registry; whoever
/// drives the battle owns this value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub battle_id: String,
    pub combatants: [Combatant; 2],
    pub round_number: u32,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn new(battle_id: String, player: Combatant, enemy: Combatant) -> Self {
        Self {
            battle_id,
            combatants: [player, enemy],
            round_number: 1,
            phase: BattlePhase::RoundStart,
        }
    }

    pub fn combatant(&self, target: CombatantTarget) -> &Combatant {
        &self.combatants[target.to_index()]
    }

    pub fn combatant_mut(&mut self, target: CombatantTarget) -> &mut Combatant {
        &mut self.combatants[target.to_index()]
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Ended(_))
    }

    /// The caller-initiated "run away" transition. Fleeing bypasses combat
    /// resolution entirely and ends the battle immediately.
    pub fn flee(&mut self) -> EventBus {
        let mut bus = EventBus::new();
        if !self.is_over() {
            self.phase = BattlePhase::Ended(BattleOutcome::Fled);
            bus.push(BattleEvent::BattleEnded {
                outcome: BattleOutcome::Fled,
            });
        }
        bus
    }
}
