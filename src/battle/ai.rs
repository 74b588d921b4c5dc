//! Move selection strategies for scripted opponents.

use crate::battle::commands::CombatantTarget;
use crate::battle::engine::RoundAction;
use crate::battle::state::BattleState;
use crate::battle::stats::type_multiplier;
use crate::move_data::get_move_data;
use schema::MoveCategory;

/// Anything that can pick a round action for one side of a battle.
pub trait MoveChooser {
    /// Inspects the battle state and picks an action for the given side.
    /// Returns `None` when no move slot is usable.
    fn choose_action(&self, side: CombatantTarget, state: &BattleState) -> Option<RoundAction>;
}

/// Chooser that scores every usable move and picks the highest. Damaging
/// moves score on power, type effectiveness, and accuracy; status moves on
/// the value of landing their effect on a healthy target.
pub struct ScoringChooser;

impl ScoringChooser {
    pub fn new() -> Self {
        Self
    }

    fn score_move(&self, move_index: usize, side: CombatantTarget, state: &BattleState) -> f32 {
        let attacker = state.combatant(side);
        let defender = state.combatant(side.opponent());

        let Some(instance) = attacker.moves[move_index].as_ref() else {
            return -1.0;
        };
        if instance.is_exhausted() {
            return -1.0;
        }
        let Ok(move_data) = get_move_data(instance.id) else {
            return -1.0;
        };

        let mut damage_score = 0.0;
        if matches!(
            move_data.category,
            MoveCategory::Physical | MoveCategory::Special
        ) {
            let effectiveness = type_multiplier(move_data.element, defender);
            damage_score = move_data.power as f32 * effectiveness;
        }

        // A status effect is only worth something against a clean target.
        let mut utility_score = 0.0;
        if let Some(effect) = &move_data.effect {
            if defender.status.is_none() {
                utility_score = 45.0 * (effect.chance as f32 / 100.0);
            }
        }

        // A status move against an already-statused target is a wasted turn.
        if move_data.category == MoveCategory::Status && utility_score < 1.0 {
            return -1.0;
        }

        (damage_score + utility_score) * (move_data.accuracy as f32 / 100.0)
    }
}

impl Default for ScoringChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for ScoringChooser {
    fn choose_action(&self, side: CombatantTarget, state: &BattleState) -> Option<RoundAction> {
        let attacker = state.combatant(side);

        let mut best: Option<(usize, f32)> = None;
        for (index, slot) in attacker.moves.iter().enumerate() {
            let Some(instance) = slot.as_ref() else {
                continue;
            };
            if instance.is_exhausted() {
                continue;
            }
            let score = self.score_move(index, side, state);
            if score < 0.0 {
                continue;
            }
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(move_index, _)| RoundAction::UseMove { move_index })
    }
}
