use crate::battle::state::TurnRng;
use crate::combatant::Combatant;
use schema::{ElementType, MoveCategory, MoveData, StatusKind};

/// Attacking stat for a move, after status modifiers. Physical moves use
/// Attack, Special moves use Special Attack; a burned attacker's physical
/// attacks are halved. Status moves deal no direct damage and use no stat.
pub fn effective_attack(attacker: &Combatant, move_data: &MoveData) -> f32 {
    let base = match move_data.category {
        MoveCategory::Physical => attacker.stats.attack,
        MoveCategory::Special => attacker.stats.sp_attack,
        MoveCategory::Status => return 0.0,
    };

    let mut attack = base as f32;
    if move_data.category == MoveCategory::Physical && attacker.has_status(StatusKind::Burn) {
        attack *= 0.5;
    }
    attack
}

/// Defending stat against a move: Defense for Physical, Special Defense for
/// Special.
pub fn effective_defense(defender: &Combatant, move_data: &MoveData) -> f32 {
    match move_data.category {
        MoveCategory::Physical => defender.stats.defense as f32,
        MoveCategory::Special => defender.stats.sp_defense as f32,
        MoveCategory::Status => 0.0,
    }
}

/// Speed used for turn ordering. Paralysis reduces it by 25%.
pub fn effective_speed(combatant: &Combatant) -> u16 {
    let speed = combatant.stats.speed;
    if combatant.has_status(StatusKind::Paralysis) {
        (speed as u32 * 3 / 4) as u16
    } else {
        speed
    }
}

/// Accuracy check: draw a uniform integer in [0, 100); the move misses when
/// the draw exceeds its accuracy.
pub fn move_hits(move_data: &MoveData, rng: &mut TurnRng) -> bool {
    let roll = rng.next_percent("Accuracy Check");
    roll <= move_data.accuracy
}

/// Map a percent draw onto the damage variance band [0.85, 1.0].
pub fn variance_multiplier(roll: u8) -> f32 {
    0.85 + 0.15 * (roll.min(99) as f32 / 99.0)
}

/// Combined type-effectiveness multiplier against a possibly dual-typed
/// defender. A secondary type only contributes when it differs from the
/// primary.
pub fn type_multiplier(attacking: ElementType, defender: &Combatant) -> f32 {
    let mut multiplier = ElementType::effectiveness(attacking, defender.primary_type);
    if let Some(secondary) = defender.secondary_type {
        if secondary != defender.primary_type {
            multiplier *= ElementType::effectiveness(attacking, secondary);
        }
    }
    multiplier
}
