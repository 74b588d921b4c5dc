use crate::{ElementType, MoveId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

/// The immutable template a battle-ready combatant is stamped from.
/// Instances copy and scale these values; the template itself is never
/// mutated by a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub primary_type: ElementType,
    pub secondary_type: Option<ElementType>,
    pub base_stats: BaseStats,
    /// Default moveset used when the caller does not pick moves (up to 4).
    pub moves: Vec<MoveId>,
}
