use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The fixed 18-value elemental typing every combatant and move carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display, EnumIter)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl ElementType {
    /// Effectiveness multiplier for an attacking type against a defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective.
    /// Any pairing not listed here is neutral (1.0). The table is restricted
    /// to {0.5, 1.0, 2.0}; full immunities are represented as 0.5.
    pub fn effectiveness(attacking: ElementType, defending: ElementType) -> f32 {
        use ElementType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Rock) | (Normal, Steel) | (Normal, Ghost) => 0.5,
            (Normal, _) => 1.0,

            // Fighting
            (Fighting, Normal) | (Fighting, Ice) | (Fighting, Rock) | (Fighting, Dark)
            | (Fighting, Steel) => 2.0,
            (Fighting, Poison) | (Fighting, Flying) | (Fighting, Psychic) | (Fighting, Bug)
            | (Fighting, Fairy) | (Fighting, Ghost) => 0.5,
            (Fighting, _) => 1.0,

            // Flying
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
            (Flying, _) => 1.0,

            // Poison
            (Poison, Grass) | (Poison, Fairy) => 2.0,
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost)
            | (Poison, Steel) => 0.5,
            (Poison, _) => 1.0,

            // Ground
            (Ground, Fire) | (Ground, Electric) | (Ground, Poison) | (Ground, Rock)
            | (Ground, Steel) => 2.0,
            (Ground, Grass) | (Ground, Bug) | (Ground, Flying) => 0.5,
            (Ground, _) => 1.0,

            // Rock
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
            (Rock, _) => 1.0,

            // Bug
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,
            (Bug, Fire) | (Bug, Fighting) | (Bug, Poison) | (Bug, Flying) | (Bug, Ghost)
            | (Bug, Steel) | (Bug, Fairy) => 0.5,
            (Bug, _) => 1.0,

            // Ghost
            (Ghost, Psychic) | (Ghost, Ghost) => 2.0,
            (Ghost, Dark) | (Ghost, Normal) => 0.5,
            (Ghost, _) => 1.0,

            // Steel
            (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
            (Steel, _) => 1.0,

            // Fire
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, _) => 1.0,

            // Water
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, _) => 1.0,

            // Grass
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, Fire) | (Grass, Grass) | (Grass, Poison) | (Grass, Flying) | (Grass, Bug)
            | (Grass, Dragon) | (Grass, Steel) => 0.5,
            (Grass, _) => 1.0,

            // Electric
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, Electric) | (Electric, Grass) | (Electric, Dragon)
            | (Electric, Ground) => 0.5,
            (Electric, _) => 1.0,

            // Psychic
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, Psychic) | (Psychic, Steel) | (Psychic, Dark) => 0.5,
            (Psychic, _) => 1.0,

            // Ice
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
            (Ice, _) => 1.0,

            // Dragon
            (Dragon, Dragon) => 2.0,
            (Dragon, Steel) | (Dragon, Fairy) => 0.5,
            (Dragon, _) => 1.0,

            // Dark
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
            (Dark, _) => 1.0,

            // Fairy
            (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,
            (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
            (Fairy, _) => 1.0,
        }
    }
}
