use crate::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Identifier for every move the engine knows about. The data backing each
/// id lives in the RON move database shipped with the engine crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum MoveId {
    // Normal
    Tackle,
    Scratch,
    QuickAttack,
    BodySlam,
    HyperBeam,
    // Fire
    Ember,
    FireBlast,
    // Water
    Bubble,
    HydroPump,
    // Grass
    VineWhip,
    SolarBeam,
    // Electric
    Thunderbolt,
    ThunderWave,
    // Poison
    Toxic,
    // Ice
    IceBeam,
    // Psychic
    Hypnosis,
    // Ghost
    ConfuseRay,
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            MoveId::Tackle => "Tackle",
            MoveId::Scratch => "Scratch",
            MoveId::QuickAttack => "Quick Attack",
            MoveId::BodySlam => "Body Slam",
            MoveId::HyperBeam => "Hyper Beam",
            MoveId::Ember => "Ember",
            MoveId::FireBlast => "Fire Blast",
            MoveId::Bubble => "Bubble",
            MoveId::HydroPump => "Hydro Pump",
            MoveId::VineWhip => "Vine Whip",
            MoveId::SolarBeam => "Solar Beam",
            MoveId::Thunderbolt => "Thunderbolt",
            MoveId::ThunderWave => "Thunder Wave",
            MoveId::Toxic => "Toxic",
            MoveId::IceBeam => "Ice Beam",
            MoveId::Hypnosis => "Hypnosis",
            MoveId::ConfuseRay => "Confuse Ray",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// The persistent afflictions a combatant can carry. At most one is active
/// per combatant at a time; "healthy" is the absence of a status, not a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatusKind {
    Burn,
    Poison,
    Paralysis,
    Sleep,
    Freeze,
    Confusion,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            StatusKind::Burn => "burn",
            StatusKind::Poison => "poison",
            StatusKind::Paralysis => "paralysis",
            StatusKind::Sleep => "sleep",
            StatusKind::Freeze => "freeze",
            StatusKind::Confusion => "confusion",
        };
        write!(f, "{}", display_name)
    }
}

/// A secondary status effect a move may inflict on the defender after a hit.
/// `turns` of -1 means the status persists until cured from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub status: StatusKind,
    /// Application chance, as a percentage.
    pub chance: u8,
    pub turns: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: MoveId,
    pub name: String,
    pub element: ElementType,
    pub category: MoveCategory,
    /// Base power. Zero for Status-category moves.
    pub power: u16,
    /// Chance to hit, 0-100.
    pub accuracy: u8,
    pub max_pp: u8,
    pub effect: Option<StatusEffect>,
}
