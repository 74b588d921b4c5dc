//! Creature Combat Battle Resolution Engine
//!
//! A deterministic, turn-based battle resolver. Callers open a round,
//! submit one action per side, and receive the full event log of what
//! happened. All randomness flows through an injected oracle, so every
//! round is replayable from a seed or a script.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod move_data;
pub mod snapshot;
pub mod species;

// --- PUBLIC API RE-EXPORTS ---
// The most important types, importable directly from the crate root.

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, ElementType, MoveCategory, MoveData, MoveId, SpeciesData, StatusEffect, StatusKind,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{begin_round, resolve_round, PendingRound, RoundAction};
pub use battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus, SkipReason, TurnRng,
};

// Core runtime types for a battle.
pub use battle::commands::{CombatantTarget, ExecutionError};
pub use combatant::{Combatant, MoveInstance, Stats, StatusCondition};

// Scripted-opponent move selection.
pub use battle::ai::{MoveChooser, ScoringChooser};

// Primary data access functions.
pub use move_data::get_move_data;
pub use species::get_species_data;

// Snapshot encoding for persistence collaborators.
pub use snapshot::{
    decode_combatant, decode_combatant_json, encode_combatant, encode_combatant_json,
};

// Crate-specific error and result types.
pub use errors::{
    BattleResult, EngineError, MoveDataError, MoveDataResult, PreconditionError, SnapshotError,
    SpeciesDataError, SpeciesDataResult,
};
