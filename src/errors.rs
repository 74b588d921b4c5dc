use crate::battle::commands::ExecutionError;
use schema::MoveId;
use std::fmt;

/// Main error type for the creature-combat battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A caller invoked an engine operation its preconditions forbid
    Precondition(PreconditionError),
    /// Error related to move data lookup or processing
    MoveData(MoveDataError),
    /// Error related to species data lookup or processing
    SpeciesData(SpeciesDataError),
    /// Error related to snapshot encoding, decoding, or validation
    Snapshot(SnapshotError),
    /// A battle command referenced state it cannot apply to
    Execution(ExecutionError),
}

/// Caller programming errors. These fail fast and are never silently
/// corrected: the failing operation makes no state changes of its own.
/// A round that fails partway through keeps the effects of the attacks
/// that already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// A fainted combatant was asked to act
    FaintedAttacker(String),
    /// The selected move has no PP remaining (outside the sleep/freeze skip path)
    NoPpRemaining(MoveId),
    /// The selected move slot is empty
    EmptyMoveSlot(usize),
    /// The move index is outside the 0-3 slot range
    InvalidMoveIndex(usize),
    /// The battle has already reached a terminal outcome
    BattleAlreadyOver,
    /// A pending-round token from a different round was presented
    StaleRound { expected: u32, got: u32 },
}

/// Errors related to move database operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDataError {
    /// The specified move was not found in the database
    MoveNotFound(MoveId),
    /// The move database failed to parse or is incomplete
    MalformedDatabase(String),
}

/// Errors related to species database operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesDataError {
    /// The specified species was not found in the database
    SpeciesNotFound(String),
    /// The species database failed to parse or is incomplete
    MalformedDatabase(String),
}

/// Errors related to combatant snapshots (the persistence-collaborator contract)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Encoding a combatant failed
    Encode(String),
    /// Decoding a snapshot payload failed
    Decode(String),
    /// A decoded combatant violates the engine's data invariants
    InvariantViolation(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Precondition(err) => write!(f, "Precondition violation: {}", err),
            EngineError::MoveData(err) => write!(f, "Move data error: {}", err),
            EngineError::SpeciesData(err) => write!(f, "Species data error: {}", err),
            EngineError::Snapshot(err) => write!(f, "Snapshot error: {}", err),
            EngineError::Execution(err) => write!(f, "Command execution error: {}", err),
        }
    }
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionError::FaintedAttacker(name) => {
                write!(f, "{} has fainted and cannot act", name)
            }
            PreconditionError::NoPpRemaining(move_id) => {
                write!(f, "{} has no PP remaining", move_id)
            }
            PreconditionError::EmptyMoveSlot(index) => write!(f, "No move in slot {}", index),
            PreconditionError::InvalidMoveIndex(index) => {
                write!(f, "Move index out of range: {}", index)
            }
            PreconditionError::BattleAlreadyOver => write!(f, "The battle has already ended"),
            PreconditionError::StaleRound { expected, got } => {
                write!(
                    f,
                    "Stale round token: expected round {}, got {}",
                    expected, got
                )
            }
        }
    }
}

impl fmt::Display for MoveDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDataError::MoveNotFound(move_id) => write!(f, "Move not found: {:?}", move_id),
            MoveDataError::MalformedDatabase(details) => {
                write!(f, "Malformed move database: {}", details)
            }
        }
    }
}

impl fmt::Display for SpeciesDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesDataError::SpeciesNotFound(name) => write!(f, "Species not found: {}", name),
            SpeciesDataError::MalformedDatabase(details) => {
                write!(f, "Malformed species database: {}", details)
            }
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Encode(details) => write!(f, "Failed to encode snapshot: {}", details),
            SnapshotError::Decode(details) => write!(f, "Failed to decode snapshot: {}", details),
            SnapshotError::InvariantViolation(details) => {
                write!(f, "Snapshot violates invariants: {}", details)
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for PreconditionError {}
impl std::error::Error for MoveDataError {}
impl std::error::Error for SpeciesDataError {}
impl std::error::Error for SnapshotError {}

impl From<PreconditionError> for EngineError {
    fn from(err: PreconditionError) -> Self {
        EngineError::Precondition(err)
    }
}

impl From<MoveDataError> for EngineError {
    fn from(err: MoveDataError) -> Self {
        EngineError::MoveData(err)
    }
}

impl From<SpeciesDataError> for EngineError {
    fn from(err: SpeciesDataError) -> Self {
        EngineError::SpeciesData(err)
    }
}

impl From<SnapshotError> for EngineError {
    fn from(err: SnapshotError) -> Self {
        EngineError::Snapshot(err)
    }
}

impl From<ExecutionError> for EngineError {
    fn from(err: ExecutionError) -> Self {
        EngineError::Execution(err)
    }
}

/// Type alias for Results using EngineError
pub type BattleResult<T> = Result<T, EngineError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;
