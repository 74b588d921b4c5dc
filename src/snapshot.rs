//! Combatant snapshots for callers that persist battle participants
//! between sessions.
//!
//! Two encodings are offered: a compact postcard byte payload for storage
//! and a JSON string for anything human-facing. Both restores run
//! [`Combatant::validate`] so a corrupt or hand-edited payload cannot
//! smuggle an impossible combatant back into a battle.

use crate::combatant::Combatant;
use crate::errors::SnapshotError;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Encode a combatant into a compact byte payload.
pub fn encode_combatant(combatant: &Combatant) -> SnapshotResult<Vec<u8>> {
    postcard::to_allocvec(combatant).map_err(|err| SnapshotError::Encode(err.to_string()))
}

/// Restore a combatant from a byte payload produced by [`encode_combatant`].
pub fn decode_combatant(bytes: &[u8]) -> SnapshotResult<Combatant> {
    let combatant: Combatant =
        postcard::from_bytes(bytes).map_err(|err| SnapshotError::Decode(err.to_string()))?;
    combatant
        .validate()
        .map_err(SnapshotError::InvariantViolation)?;
    Ok(combatant)
}

/// Encode a combatant as pretty-printed JSON.
pub fn encode_combatant_json(combatant: &Combatant) -> SnapshotResult<String> {
    serde_json::to_string_pretty(combatant).map_err(|err| SnapshotError::Encode(err.to_string()))
}

/// Restore a combatant from JSON produced by [`encode_combatant_json`].
pub fn decode_combatant_json(json: &str) -> SnapshotResult<Combatant> {
    let combatant: Combatant =
        serde_json::from_str(json).map_err(|err| SnapshotError::Decode(err.to_string()))?;
    combatant
        .validate()
        .map_err(SnapshotError::InvariantViolation)?;
    Ok(combatant)
}
