//! Access to the static move database.
//!
//! The database ships with the crate as an embedded RON document and is
//! parsed once, on first access. Move data is immutable, process-wide
//! constant data; battles hold per-instance PP counters, never copies of
//! this table.

use crate::errors::{MoveDataError, MoveDataResult};
use schema::{MoveData, MoveId};
use std::collections::HashMap;
use std::sync::OnceLock;

const MOVES_RON: &str = include_str!("../data/moves.ron");

fn load_move_table() -> MoveDataResult<HashMap<MoveId, MoveData>> {
    let entries: Vec<MoveData> = ron::from_str(MOVES_RON)
        .map_err(|err| MoveDataError::MalformedDatabase(err.to_string()))?;

    let mut table = HashMap::with_capacity(entries.len());
    for entry in entries {
        let id = entry.id;
        if table.insert(id, entry).is_some() {
            return Err(MoveDataError::MalformedDatabase(format!(
                "duplicate entry for {:?}",
                id
            )));
        }
    }
    Ok(table)
}

fn move_table() -> MoveDataResult<&'static HashMap<MoveId, MoveData>> {
    static TABLE: OnceLock<MoveDataResult<HashMap<MoveId, MoveData>>> = OnceLock::new();
    match TABLE.get_or_init(load_move_table) {
        Ok(table) => Ok(table),
        Err(err) => Err(err.clone()),
    }
}

/// Look up the static data for a move.
pub fn get_move_data(move_id: MoveId) -> MoveDataResult<&'static MoveData> {
    move_table()?
        .get(&move_id)
        .ok_or(MoveDataError::MoveNotFound(move_id))
}

/// Maximum PP for a move, straight from the database.
pub fn get_move_max_pp(move_id: MoveId) -> MoveDataResult<u8> {
    Ok(get_move_data(move_id)?.max_pp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::MoveCategory;
    use strum::IntoEnumIterator;

    #[test]
    fn every_move_id_has_a_database_entry() {
        for move_id in MoveId::iter() {
            let data = get_move_data(move_id)
                .unwrap_or_else(|err| panic!("missing data for {:?}: {}", move_id, err));
            assert_eq!(data.id, move_id);
            assert!(data.max_pp > 0, "{:?} has zero max PP", move_id);
            assert!(data.accuracy <= 100, "{:?} has accuracy > 100", move_id);
        }
    }

    #[test]
    fn status_moves_have_no_power() {
        for move_id in MoveId::iter() {
            let data = get_move_data(move_id).unwrap();
            if data.category == MoveCategory::Status {
                assert_eq!(data.power, 0, "{:?} is a status move with power", move_id);
            }
        }
    }

    #[test]
    fn effect_chances_are_percentages() {
        for move_id in MoveId::iter() {
            let data = get_move_data(move_id).unwrap();
            if let Some(effect) = data.effect {
                assert!(
                    effect.chance <= 100,
                    "{:?} effect chance out of range",
                    move_id
                );
                assert!(
                    effect.turns >= -1,
                    "{:?} effect duration below -1",
                    move_id
                );
            }
        }
    }
}
