//! The species template database.
//!
//! Like the move database, species templates are embedded RON parsed on
//! first use. Templates are shared, immutable data; every battle stamps its
//! own [`crate::combatant::Combatant`] copies from them.

use crate::errors::{SpeciesDataError, SpeciesDataResult};
use schema::SpeciesData;
use std::collections::HashMap;
use std::sync::OnceLock;

const SPECIES_RON: &str = include_str!("../data/species.ron");

fn load_species_table() -> SpeciesDataResult<HashMap<String, SpeciesData>> {
    let entries: Vec<SpeciesData> = ron::from_str(SPECIES_RON)
        .map_err(|err| SpeciesDataError::MalformedDatabase(err.to_string()))?;

    let mut table = HashMap::with_capacity(entries.len());
    for entry in entries {
        let key = entry.name.to_uppercase();
        if table.insert(key, entry).is_some() {
            return Err(SpeciesDataError::MalformedDatabase(
                "duplicate species name".to_string(),
            ));
        }
    }
    Ok(table)
}

fn species_table() -> SpeciesDataResult<&'static HashMap<String, SpeciesData>> {
    static TABLE: OnceLock<SpeciesDataResult<HashMap<String, SpeciesData>>> = OnceLock::new();
    match TABLE.get_or_init(load_species_table) {
        Ok(table) => Ok(table),
        Err(err) => Err(err.clone()),
    }
}

/// Look up a species template by name (case-insensitive).
pub fn get_species_data(name: &str) -> SpeciesDataResult<&'static SpeciesData> {
    species_table()?
        .get(&name.to_uppercase())
        .ok_or_else(|| SpeciesDataError::SpeciesNotFound(name.to_string()))
}

/// All species names in the database, for callers that enumerate rosters.
pub fn species_names() -> SpeciesDataResult<Vec<&'static str>> {
    let mut names: Vec<&'static str> = species_table()?
        .values()
        .map(|species| species.name.as_str())
        .collect();
    names.sort_unstable();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_data::get_move_data;

    #[test]
    fn lookup_is_case_insensitive() {
        let upper = get_species_data("PIKACHU").unwrap();
        let lower = get_species_data("pikachu").unwrap();
        assert_eq!(upper.name, lower.name);
    }

    #[test]
    fn unknown_species_is_an_error() {
        assert!(matches!(
            get_species_data("MissingNo"),
            Err(SpeciesDataError::SpeciesNotFound(_))
        ));
    }

    #[test]
    fn every_species_moveset_resolves_and_fits() {
        for name in species_names().unwrap() {
            let species = get_species_data(name).unwrap();
            assert!(
                species.moves.len() <= 4,
                "{} knows more than 4 moves",
                name
            );
            for &move_id in &species.moves {
                get_move_data(move_id)
                    .unwrap_or_else(|err| panic!("{} moveset: {}", name, err));
            }
        }
    }
}
