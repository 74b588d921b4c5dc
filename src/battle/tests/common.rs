use crate::battle::state::{BattleState, TurnRng};
use crate::combatant::{Combatant, StatusCondition};
use crate::errors::BattleResult;
use crate::species::get_species_data;
use schema::{ElementType, MoveId, StatusKind};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let combatant = TestCombatantBuilder::new("Pikachu", 25)
///     .with_moves(vec![MoveId::Tackle])
///     .with_status(StatusKind::Paralysis, -1)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    species_name: &'static str,
    level: u8,
    moves: Option<Vec<MoveId>>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
    types: Option<(ElementType, Option<ElementType>)>,
}

impl TestCombatantBuilder {
    /// Creates a new builder for a given species name and level.
    pub fn new(species_name: &'static str, level: u8) -> Self {
        Self {
            species_name,
            level,
            moves: None,
            status: None,
            current_hp: None,
            types: None,
        }
    }

    /// Sets the moves for the test combatant.
    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets an active status condition for the test combatant.
    pub fn with_status(mut self, kind: StatusKind, turns_remaining: i8) -> Self {
        self.status = Some(StatusCondition::new(kind, turns_remaining));
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Overrides the combatant's types, regardless of species.
    pub fn with_types(
        mut self,
        primary: ElementType,
        secondary: Option<ElementType>,
    ) -> Self {
        self.types = Some((primary, secondary));
        self
    }

    /// Builds the `Combatant`.
    pub fn build(self) -> Combatant {
        let species_data = match get_species_data(self.species_name) {
            Ok(data) => data,
            Err(err) => panic!(
                "Failed to load species data for {}: {}",
                self.species_name, err
            ),
        };

        let mut combatant = match Combatant::from_species(species_data, self.level, self.moves) {
            Ok(combatant) => combatant,
            Err(err) => panic!("Failed to build {}: {}", self.species_name, err),
        };

        combatant.status = self.status;

        if let Some((primary, secondary)) = self.types {
            combatant.primary_type = primary;
            combatant.secondary_type = secondary;
        }

        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }

        combatant
    }
}

/// Creates a standard 1v1 battle state for testing.
pub fn create_test_battle(player: Combatant, enemy: Combatant) -> BattleState {
    BattleState::new("test_battle".to_string(), player, enemy)
}

/// Creates a `TurnRng` with a generous buffer of mid-range values, for tests
/// where the specific outcomes do not matter.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 100])
}

/// Asserts that a Result is Ok and returns the value, with a readable
/// failure message.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
