use crate::errors::{BattleResult, MoveDataResult};
use crate::move_data::get_move_max_pp;
use schema::{ElementType, MoveId, SpeciesData, StatusKind};
use serde::{Deserialize, Serialize};

/// The six battle-relevant stats of a combatant, already scaled to its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

/// An active status affliction. `turns_remaining` of -1 means the status
/// persists until cured by something outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCondition {
    pub kind: StatusKind,
    pub turns_remaining: i8,
}

impl StatusCondition {
    pub fn new(kind: StatusKind, turns_remaining: i8) -> Self {
        Self {
            kind,
            turns_remaining,
        }
    }

    pub fn indefinite(kind: StatusKind) -> Self {
        Self::new(kind, -1)
    }
}

/// A known move plus its remaining uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub id: MoveId,
    pub pp: u8,
}

impl MoveInstance {
    /// Create a new move instance at full PP.
    pub fn new(move_id: MoveId) -> MoveDataResult<Self> {
        let max_pp = get_move_max_pp(move_id)?;
        Ok(MoveInstance {
            id: move_id,
            pp: max_pp,
        })
    }

    pub fn max_pp(&self) -> MoveDataResult<u8> {
        get_move_max_pp(self.id)
    }

    /// Spend one use. Saturates at zero.
    pub fn spend_pp(&mut self) {
        self.pp = self.pp.saturating_sub(1);
    }

    pub fn is_exhausted(&self) -> bool {
        self.pp == 0
    }
}

/// A battle participant. Built once per battle by copy from a species
/// template, mutated turn-by-turn by the engine, and discarded when the
/// battle ends. Never aliases the template it was stamped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub level: u8,
    current_hp: u16,
    pub max_hp: u16,
    pub stats: Stats,
    pub primary_type: ElementType,
    pub secondary_type: Option<ElementType>,
    pub moves: [Option<MoveInstance>; 4],
    pub status: Option<StatusCondition>,
}

impl Combatant {
    /// Stamp a battle-ready combatant from a species template at the given
    /// level. Stats scale as `floor((2 * base) * level / 100) + 5`, with HP
    /// using an offset of `level + 5` instead. Moves default to the species
    /// moveset and start at full PP.
    pub fn from_species(
        species: &SpeciesData,
        level: u8,
        moves: Option<Vec<MoveId>>,
    ) -> BattleResult<Self> {
        let base = &species.base_stats;
        let scale = |stat: u8| -> u16 { (2 * stat as u16) * level as u16 / 100 + 5 };
        let max_hp = (2 * base.hp as u16) * level as u16 / 100 + level as u16 + 5;

        let moves = moves.unwrap_or_else(|| species.moves.clone());
        let mut move_array = [const { None }; 4];
        for (i, move_id) in moves.into_iter().take(4).enumerate() {
            move_array[i] = Some(MoveInstance::new(move_id)?);
        }

        Ok(Combatant {
            name: species.name.clone(),
            level,
            current_hp: max_hp,
            max_hp,
            stats: Stats {
                attack: scale(base.attack),
                defense: scale(base.defense),
                sp_attack: scale(base.sp_attack),
                sp_defense: scale(base.sp_defense),
                speed: scale(base.speed),
            },
            primary_type: species.primary_type,
            secondary_type: species.secondary_type,
            moves: move_array,
            status: None,
        })
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Reduce HP, flooring at zero. Returns true if this damage fainted
    /// the combatant.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        let was_alive = self.current_hp > 0;
        self.current_hp = self.current_hp.saturating_sub(amount);
        was_alive && self.current_hp == 0
    }

    /// Restore HP, capped at max.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
    }

    /// Set HP directly, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status.map_or(false, |s| s.kind == kind)
    }

    /// Apply a status condition. Returns false (leaving the combatant
    /// unchanged) if another status is already active.
    pub fn apply_status(&mut self, condition: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(condition);
        true
    }

    pub fn cure_status(&mut self) {
        self.status = None;
    }

    /// End-of-round status bookkeeping: decrement a positive counter and
    /// clear the status when it reaches zero. Indefinite statuses (-1) are
    /// untouched. Returns the kind that expired, if any.
    pub fn tick_status(&mut self) -> Option<StatusKind> {
        let condition = self.status.as_mut()?;
        if condition.turns_remaining > 0 {
            condition.turns_remaining -= 1;
            if condition.turns_remaining == 0 {
                let expired = condition.kind;
                self.status = None;
                return Some(expired);
            }
        }
        None
    }

    /// Check the data-model invariants. Used when accepting combatants back
    /// from outside the engine (snapshots, factories under test).
    pub fn validate(&self) -> Result<(), String> {
        if self.level == 0 {
            return Err(format!("{}: level must be at least 1", self.name));
        }
        if self.current_hp > self.max_hp {
            return Err(format!(
                "{}: current HP {} exceeds max HP {}",
                self.name, self.current_hp, self.max_hp
            ));
        }
        for slot in self.moves.iter().flatten() {
            let max_pp = slot
                .max_pp()
                .map_err(|err| format!("{}: {}", self.name, err))?;
            if slot.pp > max_pp {
                return Err(format!(
                    "{}: {} PP {} exceeds max {}",
                    self.name, slot.id, slot.pp, max_pp
                ));
            }
        }
        if let Some(status) = self.status {
            if status.turns_remaining < -1 {
                return Err(format!(
                    "{}: status duration {} below -1",
                    self.name, status.turns_remaining
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bulbasaur_template() -> SpeciesData {
        SpeciesData {
            name: "Bulbasaur".to_string(),
            primary_type: ElementType::Grass,
            secondary_type: Some(ElementType::Poison),
            base_stats: schema::BaseStats {
                hp: 45,
                attack: 49,
                defense: 49,
                sp_attack: 65,
                sp_defense: 65,
                speed: 45,
            },
            moves: vec![MoveId::Tackle, MoveId::VineWhip],
        }
    }

    #[test]
    fn factory_applies_stat_scaling_formula() {
        let combatant = Combatant::from_species(&bulbasaur_template(), 50, None).unwrap();

        // stat = (2 * base) * level / 100 + 5; HP offset is level + 5.
        assert_eq!(combatant.max_hp, (2 * 45) * 50 / 100 + 50 + 5);
        assert_eq!(combatant.stats.attack, (2 * 49) * 50 / 100 + 5);
        assert_eq!(combatant.stats.speed, (2 * 45) * 50 / 100 + 5);
        assert_eq!(combatant.current_hp(), combatant.max_hp);
    }

    #[test]
    fn factory_fills_moves_at_full_pp() {
        let combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();

        let tackle = combatant.moves[0].as_ref().unwrap();
        assert_eq!(tackle.id, MoveId::Tackle);
        assert_eq!(tackle.pp, tackle.max_pp().unwrap());
        assert!(combatant.moves[2].is_none());
    }

    #[test]
    fn take_damage_floors_at_zero_and_reports_faint() {
        let mut combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();
        combatant.set_hp(5);

        assert!(combatant.take_damage(50));
        assert_eq!(combatant.current_hp(), 0);
        assert!(combatant.is_fainted());

        // Further damage on a fainted combatant does not re-report fainting.
        assert!(!combatant.take_damage(10));
    }

    #[test]
    fn second_status_application_is_rejected() {
        let mut combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();

        assert!(combatant.apply_status(StatusCondition::indefinite(StatusKind::Burn)));
        assert!(!combatant.apply_status(StatusCondition::indefinite(StatusKind::Poison)));
        assert_eq!(
            combatant.status,
            Some(StatusCondition::indefinite(StatusKind::Burn))
        );
    }

    #[test]
    fn status_tick_counts_down_and_expires() {
        let mut combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();
        combatant.apply_status(StatusCondition::new(StatusKind::Sleep, 2));

        assert_eq!(combatant.tick_status(), None);
        assert!(combatant.has_status(StatusKind::Sleep));
        assert_eq!(combatant.tick_status(), Some(StatusKind::Sleep));
        assert_eq!(combatant.status, None);
    }

    #[test]
    fn indefinite_status_never_expires_on_tick() {
        let mut combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();
        combatant.apply_status(StatusCondition::indefinite(StatusKind::Paralysis));

        for _ in 0..10 {
            assert_eq!(combatant.tick_status(), None);
        }
        assert!(combatant.has_status(StatusKind::Paralysis));
    }

    #[test]
    fn validate_rejects_overfull_hp() {
        let mut combatant = Combatant::from_species(&bulbasaur_template(), 10, None).unwrap();
        combatant.current_hp = combatant.max_hp + 1;

        assert!(combatant.validate().is_err());
    }
}
