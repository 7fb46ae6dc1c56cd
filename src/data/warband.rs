//! Warband records and the assembler that groups flat fighter/ability lists into them.
//!
//! Fighters are grouped by their own faction-runemark. Abilities are grouped by their
//! faction-runemark after resolving bladeborn tags to the faction of the fighter that
//! declared them. Warbands come out in first-seen order: fighters first, then abilities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::ability::Ability;
use crate::data::collection::identifiers;
use crate::data::fighter::Fighter;
use crate::error::AssemblyError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warband {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fighters: Vec<Fighter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<Ability>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub battle_traits: Vec<Ability>,
}

impl Warband {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a fighter, rejecting an id already present in this warband.
    pub fn add_fighter(&mut self, fighter: Fighter) -> Result<(), AssemblyError> {
        if identifiers(&self.fighters).contains(&fighter.id.as_str()) {
            return Err(AssemblyError::DuplicateFighter {
                id: fighter.id,
                warband: self.name.clone(),
                file: None,
            });
        }
        self.fighters.push(fighter);
        Ok(())
    }

    /// Add an ordinary ability, rejecting an id already present in this warband.
    pub fn add_ability(&mut self, ability: Ability) -> Result<(), AssemblyError> {
        if identifiers(&self.abilities).contains(&ability.id.as_str()) {
            return Err(AssemblyError::DuplicateAbility {
                id: ability.id,
                warband: self.name.clone(),
                file: None,
            });
        }
        self.abilities.push(ability);
        Ok(())
    }

    /// Battle traits are appended without a duplicate check.
    pub fn add_battle_trait(&mut self, ability: Ability) {
        self.battle_traits.push(ability);
    }
}

/// Ambiguous bladeborn input noticed during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BladebornConflict {
    /// Two fighters declared the same bladeborn tag under different factions.
    /// The later declaration is used.
    ConflictingParents {
        bladeborn: String,
        previous: String,
        replacement: String,
    },
    /// A bladeborn tag is also a fighter's own faction. Abilities tagged with it
    /// still go to `parent`.
    ShadowsFaction { bladeborn: String, parent: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub warbands: Vec<Warband>,
    pub conflicts: Vec<BladebornConflict>,
}

/// Insertion-ordered warbands with lookup by name.
#[derive(Debug, Default)]
struct WarbandIndex {
    warbands: Vec<Warband>,
    by_name: HashMap<String, usize>,
}

impl WarbandIndex {
    fn entry(&mut self, name: &str) -> &mut Warband {
        let index = match self.by_name.get(name) {
            Some(&index) => index,
            None => {
                self.warbands.push(Warband::new(name));
                self.by_name.insert(name.to_string(), self.warbands.len() - 1);
                self.warbands.len() - 1
            }
        };
        &mut self.warbands[index]
    }
}

/// Bladeborn tag to parent faction, from every fighter declaring a tag. A tag declared
/// under two factions maps to the later one and is returned as a conflict.
pub fn bladeborn_parents(fighters: &[Fighter]) -> (HashMap<&str, &str>, Vec<BladebornConflict>) {
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut conflicts = Vec::new();
    for fighter in fighters {
        let Some(tag) = fighter.bladeborn() else {
            continue;
        };
        let parent = fighter.faction_runemark.as_str();
        if let Some(previous) = parents.insert(tag, parent) {
            if previous != parent {
                conflicts.push(BladebornConflict::ConflictingParents {
                    bladeborn: tag.to_string(),
                    previous: previous.to_string(),
                    replacement: parent.to_string(),
                });
            }
        }
    }
    (parents, conflicts)
}

/// Warband an ability is filed under once bladeborn tags are resolved.
pub fn target_faction<'a>(parents: &HashMap<&'a str, &'a str>, ability: &'a Ability) -> &'a str {
    let faction = ability.faction_runemark.as_str();
    parents.get(faction).copied().unwrap_or(faction)
}

pub fn assemble_warbands(
    fighters: &[Fighter],
    abilities: &[Ability],
) -> Result<Assembly, AssemblyError> {
    let mut index = WarbandIndex::default();
    for fighter in fighters {
        index
            .entry(&fighter.faction_runemark)
            .add_fighter(fighter.clone())?;
    }

    let (parents, mut conflicts) = bladeborn_parents(fighters);
    for conflict in &conflicts {
        if let BladebornConflict::ConflictingParents {
            bladeborn,
            previous,
            replacement,
        } = conflict
        {
            tracing::warn!(
                %bladeborn,
                %previous,
                %replacement,
                "bladeborn tag declared under two factions; using the later one"
            );
        }
    }

    for warband in &index.warbands {
        if let Some(&parent) = parents.get(warband.name.as_str()) {
            if parent != warband.name {
                tracing::warn!(
                    bladeborn = %warband.name,
                    parent,
                    "bladeborn tag is also a fighter faction; its abilities go to the parent"
                );
                conflicts.push(BladebornConflict::ShadowsFaction {
                    bladeborn: warband.name.clone(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    for ability in abilities {
        let warband = index.entry(target_faction(&parents, ability));
        if ability.is_battle_trait() {
            warband.add_battle_trait(ability.clone());
        } else {
            warband.add_ability(ability.clone())?;
        }
    }

    Ok(Assembly {
        warbands: index.warbands,
        conflicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(id: &str, faction: &str, bladeborn: Option<&str>) -> Fighter {
        Fighter {
            id: id.to_string(),
            name: id.to_uppercase(),
            faction_runemark: faction.to_string(),
            bladeborn_runemark: bladeborn.map(str::to_string),
            ..Fighter::default()
        }
    }

    fn ability(id: &str, kind: &str, faction: &str) -> Ability {
        Ability {
            id: id.to_string(),
            kind: kind.to_string(),
            faction_runemark: faction.to_string(),
            ..Ability::default()
        }
    }

    #[test]
    fn warband_rejects_repeated_fighter_id() {
        let mut warband = Warband::new("Ironjawz");
        warband
            .add_fighter(fighter("f1", "Ironjawz", None))
            .expect("first insert");
        let err = warband
            .add_fighter(fighter("f1", "Ironjawz", None))
            .expect_err("second insert should fail");
        assert_eq!(
            err,
            AssemblyError::DuplicateFighter {
                id: "f1".to_string(),
                warband: "Ironjawz".to_string(),
                file: None,
            }
        );
        assert_eq!(warband.fighters.len(), 1);
    }

    #[test]
    fn battle_traits_are_not_duplicate_checked() {
        let mut warband = Warband::new("Ironjawz");
        warband.add_battle_trait(ability("a1", "battle_trait", "Ironjawz"));
        warband.add_battle_trait(ability("a1", "battle_trait", "Ironjawz"));
        assert_eq!(warband.battle_traits.len(), 2);
    }

    #[test]
    fn same_fighter_id_in_different_factions_is_allowed() {
        let fighters = vec![
            fighter("f1", "Ironjawz", None),
            fighter("f1", "Kruleboyz", None),
        ];
        let assembly = assemble_warbands(&fighters, &[]).expect("assembly");
        assert_eq!(assembly.warbands.len(), 2);
    }

    #[test]
    fn bladeborn_abilities_join_parent_faction() {
        let fighters = vec![
            fighter("f1", "Cities of Sigmar", None),
            fighter("f2", "Cities of Sigmar", Some("Hammerhal")),
        ];
        let abilities = vec![ability("a1", "double", "Hammerhal")];

        let assembly = assemble_warbands(&fighters, &abilities).expect("assembly");
        assert_eq!(assembly.warbands.len(), 1);
        assert_eq!(assembly.warbands[0].name, "Cities of Sigmar");
        assert_eq!(assembly.warbands[0].abilities[0].id, "a1");
        assert!(assembly.conflicts.is_empty());
    }

    #[test]
    fn conflicting_bladeborn_parents_use_later_fighter() {
        let fighters = vec![
            fighter("f1", "Alpha", Some("Shared")),
            fighter("f2", "Beta", Some("Shared")),
        ];
        let abilities = vec![ability("a1", "double", "Shared")];

        let assembly = assemble_warbands(&fighters, &abilities).expect("assembly");
        let beta = assembly
            .warbands
            .iter()
            .find(|w| w.name == "Beta")
            .expect("beta warband");
        assert_eq!(beta.abilities.len(), 1);
        assert_eq!(
            assembly.conflicts,
            vec![BladebornConflict::ConflictingParents {
                bladeborn: "Shared".to_string(),
                previous: "Alpha".to_string(),
                replacement: "Beta".to_string(),
            }]
        );
    }

    #[test]
    fn bladeborn_tag_used_as_faction_is_reported() {
        let fighters = vec![
            fighter("f1", "Parent", Some("Elite")),
            fighter("f2", "Elite", None),
        ];
        let abilities = vec![ability("a1", "double", "Elite")];

        let assembly = assemble_warbands(&fighters, &abilities).expect("assembly");
        let names: Vec<&str> = assembly.warbands.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Parent", "Elite"]);
        assert_eq!(assembly.warbands[0].abilities.len(), 1);
        assert!(assembly.warbands[1].abilities.is_empty());
        assert_eq!(
            assembly.conflicts,
            vec![BladebornConflict::ShadowsFaction {
                bladeborn: "Elite".to_string(),
                parent: "Parent".to_string(),
            }]
        );
    }

    #[test]
    fn target_faction_resolves_bladeborn_tags() {
        let fighters = vec![
            fighter("f1", "Cities of Sigmar", Some("Hammerhal")),
            fighter("f2", "Ironjawz", Some("")),
        ];
        let (parents, conflicts) = bladeborn_parents(&fighters);
        assert_eq!(parents.len(), 1);
        assert!(conflicts.is_empty());

        let tagged = ability("a1", "double", "Hammerhal");
        let plain = ability("a2", "double", "Ironjawz");
        assert_eq!(target_faction(&parents, &tagged), "Cities of Sigmar");
        assert_eq!(target_faction(&parents, &plain), "Ironjawz");
    }

    #[test]
    fn empty_bladeborn_string_registers_nothing() {
        let fighters = vec![fighter("f1", "Ironjawz", Some(""))];
        let abilities = vec![ability("a1", "double", "")];

        let assembly = assemble_warbands(&fighters, &abilities).expect("assembly");
        let names: Vec<&str> = assembly.warbands.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Ironjawz", ""]);
    }
}
