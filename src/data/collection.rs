//! Helpers over homogeneous fighter and ability lists.

use crate::data::ability::{Ability, UNIVERSAL_FACTION};
use crate::data::fighter::Fighter;

/// Records that carry an identifier and belong to a faction.
pub trait FactionMember {
    fn id(&self) -> &str;
    fn faction_runemark(&self) -> &str;
}

impl FactionMember for Fighter {
    fn id(&self) -> &str {
        &self.id
    }

    fn faction_runemark(&self) -> &str {
        &self.faction_runemark
    }
}

impl FactionMember for Ability {
    fn id(&self) -> &str {
        &self.id
    }

    fn faction_runemark(&self) -> &str {
        &self.faction_runemark
    }
}

/// Every element tagged with `faction`, in input order.
pub fn filter_by_faction<T>(items: &[T], faction: &str) -> Vec<T>
where
    T: FactionMember + Clone,
{
    items
        .iter()
        .filter(|item| item.faction_runemark() == faction)
        .cloned()
        .collect()
}

pub fn identifiers<T: FactionMember>(items: &[T]) -> Vec<&str> {
    items.iter().map(T::id).collect()
}

/// Abilities a fighter can use: authored for its faction, its bladeborn tag or
/// `universal`, with every ability runemark present on the fighter.
pub fn abilities_for_fighter<'a>(fighter: &Fighter, abilities: &'a [Ability]) -> Vec<&'a Ability> {
    abilities
        .iter()
        .filter(|ability| {
            let faction = ability.faction_runemark.as_str();
            faction == fighter.faction_runemark
                || faction == UNIVERSAL_FACTION
                || fighter.bladeborn() == Some(faction)
        })
        .filter(|ability| ability.runemarks.iter().all(|r| fighter.has_runemark(r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(id: &str, faction: &str) -> Fighter {
        Fighter {
            id: id.to_string(),
            faction_runemark: faction.to_string(),
            ..Fighter::default()
        }
    }

    fn ability(id: &str, faction: &str, runemarks: &[&str]) -> Ability {
        Ability {
            id: id.to_string(),
            faction_runemark: faction.to_string(),
            runemarks: runemarks.iter().map(|r| r.to_string()).collect(),
            ..Ability::default()
        }
    }

    #[test]
    fn filter_keeps_order_and_matches_exactly() {
        let fighters = vec![
            fighter("f1", "Ironjawz"),
            fighter("f2", "Kruleboyz"),
            fighter("f3", "Ironjawz"),
        ];
        let ironjawz = filter_by_faction(&fighters, "Ironjawz");
        assert_eq!(identifiers(&ironjawz), vec!["f1", "f3"]);
        assert!(filter_by_faction(&fighters, "ironjawz").is_empty());
    }

    #[test]
    fn identifiers_of_empty_list_is_empty() {
        let abilities: Vec<Ability> = Vec::new();
        assert!(identifiers(&abilities).is_empty());
    }

    #[test]
    fn fighter_abilities_require_runemarks_and_faction() {
        let mut brute = fighter("f1", "Ironjawz");
        brute.runemarks = vec!["brute".to_string(), "leader".to_string()];
        brute.bladeborn_runemark = Some("Ironsunz".to_string());

        let abilities = vec![
            ability("a1", "Ironjawz", &[]),
            ability("a2", "Ironjawz", &["leader"]),
            ability("a3", "Ironjawz", &["mounted"]),
            ability("a4", "universal", &[]),
            ability("a5", "Kruleboyz", &[]),
            ability("a6", "Ironsunz", &["brute"]),
        ];

        let ids: Vec<&str> = abilities_for_fighter(&brute, &abilities)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a1", "a2", "a4", "a6"]);
    }
}
