pub mod ability;
pub mod collection;
pub mod data_registry;
pub mod fighter;
pub mod loader;
pub mod warband;

pub use ability::{Ability, BATTLE_TRAIT};
pub use collection::{abilities_for_fighter, filter_by_faction, identifiers, FactionMember};
pub use data_registry::DataRegistry;
pub use fighter::{Fighter, GrandAlliance, Weapon};
pub use loader::{load_ability_batch, load_dataset, load_fighter_batch, Dataset};
pub use warband::{
    assemble_warbands, bladeborn_parents, target_faction, Assembly, BladebornConflict, Warband,
};
