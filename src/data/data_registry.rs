//! The assembled warband data, built in one pass over the data root.
//! HTTP handlers and the summary printer read from a shared `Arc<DataRegistry>`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::data::ability::Ability;
use crate::data::fighter::Fighter;
use crate::data::loader::load_dataset;
use crate::data::warband::{assemble_warbands, BladebornConflict, Warband};
use crate::error::{AssemblyError, Result};

/// Read-only registry of fighters, abilities and assembled warbands.
#[derive(Debug)]
pub struct DataRegistry {
    fighters: Vec<Fighter>,
    abilities: Vec<Ability>,
    warbands: Vec<Warband>,
    conflicts: Vec<BladebornConflict>,
    /// Warband name -> index into `warbands`.
    warband_index: HashMap<String, usize>,
}

impl DataRegistry {
    /// Load the data tree under `root` and assemble it. Any failure means no registry,
    /// so the server never starts on a partial dataset.
    pub fn load(root: impl AsRef<Path>) -> Result<Arc<DataRegistry>> {
        let dataset = load_dataset(root)?;
        let assembly = dataset.assemble()?;
        tracing::info!(
            warbands = assembly.warbands.len(),
            conflicts = assembly.conflicts.len(),
            "warbands assembled"
        );
        Ok(Arc::new(Self::build(
            dataset.fighters,
            dataset.abilities,
            assembly.warbands,
            assembly.conflicts,
        )))
    }

    /// Assemble a registry from in-memory records.
    pub fn from_records(
        fighters: Vec<Fighter>,
        abilities: Vec<Ability>,
    ) -> std::result::Result<DataRegistry, AssemblyError> {
        let assembly = assemble_warbands(&fighters, &abilities)?;
        Ok(Self::build(
            fighters,
            abilities,
            assembly.warbands,
            assembly.conflicts,
        ))
    }

    fn build(
        fighters: Vec<Fighter>,
        abilities: Vec<Ability>,
        warbands: Vec<Warband>,
        conflicts: Vec<BladebornConflict>,
    ) -> DataRegistry {
        let warband_index = warbands
            .iter()
            .enumerate()
            .map(|(index, warband)| (warband.name.clone(), index))
            .collect();
        DataRegistry {
            fighters,
            abilities,
            warbands,
            conflicts,
            warband_index,
        }
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Warbands in first-seen order.
    pub fn warbands(&self) -> &[Warband] {
        &self.warbands
    }

    pub fn conflicts(&self) -> &[BladebornConflict] {
        &self.conflicts
    }

    pub fn warband(&self, name: &str) -> Option<&Warband> {
        self.warband_index
            .get(name)
            .and_then(|&index| self.warbands.get(index))
    }

    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.fighters.iter().find(|fighter| fighter.id == id)
    }
}
