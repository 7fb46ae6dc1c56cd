//! Load fighter and ability batches from the data tree.
//! Layout: <root>/<GrandAlliance>/*_fighters.json and *_abilities.json.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::data::ability::Ability;
use crate::data::fighter::{Fighter, GrandAlliance};
use crate::data::warband::{assemble_warbands, bladeborn_parents, target_faction, Assembly};
use crate::error::{AssemblyError, LoadError, Result};

pub const FIGHTER_FILE_SUFFIX: &str = "_fighters.json";
pub const ABILITY_FILE_SUFFIX: &str = "_abilities.json";

/// Every fighter and ability found under a data root, with the file each came from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub fighters: Vec<Fighter>,
    pub abilities: Vec<Ability>,
    pub files_loaded: usize,
    fighter_origins: Vec<PathBuf>,
    ability_origins: Vec<PathBuf>,
}

impl Dataset {
    pub fn add_fighters(&mut self, path: &Path, batch: Vec<Fighter>) {
        self.fighter_origins
            .extend(batch.iter().map(|_| path.to_path_buf()));
        self.fighters.extend(batch);
        self.files_loaded += 1;
    }

    pub fn add_abilities(&mut self, path: &Path, batch: Vec<Ability>) {
        self.ability_origins
            .extend(batch.iter().map(|_| path.to_path_buf()));
        self.abilities.extend(batch);
        self.files_loaded += 1;
    }

    /// File holding the record rejected with `err`: the second record with that id
    /// filed under the same warband.
    pub fn origin_of(&self, err: &AssemblyError) -> Option<&Path> {
        let origin = match err {
            AssemblyError::DuplicateFighter { id, warband, .. } => self
                .fighters
                .iter()
                .zip(&self.fighter_origins)
                .filter(|(fighter, _)| fighter.id == *id && fighter.faction_runemark == *warband)
                .nth(1)
                .map(|(_, path)| path),
            AssemblyError::DuplicateAbility { id, warband, .. } => {
                let (parents, _) = bladeborn_parents(&self.fighters);
                self.abilities
                    .iter()
                    .zip(&self.ability_origins)
                    .filter(|(ability, _)| {
                        !ability.is_battle_trait()
                            && ability.id == *id
                            && target_faction(&parents, ability) == warband.as_str()
                    })
                    .nth(1)
                    .map(|(_, path)| path)
            }
        };
        origin.map(PathBuf::as_path)
    }

    /// Group the loaded records into warbands, naming the source file on failure.
    pub fn assemble(&self) -> std::result::Result<Assembly, AssemblyError> {
        assemble_warbands(&self.fighters, &self.abilities).map_err(|err| {
            let file = self.origin_of(&err).map(Path::to_path_buf);
            err.with_file(file)
        })
    }
}

fn load_batch<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_fighter_batch(path: impl AsRef<Path>) -> Result<Vec<Fighter>> {
    load_batch(path.as_ref())
}

pub fn load_ability_batch(path: impl AsRef<Path>) -> Result<Vec<Ability>> {
    load_batch(path.as_ref())
}

/// Files in `dir` whose name ends with `suffix`, sorted by name.
fn files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Walk every grand alliance directory under `root` and collect all batches.
pub fn load_dataset(root: impl AsRef<Path>) -> Result<Dataset> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(LoadError::DataRootNotFound(root.to_path_buf()));
    }

    let mut dataset = Dataset::default();
    for alliance in GrandAlliance::ALL {
        let dir = root.join(alliance.dir_name());
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "no data for {alliance}; skipping");
            continue;
        }

        for path in files_with_suffix(&dir, ABILITY_FILE_SUFFIX)? {
            let batch = load_ability_batch(&path)?;
            tracing::debug!(file = %path.display(), count = batch.len(), "loaded abilities");
            dataset.add_abilities(&path, batch);
        }
        for path in files_with_suffix(&dir, FIGHTER_FILE_SUFFIX)? {
            let batch = load_fighter_batch(&path)?;
            tracing::debug!(file = %path.display(), count = batch.len(), "loaded fighters");
            dataset.add_fighters(&path, batch);
        }
    }

    tracing::info!(
        files = dataset.files_loaded,
        fighters = dataset.fighters.len(),
        abilities = dataset.abilities.len(),
        "data loaded from {}",
        root.display()
    );
    Ok(dataset)
}
