use std::fmt;

use serde::Serialize;

use crate::data::{abilities_for_fighter, Ability, DataRegistry, Warband};

#[derive(Debug)]
pub enum LookupError {
    NotFound(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "{what} not found"),
            Self::Serialize(err) => write!(
                f,
                "an error occurred while getting the requested data -- {err}"
            ),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

pub fn health_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "warcry-data",
        "version": env!("CARGO_PKG_VERSION"),
        "fighters": registry.fighters().len(),
        "abilities": registry.abilities().len(),
        "warbands": registry.warbands().len(),
        "bladeborn_conflicts": registry.conflicts(),
    }))
}

pub fn fighters_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry.fighters())
}

pub fn abilities_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry.abilities())
}

pub fn warbands_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry.warbands())
}

pub fn warband_payload(registry: &DataRegistry, name: &str) -> Result<String, LookupError> {
    let warband: &Warband = registry
        .warband(name)
        .ok_or_else(|| LookupError::NotFound(format!("warband '{name}'")))?;
    Ok(serde_json::to_string_pretty(warband)?)
}

#[derive(Debug, Serialize)]
struct FighterAbilities<'a> {
    fighter: &'a str,
    warband: &'a str,
    abilities: Vec<&'a Ability>,
}

/// Abilities usable by one fighter, looked up by id.
pub fn fighter_abilities_payload(registry: &DataRegistry, id: &str) -> Result<String, LookupError> {
    let fighter = registry
        .fighter(id)
        .ok_or_else(|| LookupError::NotFound(format!("fighter '{id}'")))?;
    let payload = FighterAbilities {
        fighter: &fighter.id,
        warband: &fighter.faction_runemark,
        abilities: abilities_for_fighter(fighter, registry.abilities()),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}
