use serde::{Deserialize, Serialize};

/// Type tag reserved for warband-wide battle traits.
pub const BATTLE_TRAIT: &str = "battle_trait";

/// Faction-runemark of abilities any fighter may take.
pub const UNIVERSAL_FACTION: &str = "universal";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Action cost, or [`BATTLE_TRAIT`].
    #[serde(rename = "cost", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(rename = "warband", default, skip_serializing_if = "String::is_empty")]
    pub faction_runemark: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runemarks: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Ability {
    pub fn is_battle_trait(&self) -> bool {
        self.kind == BATTLE_TRAIT
    }
}
