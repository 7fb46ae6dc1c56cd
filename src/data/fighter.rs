//! Fighter profiles as they appear in `*_fighters.json` files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level grouping used to organise the data tree on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrandAlliance {
    #[serde(rename = "chaos", alias = "Chaos")]
    Chaos,
    #[serde(rename = "order", alias = "Order")]
    Order,
    #[serde(rename = "death", alias = "Death")]
    Death,
    #[serde(rename = "destruction", alias = "Destruction")]
    Destruction,
    #[serde(rename = "universal", alias = "Universal")]
    Universal,
}

impl GrandAlliance {
    /// Every alliance in the order the loader walks them.
    pub const ALL: [GrandAlliance; 5] = [
        GrandAlliance::Chaos,
        GrandAlliance::Order,
        GrandAlliance::Death,
        GrandAlliance::Destruction,
        GrandAlliance::Universal,
    ];

    /// Directory name under the data root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Chaos => "Chaos",
            Self::Order => "Order",
            Self::Death => "Death",
            Self::Destruction => "Destruction",
            Self::Universal => "universal",
        }
    }
}

impl fmt::Display for GrandAlliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub runemark: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_range: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_range: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub attacks: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub strength: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dmg_hit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dmg_crit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Faction-runemark naming the warband this fighter belongs to.
    #[serde(rename = "warband", default, skip_serializing_if = "String::is_empty")]
    pub faction_runemark: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runemarks: Vec<String>,
    /// Sub-faction tag; abilities authored against it belong to `faction_runemark`.
    #[serde(rename = "bladeborn", default, skip_serializing_if = "is_blank")]
    pub bladeborn_runemark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_alliance: Option<GrandAlliance>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub movement: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub toughness: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub wounds: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub points: u32,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl Fighter {
    /// Bladeborn tag, treating an empty string the same as an absent one.
    pub fn bladeborn(&self) -> Option<&str> {
        self.bladeborn_runemark
            .as_deref()
            .filter(|runemark| !runemark.is_empty())
    }

    pub fn has_runemark(&self, runemark: &str) -> bool {
        self.runemarks.iter().any(|r| r == runemark)
    }
}
