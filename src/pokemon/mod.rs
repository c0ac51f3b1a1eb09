/// Pokemon HTTP endpoints module
pub mod endpoints;

/// Special form classification (mega, regional, ...)
pub mod form;

/// Pokemon Type module
pub mod ptype;

/// Pokemon Stats (hp, etc) module
pub mod stats;

use serde::{Deserialize, Serialize};

use form::FormKind;
use stats::{RoleScores, StatSpread};

/// Represents a Pokemon entry of the dex with its typing, stats and metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    /// Position in the loaded dataset, starting at 1
    pub id: u32,
    /// National dex number as printed in the source data
    pub pokedex_number: String,
    pub name: String,

    pub primary_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<String>,

    /// The base stats of the Pokemon
    #[serde(flatten)]
    pub stats: StatSpread,
    /// Sum of the base stats as given by the dataset
    pub total: u32,
    #[serde(flatten)]
    pub roles: RoleScores,

    pub species: String,
    pub height: String,
    pub weight: String,
    #[serde(rename = "abilityI")]
    pub ability_i: String,
    #[serde(rename = "abilityII", default, skip_serializing_if = "Option::is_none")]
    pub ability_ii: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_ability: Option<String>,
    pub ev_yield: String,
    pub base_exp: String,
    #[serde(rename = "eggGroupI")]
    pub egg_group_i: String,
    #[serde(rename = "eggGroupII", default, skip_serializing_if = "Option::is_none")]
    pub egg_group_ii: Option<String>,
    pub gender: String,
    pub generation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    pub normal_sprite: String,
    pub shiny_sprite: String,

    /// Set for entries loaded from the regional variants roster
    pub is_variant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<String>,
    #[serde(default)]
    pub form: FormKind,
}

impl Pokemon {
    /// The primary type followed by the secondary type, if any
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_type.as_str()).chain(self.secondary_type.as_deref())
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types().any(|t| t == ty)
    }

    pub fn egg_groups(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.egg_group_i.as_str()).chain(self.egg_group_ii.as_deref())
    }

    pub fn in_egg_group(&self, group: &str) -> bool {
        self.egg_groups().any(|g| g == group)
    }

    /// Checks the first, second and hidden ability
    pub fn has_ability(&self, ability: &str) -> bool {
        self.ability_i == ability
            || self.ability_ii.as_deref() == Some(ability)
            || self.hidden_ability.as_deref() == Some(ability)
    }
}
