/// Nature HTTP endpoints module
pub mod endpoints;

use serde::{Deserialize, Serialize};

use crate::{dex::loader::lenient, pokemon::stats::Stat};

/// A nature raises one stat by 10% and lowers another by 10%.
///
/// When both labels name the same stat the nature is neutral.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Nature {
    /// The name of the nature
    #[serde(alias = "Nature", deserialize_with = "lenient::string")]
    pub nature: String,
    /// Label of the stat this nature raises
    #[serde(alias = "Increases", deserialize_with = "lenient::string")]
    pub increases: String,
    /// Label of the stat this nature lowers
    #[serde(alias = "Decreases", deserialize_with = "lenient::string")]
    pub decreases: String,
}

/// The effect a nature has on a single stat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Raised,
    Neutral,
    Lowered,
}

impl Modifier {
    /// Applies the ±10% with integer floor arithmetic
    pub fn apply(&self, value: u32) -> u32 {
        let scaled = match self {
            Modifier::Raised => u64::from(value) * 11 / 10,
            Modifier::Neutral => return value,
            Modifier::Lowered => u64::from(value) * 9 / 10,
        };
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Nature {
    /// Finds a nature by name, ignoring case and surrounding whitespace
    pub fn find<'a>(natures: &'a [Nature], name: &str) -> Option<&'a Nature> {
        let name = name.trim();
        natures.iter().find(|n| n.nature.eq_ignore_ascii_case(name))
    }

    pub fn is_neutral(&self) -> bool {
        self.increases.trim().eq_ignore_ascii_case(self.decreases.trim())
    }

    /// The raised stat, `None` for neutral natures
    pub fn increased_stat(&self) -> Option<Stat> {
        if self.is_neutral() {
            return None;
        }
        Stat::from_label(&self.increases)
    }

    /// The lowered stat, `None` for neutral natures
    pub fn decreased_stat(&self) -> Option<Stat> {
        if self.is_neutral() {
            return None;
        }
        Stat::from_label(&self.decreases)
    }

    /// HP is never affected by a nature
    pub fn modifier_for(&self, stat: Stat) -> Modifier {
        if stat == Stat::Hp {
            return Modifier::Neutral;
        }

        if self.increased_stat() == Some(stat) {
            Modifier::Raised
        } else if self.decreased_stat() == Some(stat) {
            Modifier::Lowered
        } else {
            Modifier::Neutral
        }
    }
}
