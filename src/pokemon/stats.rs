use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest individual value a single stat can have
pub const MAX_IV: u32 = 31;

/// Highest effort value a single stat can have
pub const MAX_EV: u32 = 252;

/// Highest sum of effort values across all six stats
pub const MAX_TOTAL_EV: u32 = 510;

/// Highest base stat, used to scale stat bars
pub const MAX_BASE_STAT: u32 = 255;

/// One of the six battle statistics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Maps a display label onto a stat.
    ///
    /// Accepts the spellings found in the nature data ("Sp. Atk", "Sp. Def")
    /// as well as the long forms ("Special Attack") and the camelCase keys,
    /// ignoring case, spaces, dots and dashes.
    pub fn from_label(label: &str) -> Option<Stat> {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '.' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "hp" => Some(Stat::Hp),
            "attack" | "atk" => Some(Stat::Attack),
            "defense" | "def" => Some(Stat::Defense),
            "spatk" | "spattack" | "specialattack" | "spa" => Some(Stat::SpecialAttack),
            "spdef" | "spdefense" | "specialdefense" | "spd" => Some(Stat::SpecialDefense),
            "speed" | "spe" => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for each of the six stats.
///
/// Used for base stats, IVs, EVs and calculated stats alike.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatSpread {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatSpread {
    /// The same value in every stat
    pub fn splat(value: u32) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        let slot = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };
        *slot = value;
    }

    /// Saturates at `u32::MAX` instead of overflowing
    pub fn total(&self) -> u32 {
        Stat::ALL
            .iter()
            .fold(0u32, |sum, s| sum.saturating_add(self.get(*s)))
    }

    /// Sets an effort value the way the calculator form does.
    ///
    /// The value is clamped to `0..=252`. If the new total would exceed 510
    /// the spread is left untouched and `false` is returned.
    pub fn set_ev(&mut self, stat: Stat, value: u32) -> bool {
        let value = value.min(MAX_EV);
        let others = Stat::ALL
            .iter()
            .filter(|s| **s != stat)
            .fold(0u32, |sum, s| sum.saturating_add(self.get(*s)));
        if others.saturating_add(value) > MAX_TOTAL_EV {
            return false;
        }
        self.set(stat, value);
        true
    }
}

/// Derived role scores the dataset ships alongside base stats
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleScores {
    /// Attack + Speed
    pub physical_sweeper: u32,
    /// Special Attack + Speed
    pub special_sweeper: u32,
    /// HP + Defense + Special Defense
    pub wall: u32,
    /// Attack + Defense
    pub physical_tank: u32,
    /// Special Attack + Special Defense
    pub special_tank: u32,
}

impl RoleScores {
    pub fn from_base(base: &StatSpread) -> Self {
        Self {
            physical_sweeper: base.attack + base.speed,
            special_sweeper: base.special_attack + base.speed,
            wall: base.hp + base.defense + base.special_defense,
            physical_tank: base.attack + base.defense,
            special_tank: base.special_attack + base.special_defense,
        }
    }
}

/// Width of a base stat bar, in percent of the highest possible base stat
pub fn base_stat_percent(value: u32) -> u32 {
    let percent = (value as f64 / MAX_BASE_STAT as f64 * 100.0).round() as u32;
    percent.min(100)
}
