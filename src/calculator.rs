//! Battle stat calculation from base stats, level, nature, IVs and EVs.

use serde::{Deserialize, Serialize};

use crate::{
    nature::{Modifier, Nature},
    pokemon::{
        Pokemon,
        stats::{MAX_EV, MAX_IV, Stat, StatSpread},
    },
};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 100;

/// Computes the six battle stats.
///
/// Level is clamped to `1..=100`, each IV to `0..=31` and each EV to
/// `0..=252`. The 510 EV total is the caller's business. A missing nature
/// behaves like a neutral one.
pub fn calculate_stats(
    base: &StatSpread,
    level: u32,
    nature: Option<&Nature>,
    ivs: &StatSpread,
    evs: &StatSpread,
) -> StatSpread {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    let mut stats = StatSpread::default();

    for stat in Stat::ALL {
        let iv = ivs.get(stat).min(MAX_IV);
        let ev = evs.get(stat).min(MAX_EV);
        let scaled = base
            .get(stat)
            .saturating_mul(2)
            .saturating_add(iv + ev / 4)
            .saturating_mul(level)
            / 100;

        let value = if stat == Stat::Hp {
            scaled.saturating_add(level + 10)
        } else {
            let modifier = nature.map_or(Modifier::Neutral, |n| n.modifier_for(stat));
            modifier.apply(scaled.saturating_add(5))
        };

        stats.set(stat, value);
    }

    stats
}

/// The calculator panel of the details page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub level: u32,
    /// Name of the selected nature
    pub nature: String,
    pub ivs: StatSpread,
    pub evs: StatSpread,
}

impl Default for CalculatorState {
    /// Level 50 Adamant, perfect IVs, 252 Atk / 4 SpD / 252 Spe
    fn default() -> Self {
        Self {
            level: 50,
            nature: "Adamant".to_string(),
            ivs: StatSpread::splat(MAX_IV),
            evs: StatSpread {
                attack: 252,
                special_defense: 4,
                speed: 252,
                ..StatSpread::default()
            },
        }
    }
}

impl CalculatorState {
    /// Calculates the stats of `pokemon`, looking the nature up by name.
    ///
    /// An unknown nature name is treated as neutral.
    pub fn calculate(&self, pokemon: &Pokemon, natures: &[Nature]) -> StatSpread {
        let nature = Nature::find(natures, &self.nature);
        calculate_stats(&pokemon.stats, self.level, nature, &self.ivs, &self.evs)
    }

    /// Sets one EV, refusing changes that would break the 510 total
    pub fn set_ev(&mut self, stat: Stat, value: u32) -> bool {
        self.evs.set_ev(stat, value)
    }

    /// Sets one IV, clamped to `0..=31`
    pub fn set_iv(&mut self, stat: Stat, value: u32) {
        self.ivs.set(stat, value.min(MAX_IV));
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    }
}
