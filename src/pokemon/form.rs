use serde::{Deserialize, Serialize};

/// Regions with their own variants of older Pokemon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Alolan,
    Galarian,
    Hisuian,
    Paldean,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Alolan,
        Region::Galarian,
        Region::Hisuian,
        Region::Paldean,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Alolan => "Alolan",
            Region::Galarian => "Galarian",
            Region::Hisuian => "Hisuian",
            Region::Paldean => "Paldean",
        }
    }

    /// Finds the regional prefix in a Pokemon name, if any
    pub fn from_name(name: &str) -> Option<Region> {
        name.split_whitespace()
            .find_map(|word| Self::ALL.into_iter().find(|r| r.name() == word))
    }
}

/// Which special form a Pokemon entry is.
///
/// Decided once when the dataset is loaded so filters never need to look at
/// names again.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    #[default]
    Base,
    Mega,
    Gigantamax,
    Regional,
}

const MEGA_MARKER: &str = "Mega";
const GIGANTAMAX_MARKER: &str = "Gigantamax";

impl FormKind {
    /// Markers are whole words, so "Meganium" stays a base form
    pub fn classify(name: &str, is_variant: bool) -> FormKind {
        let has_word = |marker: &str| name.split_whitespace().any(|w| w == marker);

        if has_word(GIGANTAMAX_MARKER) {
            FormKind::Gigantamax
        } else if has_word(MEGA_MARKER) {
            FormKind::Mega
        } else if is_variant || Region::from_name(name).is_some() {
            FormKind::Regional
        } else {
            FormKind::Base
        }
    }

    /// The word that prefixes the base name for this form, if it has one
    pub(crate) fn markers(&self) -> &'static [&'static str] {
        match self {
            FormKind::Base => &[],
            FormKind::Mega => &[MEGA_MARKER],
            FormKind::Gigantamax => &[GIGANTAMAX_MARKER],
            FormKind::Regional => &["Alolan", "Galarian", "Hisuian", "Paldean"],
        }
    }
}
