use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    config::DexConfig,
    moves::Move,
    nature::Nature,
    pokemon::{
        Pokemon,
        form::{FormKind, Region},
        stats::{RoleScores, StatSpread},
    },
};

/// Gender ratio given to regional variants, whose roster has no such column
const VARIANT_GENDER: &str = "50% male, 50% female";
/// Rarity given to regional variants
const VARIANT_RARITY: &str = "Normal";

/// Serde helpers for spreadsheet exports that mix strings and numbers
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    impl Scalar {
        fn into_string(self) -> String {
            match self {
                Scalar::Text(s) => s,
                Scalar::Int(i) => i.to_string(),
                Scalar::Float(f) => f.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    /// Any scalar as a string, `null` as the empty string
    pub fn string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        let value = Option::<Scalar>::deserialize(de)?;
        Ok(value.map(Scalar::into_string).unwrap_or_default())
    }

    /// Like [`string`], but blank values become `None`
    pub fn optional_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let value = string(de)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// A non-negative integer given either as a number or as digits in a string
    pub fn number<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        match Scalar::deserialize(de)? {
            Scalar::Int(i) => u32::try_from(i).map_err(D::Error::custom),
            Scalar::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", s, e))),
            Scalar::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
                Ok(f as u32)
            }
            other => Err(D::Error::custom(format!(
                "expected a number, got {:?}",
                other.into_string()
            ))),
        }
    }

    /// Like [`number`], but a missing or blank value becomes `None`
    pub fn optional_number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
        match Option::<Scalar>::deserialize(de)? {
            None => Ok(None),
            Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Scalar::Text(s)) => s
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", s, e))),
            Some(Scalar::Int(i)) => u32::try_from(i).map(Some).map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!(
                "expected a number, got {:?}",
                other.into_string()
            ))),
        }
    }
}

/// A row of the national dex or regional variants export.
///
/// Both files share their columns except for the special stats, which the
/// variants roster abbreviates.
#[derive(Deserialize, Debug)]
struct RawPokemon {
    #[serde(rename = "Pokedex Number", deserialize_with = "lenient::string")]
    pokedex_number: String,
    #[serde(rename = "Name", deserialize_with = "lenient::string")]
    name: String,
    #[serde(rename = "Primary Type", deserialize_with = "lenient::string")]
    primary_type: String,
    #[serde(
        rename = "Secondary Type",
        default,
        deserialize_with = "lenient::optional_string"
    )]
    secondary_type: Option<String>,

    #[serde(rename = "HP", deserialize_with = "lenient::number")]
    hp: u32,
    #[serde(rename = "Attack", deserialize_with = "lenient::number")]
    attack: u32,
    #[serde(rename = "Defense", deserialize_with = "lenient::number")]
    defense: u32,
    #[serde(
        rename = "Special Attack",
        alias = "Sp. Attack",
        deserialize_with = "lenient::number"
    )]
    special_attack: u32,
    #[serde(
        rename = "Special Defense",
        alias = "Sp. Defense",
        deserialize_with = "lenient::number"
    )]
    special_defense: u32,
    #[serde(rename = "Speed", deserialize_with = "lenient::number")]
    speed: u32,
    #[serde(rename = "Total", default, deserialize_with = "lenient::optional_number")]
    total: Option<u32>,

    #[serde(rename = "Species", default, deserialize_with = "lenient::string")]
    species: String,
    #[serde(rename = "Height", default, deserialize_with = "lenient::string")]
    height: String,
    #[serde(rename = "Weight", default, deserialize_with = "lenient::string")]
    weight: String,
    #[serde(rename = "Ability I", default, deserialize_with = "lenient::string")]
    ability_i: String,
    #[serde(
        rename = "Ability II",
        default,
        deserialize_with = "lenient::optional_string"
    )]
    ability_ii: Option<String>,
    #[serde(
        rename = "Hidden Ability",
        default,
        deserialize_with = "lenient::optional_string"
    )]
    hidden_ability: Option<String>,
    #[serde(rename = "EV yield", default, deserialize_with = "lenient::string")]
    ev_yield: String,
    #[serde(rename = "Base Exp", default, deserialize_with = "lenient::string")]
    base_exp: String,
    #[serde(rename = "Egg Group I", default, deserialize_with = "lenient::string")]
    egg_group_i: String,
    #[serde(
        rename = "Egg Group II",
        default,
        deserialize_with = "lenient::optional_string"
    )]
    egg_group_ii: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "lenient::optional_string")]
    gender: Option<String>,
    #[serde(rename = "Generation", default, deserialize_with = "lenient::string")]
    generation: String,
    #[serde(rename = "Rarity", default, deserialize_with = "lenient::optional_string")]
    rarity: Option<String>,
    #[serde(rename = "Normal Sprite", default, deserialize_with = "lenient::string")]
    normal_sprite: String,
    #[serde(rename = "Shiny Sprite", default, deserialize_with = "lenient::string")]
    shiny_sprite: String,
}

impl RawPokemon {
    /// Normalizes a row into the shape served by the API
    fn into_pokemon(self, id: u32, is_variant: bool) -> Pokemon {
        let stats = StatSpread {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            special_attack: self.special_attack,
            special_defense: self.special_defense,
            speed: self.speed,
        };

        let (gender, rarity, variant_type) = if is_variant {
            let region = Region::from_name(&self.name)
                .map(|r| r.name())
                .unwrap_or("Unknown");
            (
                VARIANT_GENDER.to_string(),
                Some(VARIANT_RARITY.to_string()),
                Some(region.to_string()),
            )
        } else {
            (self.gender.unwrap_or_default(), self.rarity, None)
        };

        Pokemon {
            id,
            form: FormKind::classify(&self.name, is_variant),
            pokedex_number: self.pokedex_number.trim().to_string(),
            name: self.name.trim().to_string(),
            primary_type: self.primary_type.trim().to_string(),
            secondary_type: self.secondary_type,
            total: self.total.unwrap_or_else(|| stats.total()),
            roles: RoleScores::from_base(&stats),
            stats,
            species: self.species,
            height: self.height,
            weight: self.weight,
            ability_i: self.ability_i,
            ability_ii: self.ability_ii,
            hidden_ability: self.hidden_ability,
            ev_yield: self.ev_yield,
            base_exp: self.base_exp,
            egg_group_i: self.egg_group_i.trim().to_string(),
            egg_group_ii: self.egg_group_ii,
            gender,
            generation: self.generation.trim().to_string(),
            rarity,
            normal_sprite: self.normal_sprite,
            shiny_sprite: self.shiny_sprite,
            is_variant,
            variant_type,
        }
    }
}

/// Everything read from the four dataset files, not yet indexed
#[derive(Debug)]
pub struct DexData {
    pub pokemon: Vec<Pokemon>,
    pub variants: Vec<Pokemon>,
    pub moves: Vec<Move>,
    pub natures: Vec<Nature>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed dataset file {}", path.display()))
}

/// Converts the national dex rows and then the variant rows.
///
/// Ids are assigned in that order starting at 1, so variants continue the
/// numbering where the national dex stops.
fn normalize_pokemon(
    national: Vec<RawPokemon>,
    variants: Vec<RawPokemon>,
) -> (Vec<Pokemon>, Vec<Pokemon>) {
    let base_count = national.len() as u32;

    let pokemon = national
        .into_iter()
        .zip(1..)
        .map(|(raw, id)| raw.into_pokemon(id, false))
        .collect();

    let variants = variants
        .into_iter()
        .zip(base_count + 1..)
        .map(|(raw, id)| raw.into_pokemon(id, true))
        .collect();

    (pokemon, variants)
}

/// Reads the dataset files named by the config.
///
/// Any missing or malformed file is an error; the server refuses to start
/// without its data.
pub fn load(config: &DexConfig) -> Result<DexData> {
    let national: Vec<RawPokemon> = read_json(&config.pokemon_path())?;
    let variant_rows: Vec<RawPokemon> = read_json(&config.variants_path())?;
    let moves: Vec<Move> = read_json(&config.moves_path())?;
    let natures: Vec<Nature> = read_json(&config.natures_path())?;

    let (pokemon, variants) = normalize_pokemon(national, variant_rows);

    info!(
        "Loaded {} pokemon, {} regional variants, {} moves and {} natures from {}",
        pokemon.len(),
        variants.len(),
        moves.len(),
        natures.len(),
        config.data_dir.display()
    );

    Ok(DexData {
        pokemon,
        variants,
        moves,
        natures,
    })
}
