use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

/// Config file read when `POKEDEX_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "POKEDEX_CONFIG";

/// Where the dataset files live.
///
/// Read from the `[data]` table of `config.toml`; every key is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DexConfig {
    pub data_dir: PathBuf,
    pub pokemon_file: String,
    pub moves_file: String,
    pub natures_file: String,
    pub variants_file: String,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            pokemon_file: "National Dex.json".to_string(),
            moves_file: "Moves.json".to_string(),
            natures_file: "Natures.json".to_string(),
            variants_file: "Regional Variants.json".to_string(),
        }
    }
}

/// Reads an optional string key, failing if it has any other type
fn string_key(table: &toml::Table, key: &str) -> Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or(anyhow::anyhow!("data.{} must be a string", key)),
    }
}

impl DexConfig {
    /// Loads the config from `POKEDEX_CONFIG` or `config.toml`
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(path)
    }

    /// A missing file gives the defaults, a malformed one is an error
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let cfg = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .parse::<toml::Table>()
            .with_context(|| format!("Malformed config {}", path.display()))?;

        Self::from_table(&cfg)
    }

    pub fn from_table(cfg: &toml::Table) -> Result<Self> {
        let mut config = Self::default();

        let data = match cfg.get("data") {
            None => return Ok(config),
            Some(data) => data
                .as_table()
                .ok_or(anyhow::anyhow!("[data] must be a table"))?,
        };

        if let Some(dir) = string_key(data, "dir")? {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = string_key(data, "pokemon")? {
            config.pokemon_file = file;
        }
        if let Some(file) = string_key(data, "moves")? {
            config.moves_file = file;
        }
        if let Some(file) = string_key(data, "natures")? {
            config.natures_file = file;
        }
        if let Some(file) = string_key(data, "variants")? {
            config.variants_file = file;
        }

        Ok(config)
    }

    /// Points every file at `dir`, keeping the file names
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn pokemon_path(&self) -> PathBuf {
        self.data_dir.join(&self.pokemon_file)
    }

    pub fn moves_path(&self) -> PathBuf {
        self.data_dir.join(&self.moves_file)
    }

    pub fn natures_path(&self) -> PathBuf {
        self.data_dir.join(&self.natures_file)
    }

    pub fn variants_path(&self) -> PathBuf {
        self.data_dir.join(&self.variants_file)
    }
}
