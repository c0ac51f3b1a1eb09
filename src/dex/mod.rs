/// Reading and normalizing the dataset files
pub mod loader;

use std::collections::HashMap;

use anyhow::Result;

use crate::{
    config::DexConfig,
    moves::Move,
    nature::Nature,
    pokemon::{Pokemon, form::FormKind},
};

use loader::DexData;

/// Read-only view over the loaded dataset.
///
/// Built once before the server launches and shared with every request
/// handler through Rocket's managed state. Nothing mutates it afterwards.
pub struct Dex {
    /// National dex entries followed by regional variants
    pokemon: Vec<Pokemon>,
    variants: Vec<Pokemon>,
    moves: Vec<Move>,
    natures: Vec<Nature>,

    by_name: HashMap<String, usize>,
    by_number: HashMap<String, usize>,
    moves_by_name: HashMap<String, usize>,
}

/// Maps each key to the position of its first occurrence
fn first_index<'a>(keys: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (position, key) in keys.enumerate() {
        index.entry(key.to_string()).or_insert(position);
    }
    index
}

impl Dex {
    /// Loads the dataset files named by the config
    pub fn load(config: &DexConfig) -> Result<Self> {
        Ok(Self::from_data(loader::load(config)?))
    }

    pub fn from_data(data: DexData) -> Self {
        let DexData {
            mut pokemon,
            variants,
            moves,
            natures,
        } = data;

        pokemon.extend(variants.iter().cloned());

        let names: Vec<String> = pokemon.iter().map(|p| p.name.to_lowercase()).collect();
        let by_name = first_index(names.iter().map(String::as_str));
        let by_number = first_index(pokemon.iter().map(|p| p.pokedex_number.as_str()));

        let move_names: Vec<String> = moves.iter().map(|m| m.name.to_lowercase()).collect();
        let moves_by_name = first_index(move_names.iter().map(String::as_str));

        Self {
            pokemon,
            variants,
            moves,
            natures,
            by_name,
            by_number,
            moves_by_name,
        }
    }

    /// Every Pokemon, regional variants included
    pub fn all_pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn pokemon_by_number(&self, pokedex_number: &str) -> Option<&Pokemon> {
        self.by_number
            .get(pokedex_number.trim())
            .map(|&i| &self.pokemon[i])
    }

    /// Case-insensitive
    pub fn pokemon_by_name(&self, name: &str) -> Option<&Pokemon> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.pokemon[i])
    }

    pub fn variants(&self) -> &[Pokemon] {
        &self.variants
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Case-insensitive
    pub fn move_by_name(&self, name: &str) -> Option<&Move> {
        self.moves_by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.moves[i])
    }

    pub fn natures(&self) -> &[Nature] {
        &self.natures
    }

    /// Case-insensitive
    pub fn nature_by_name(&self, name: &str) -> Option<&Nature> {
        Nature::find(&self.natures, name)
    }

    pub fn mega_evolutions_of(&self, base_name: &str) -> Vec<&Pokemon> {
        self.forms_of(base_name, FormKind::Mega)
    }

    pub fn regional_variants_of(&self, base_name: &str) -> Vec<&Pokemon> {
        self.forms_of(base_name, FormKind::Regional)
    }

    pub fn gigantamax_forms_of(&self, base_name: &str) -> Vec<&Pokemon> {
        self.forms_of(base_name, FormKind::Gigantamax)
    }

    /// Entries whose name contains "<marker> <base name>", e.g. "Mega Charizard X"
    fn forms_of(&self, base_name: &str, form: FormKind) -> Vec<&Pokemon> {
        let needles: Vec<String> = form
            .markers()
            .iter()
            .map(|marker| format!("{} {}", marker, base_name))
            .collect();

        self.pokemon
            .iter()
            .filter(|p| p.form == form && needles.iter().any(|n| p.name.contains(n.as_str())))
            .collect()
    }

    pub fn by_generation(&self, generation: &str) -> Vec<&Pokemon> {
        self.pokemon
            .iter()
            .filter(|p| p.generation == generation)
            .collect()
    }

    /// Pokemon with the type as either their primary or secondary type
    pub fn by_type(&self, ty: &str) -> Vec<&Pokemon> {
        self.pokemon.iter().filter(|p| p.has_type(ty)).collect()
    }

    pub fn by_egg_group(&self, group: &str) -> Vec<&Pokemon> {
        self.pokemon.iter().filter(|p| p.in_egg_group(group)).collect()
    }

    /// Pokemon that can have the ability, hidden abilities included
    pub fn with_ability(&self, ability: &str) -> Vec<&Pokemon> {
        self.pokemon.iter().filter(|p| p.has_ability(ability)).collect()
    }
}
