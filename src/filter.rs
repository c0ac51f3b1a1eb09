//! Search and filter predicates over the pokemon and move lists.
//!
//! Every dimension is a set: an empty set lets everything through, a
//! non-empty one keeps entries matching any member. Dimensions are combined
//! with AND, and the input order is always preserved.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    moves::Move,
    pokemon::{Pokemon, form::FormKind},
};

/// The filter panel of the pokedex view
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PokemonFilters {
    /// Matched against names (ignoring case) and dex numbers
    pub search: String,
    pub generations: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub egg_groups: BTreeSet<String>,
    pub show_mega: bool,
    pub show_regional_variants: bool,
    pub show_gigantamax: bool,
}

/// Adds the value if absent, removes it if present
fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

impl PokemonFilters {
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        self.matches_search(pokemon)
            && (self.generations.is_empty() || self.generations.contains(&pokemon.generation))
            && (self.types.is_empty() || pokemon.types().any(|t| self.types.contains(t)))
            && (self.egg_groups.is_empty()
                || pokemon.egg_groups().any(|g| self.egg_groups.contains(g)))
            && self.shows_form(pokemon.form)
    }

    fn matches_search(&self, pokemon: &Pokemon) -> bool {
        let query = self.search.trim();
        if query.is_empty() {
            return true;
        }

        pokemon
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || pokemon.pokedex_number.contains(query)
    }

    fn shows_form(&self, form: FormKind) -> bool {
        match form {
            FormKind::Base => true,
            FormKind::Mega => self.show_mega,
            FormKind::Gigantamax => self.show_gigantamax,
            FormKind::Regional => self.show_regional_variants,
        }
    }

    /// The entries that pass every active filter, in their original order
    pub fn apply<'a>(&self, pokemon: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        pokemon.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn toggle_generation(&mut self, generation: &str) {
        toggle(&mut self.generations, generation);
    }

    pub fn toggle_type(&mut self, ty: &str) {
        toggle(&mut self.types, ty);
    }

    pub fn toggle_egg_group(&mut self, group: &str) {
        toggle(&mut self.egg_groups, group);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Short tags describing what is currently filtered, for display
    pub fn active_filters(&self) -> Vec<String> {
        let mut active = Vec::new();

        if !self.search.trim().is_empty() {
            active.push("search".to_string());
        }
        active.extend(self.generations.iter().map(|g| format!("generation-{}", g)));
        active.extend(self.types.iter().map(|t| format!("type-{}", t)));
        active.extend(self.egg_groups.iter().map(|g| format!("eggGroup-{}", g)));

        if !self.show_mega {
            active.push("hideMega".to_string());
        }
        if !self.show_regional_variants {
            active.push("hideRegionalVariants".to_string());
        }
        if !self.show_gigantamax {
            active.push("hideGigantamax".to_string());
        }

        active
    }
}

/// The filter bar of the move list
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveFilters {
    pub search: String,
    pub move_type: Option<String>,
    pub category: Option<String>,
}

impl MoveFilters {
    pub fn matches(&self, mv: &Move) -> bool {
        let query = self.search.trim().to_lowercase();

        mv.name.to_lowercase().contains(&query)
            && self.move_type.as_ref().is_none_or(|t| &mv.move_type == t)
            && self.category.as_ref().is_none_or(|c| &mv.category == c)
    }

    pub fn apply<'a>(&self, moves: &'a [Move]) -> Vec<&'a Move> {
        moves.iter().filter(|m| self.matches(m)).collect()
    }
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Generations present in the list, sorted
pub fn generations(pokemon: &[Pokemon]) -> Vec<String> {
    sorted_distinct(pokemon.iter().map(|p| p.generation.as_str()))
}

/// Primary and secondary types present in the list, sorted
pub fn pokemon_types(pokemon: &[Pokemon]) -> Vec<String> {
    sorted_distinct(pokemon.iter().flat_map(Pokemon::types))
}

/// Move types present in the list, sorted
pub fn move_types(moves: &[Move]) -> Vec<String> {
    sorted_distinct(moves.iter().map(|m| m.move_type.as_str()))
}

/// Move categories present in the list, sorted
pub fn move_categories(moves: &[Move]) -> Vec<String> {
    sorted_distinct(moves.iter().map(|m| m.category.as_str()))
}
