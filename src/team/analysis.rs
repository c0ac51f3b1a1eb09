use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pokemon::{Pokemon, ptype::PokemonType};

/// Aggregate defensive profile of a team
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    /// Members weak to each incoming type
    pub weaknesses: BTreeMap<PokemonType, u32>,
    /// Members resisting each incoming type
    pub resistances: BTreeMap<PokemonType, u32>,
    /// Incoming types at least one member is immune to, in discovery order
    pub immunities: Vec<PokemonType>,
    /// How many members carry each type
    pub types: BTreeMap<String, u32>,
}

impl TeamAnalysis {
    pub fn weakness_count(&self, ty: PokemonType) -> u32 {
        self.weaknesses.get(&ty).copied().unwrap_or(0)
    }

    pub fn resistance_count(&self, ty: PokemonType) -> u32 {
        self.resistances.get(&ty).copied().unwrap_or(0)
    }

    pub fn is_immune_to(&self, ty: PokemonType) -> bool {
        self.immunities.contains(&ty)
    }

    fn add_member(&mut self, pokemon: &Pokemon) {
        for ty in pokemon.types() {
            *self.types.entry(ty.to_string()).or_default() += 1;
        }

        // Strings outside the chart take no part in the matchup math
        let primary = pokemon.primary_type.parse::<PokemonType>().ok();
        let secondary = pokemon
            .secondary_type
            .as_deref()
            .and_then(|t| t.parse::<PokemonType>().ok());

        for (own, other) in [(primary, secondary), (secondary, primary)] {
            let Some(own) = own else { continue };
            let own = own.matchup();
            let other = other.map(|t| t.matchup());

            for incoming in own.weak_to {
                let cancelled = other.is_some_and(|o| {
                    o.resistant_to.contains(incoming) || o.immune_to.contains(incoming)
                });
                if !cancelled {
                    *self.weaknesses.entry(*incoming).or_default() += 1;
                }
            }

            for incoming in own.resistant_to {
                let cancelled = other.is_some_and(|o| o.weak_to.contains(incoming));
                if !cancelled {
                    *self.resistances.entry(*incoming).or_default() += 1;
                }
            }

            for incoming in own.immune_to {
                if !self.immunities.contains(incoming) {
                    self.immunities.push(*incoming);
                }
            }
        }
    }
}

/// Tallies weaknesses, resistances, immunities and type membership.
///
/// A weakness of one type is cancelled when the member's other type resists
/// or is immune to the same attack. A resistance is cancelled when the other
/// type is weak to it.
pub fn analyze_team<'a>(members: impl IntoIterator<Item = &'a Pokemon>) -> TeamAnalysis {
    let mut analysis = TeamAnalysis::default();
    for pokemon in members {
        analysis.add_member(pokemon);
    }
    analysis
}
