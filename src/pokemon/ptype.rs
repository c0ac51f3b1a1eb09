use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an elemental type of Pokemon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// How a single type fares against incoming attacks of other types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeMatchup {
    /// Incoming types that deal double damage
    pub weak_to: &'static [PokemonType],

    /// Incoming types that deal half damage
    pub resistant_to: &'static [PokemonType],

    /// Incoming types that deal no damage
    pub immune_to: &'static [PokemonType],
}

/// Returned when a type name is not one of the eighteen known types
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pokemon type: {0}")]
pub struct UnknownType(pub String);

use PokemonType::*;

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground, Flying, Psychic, Bug,
        Rock, Ghost, Dragon, Dark, Steel, Fairy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Normal => "Normal",
            Fire => "Fire",
            Water => "Water",
            Electric => "Electric",
            Grass => "Grass",
            Ice => "Ice",
            Fighting => "Fighting",
            Poison => "Poison",
            Ground => "Ground",
            Flying => "Flying",
            Psychic => "Psychic",
            Bug => "Bug",
            Rock => "Rock",
            Ghost => "Ghost",
            Dragon => "Dragon",
            Dark => "Dark",
            Steel => "Steel",
            Fairy => "Fairy",
        }
    }

    /// Defensive matchups used by the team analyzer.
    ///
    /// This is the simplified chart the team builder has always shipped with.
    /// It is not a complete game chart and is intentionally left as-is.
    pub fn matchup(&self) -> TypeMatchup {
        let (weak_to, resistant_to, immune_to): (
            &'static [PokemonType],
            &'static [PokemonType],
            &'static [PokemonType],
        ) = match self {
            Normal => (&[Fighting], &[], &[Ghost]),
            Fire => (
                &[Water, Ground, Rock],
                &[Fire, Grass, Ice, Bug, Steel, Fairy],
                &[],
            ),
            Water => (&[Electric, Grass], &[Fire, Water, Ice, Steel], &[]),
            Electric => (&[Ground], &[Electric, Flying, Steel], &[]),
            Grass => (
                &[Fire, Ice, Poison, Flying, Bug],
                &[Water, Electric, Grass, Ground],
                &[],
            ),
            Ice => (&[Fire, Fighting, Rock, Steel], &[Ice], &[]),
            Fighting => (&[Flying, Psychic, Fairy], &[Bug, Rock, Dark], &[]),
            Poison => (&[Ground, Psychic], &[Grass, Fighting, Poison, Bug, Fairy], &[]),
            Ground => (&[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
            Flying => (&[Electric, Ice, Rock], &[Grass, Fighting, Bug], &[Ground]),
            Psychic => (&[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
            Bug => (&[Fire, Flying, Rock], &[Grass, Fighting, Ground], &[]),
            Rock => (
                &[Water, Grass, Fighting, Ground, Steel],
                &[Normal, Fire, Poison, Flying],
                &[],
            ),
            Ghost => (&[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
            Dragon => (&[Ice, Dragon, Fairy], &[Fire, Water, Electric, Grass], &[]),
            Dark => (&[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
            Steel => (
                &[Fire, Fighting, Ground],
                &[
                    Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
                ],
                &[Poison],
            ),
            Fairy => (&[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
        };

        TypeMatchup {
            weak_to,
            resistant_to,
            immune_to,
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, surrounding whitespace ignored
impl FromStr for PokemonType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}
