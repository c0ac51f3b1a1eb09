/// Team type coverage analysis
pub mod analysis;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokemon::Pokemon;
use analysis::{TeamAnalysis, analyze_team};

pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamError {
    #[error("team already has {MAX_TEAM_SIZE} members")]
    Full,

    #[error("{0} is already on the team")]
    Duplicate(String),
}

/// A team member and the slot it occupies, 1-based
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub pokemon: Pokemon,
    pub slot: u8,
}

/// An ordered team of up to six distinct Pokemon
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Team {
    members: Vec<TeamMember>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member and returns the slot it was given.
    ///
    /// Pokemon are told apart by `id`, so two forms of the same species can
    /// share a team.
    pub fn add(&mut self, pokemon: Pokemon) -> Result<u8, TeamError> {
        if self.members.len() >= MAX_TEAM_SIZE {
            return Err(TeamError::Full);
        }
        if self.members.iter().any(|m| m.pokemon.id == pokemon.id) {
            return Err(TeamError::Duplicate(pokemon.name));
        }

        let slot = self.members.len() as u8 + 1;
        debug!("Adding {} to team slot {}", pokemon.name, slot);
        self.members.push(TeamMember { pokemon, slot });
        Ok(slot)
    }

    /// Removes the member in `slot` and closes the gap
    pub fn remove(&mut self, slot: u8) -> Option<Pokemon> {
        let index = self.members.iter().position(|m| m.slot == slot)?;
        let removed = self.members.remove(index);

        for (i, member) in self.members.iter_mut().enumerate() {
            member.slot = i as u8 + 1;
        }

        Some(removed.pokemon)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    pub fn analyze(&self) -> TeamAnalysis {
        analyze_team(self.members.iter().map(|m| &m.pokemon))
    }
}
