use std::collections::BTreeMap;

use log::info;

use super::{KeyValueStore, StoreError, load_json, save_json};
use crate::team::Team;

pub const SAVED_TEAMS_KEY: &str = "savedTeams";

/// Teams saved under user-chosen names
pub struct SavedTeams<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SavedTeams<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&mut self) -> Result<BTreeMap<String, Team>, StoreError> {
        Ok(load_json(&mut self.store, SAVED_TEAMS_KEY)?.unwrap_or_default())
    }

    /// Stores `team` under `name`, replacing any team saved with that name
    pub fn save_team(&mut self, name: &str, team: &Team) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if team.is_empty() {
            return Err(StoreError::EmptyTeam);
        }

        let mut teams = self.read()?;
        teams.insert(name.to_string(), team.clone());
        save_json(&mut self.store, SAVED_TEAMS_KEY, &teams)?;

        info!("Saved team {} with {} members", name, team.len());
        Ok(())
    }

    pub fn load_team(&mut self, name: &str) -> Result<Option<Team>, StoreError> {
        Ok(self.read()?.remove(name.trim()))
    }

    /// Returns whether a team by that name existed
    pub fn delete_team(&mut self, name: &str) -> Result<bool, StoreError> {
        let mut teams = self.read()?;
        if teams.remove(name.trim()).is_none() {
            return Ok(false);
        }

        save_json(&mut self.store, SAVED_TEAMS_KEY, &teams)?;
        Ok(true)
    }

    /// Names of every saved team, sorted
    pub fn names(&mut self) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.into_keys().collect())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
