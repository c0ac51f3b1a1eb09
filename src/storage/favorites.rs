use std::collections::BTreeSet;

use super::{KeyValueStore, StoreError, load_json, save_json};

pub const FAVORITES_KEY: &str = "pokemonFavorites";

/// The user's favorite Pokemon, by name
pub struct Favorites<S: KeyValueStore> {
    store: S,
    names: BTreeSet<String>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Reads the saved set. Corrupt data is cleared and yields an empty set.
    pub fn load(mut store: S) -> Result<Self, StoreError> {
        let names = load_json::<_, Vec<String>>(&mut store, FAVORITES_KEY)?
            .unwrap_or_default()
            .into_iter()
            .collect();

        Ok(Self { store, names })
    }

    /// Flips membership of `name` and persists the change.
    ///
    /// Returns whether `name` is a favorite afterwards. The set is only
    /// changed once the store has accepted the write.
    pub fn toggle(&mut self, name: &str) -> Result<bool, StoreError> {
        let mut names = self.names.clone();
        let now_favorite = if names.remove(name) {
            false
        } else {
            names.insert(name.to_string());
            true
        };

        persist(&mut self.store, &names)?;
        self.names = names;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn save(&mut self) -> Result<(), StoreError> {
        persist(&mut self.store, &self.names)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn persist<S: KeyValueStore>(store: &mut S, names: &BTreeSet<String>) -> Result<(), StoreError> {
    let names: Vec<&String> = names.iter().collect();
    save_json(store, FAVORITES_KEY, &names)
}
