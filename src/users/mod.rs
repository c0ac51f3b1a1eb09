/// User favorites HTTP endpoints module
pub mod endpoints;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Server-side favorites, keyed by user id.
///
/// Best effort only: records live in memory for the lifetime of the process.
/// Browsers keep their own copy in local storage.
#[derive(Default)]
pub struct UserFavorites {
    records: RwLock<HashMap<u32, Vec<String>>>,
}

impl UserFavorites {
    /// Replaces the user's favorites, creating the record if needed
    pub async fn replace(&self, user_id: u32, favorites: Vec<String>) -> Vec<String> {
        let mut records = self.records.write().await;
        records.insert(user_id, favorites.clone());
        favorites
    }

    pub async fn get(&self, user_id: u32) -> Option<Vec<String>> {
        self.records.read().await.get(&user_id).cloned()
    }
}

/// Body of `POST /api/favorites`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesUpdate {
    pub user_id: u32,
    pub favorites: Vec<String>,
}

/// Response of `POST /api/favorites`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FavoritesBody {
    pub favorites: Vec<String>,
}
