//! Async HTTP client for the pokedex API.
//!
//! Every resource is tracked as its own [`Query`], so a failing move list
//! never hides a loaded pokemon list.

use log::{info, warn};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{
    moves::Move,
    nature::Nature,
    pokemon::Pokemon,
    users::{FavoritesBody, FavoritesUpdate},
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("api returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

/// Loading state of one remote resource
#[derive(Clone, Debug, PartialEq)]
pub enum Query<T> {
    Loading,
    Ready(T),
    Failed { message: String, dismissed: bool },
}

impl<T> Query<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Query::Ready(value),
            Err(e) => {
                warn!("Request failed: {}", e);
                Query::Failed {
                    message: e.to_string(),
                    dismissed: false,
                }
            }
        }
    }

    /// Hides the error banner; the failure itself is kept
    pub fn dismiss(&mut self) {
        if let Query::Failed { dismissed, .. } = self {
            *dismissed = true;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Query::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Query::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, unless it was dismissed
    pub fn error(&self) -> Option<&str> {
        match self {
            Query::Failed {
                message,
                dismissed: false,
            } => Some(message),
            _ => None,
        }
    }
}

/// Everything the pokedex view needs on startup
#[derive(Clone, Debug, PartialEq)]
pub struct DexSnapshot {
    pub pokemon: Query<Vec<Pokemon>>,
    pub moves: Query<Vec<Move>>,
    pub natures: Query<Vec<Nature>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct DexClient {
    http: reqwest::Client,
    base: Url,
}

impl DexClient {
    /// `base` points at the API root, e.g. `http://localhost:8000/api`
    pub fn new(base: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Appends percent-encoded path segments to the base url
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, ClientError> {
        let url = self.endpoint(segments)?;
        info!("GET {}", url);

        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(api_error(status, response).await),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, ClientError> {
        let url = self.endpoint(segments)?;
        info!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }
        Ok(response.json().await?)
    }

    pub async fn pokemon(&self) -> Result<Vec<Pokemon>, ClientError> {
        self.fetch_list(&["pokemon"]).await
    }

    pub async fn pokemon_by_number(&self, pokedex_number: &str) -> Result<Option<Pokemon>, ClientError> {
        self.fetch(&["pokemon", "number", pokedex_number]).await
    }

    pub async fn pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, ClientError> {
        self.fetch(&["pokemon", "name", name]).await
    }

    pub async fn variants(&self) -> Result<Vec<Pokemon>, ClientError> {
        self.fetch_list(&["variants"]).await
    }

    pub async fn moves(&self) -> Result<Vec<Move>, ClientError> {
        self.fetch_list(&["moves"]).await
    }

    pub async fn move_by_name(&self, name: &str) -> Result<Option<Move>, ClientError> {
        self.fetch(&["moves", name]).await
    }

    pub async fn natures(&self) -> Result<Vec<Nature>, ClientError> {
        self.fetch_list(&["natures"]).await
    }

    /// Sends the user's favorites and returns what the server stored
    pub async fn post_favorites(&self, user_id: u32, favorites: Vec<String>) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["favorites"])?;
        info!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(&FavoritesUpdate { user_id, favorites })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }
        let body: FavoritesBody = response.json().await?;
        Ok(body.favorites)
    }

    /// Fetches pokemon, moves and natures concurrently
    pub async fn load_dex(&self) -> DexSnapshot {
        let (pokemon, moves, natures) = futures::join!(self.pokemon(), self.moves(), self.natures());

        DexSnapshot {
            pokemon: Query::from_result(pokemon),
            moves: Query::from_result(moves),
            natures: Query::from_result(natures),
        }
    }
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> ClientError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    };
    ClientError::Api { status, message }
}
