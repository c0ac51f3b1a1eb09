use anyhow::Context;
use log::{error, info};
use rocket::http::Method;
use rocket::{Build, Request, Rocket, State};
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};
use serde::{Deserialize, Serialize};

#[macro_use]
extern crate rocket;

/// Stat calculator module
pub mod calculator;

/// Async HTTP client for the API
pub mod client;

/// config.toml handling
pub mod config;

/// Loaded dataset and lookups
pub mod dex;

/// Pokemon and move list filters
pub mod filter;

/// JSON response handling
pub mod json;

/// Move module
pub mod moves;

/// Nature module
pub mod nature;

/// Pokemon module
pub mod pokemon;

/// Favorites and saved teams persistence
pub mod storage;

/// Team builder module
pub mod team;

/// Server-side user favorites
pub mod users;

#[cfg(test)]
mod tests;

use dex::Dex;
use json::{JsonResult, JsonStatus};
use users::UserFavorites;

pub fn make_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = [Method::Get, Method::Post]
        .into_iter()
        .map(From::from)
        .collect();

    CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

/// Builds the server around an already loaded dex
pub fn build_rocket(dex: Dex) -> anyhow::Result<Rocket<Build>> {
    let cors = make_cors()
        .to_cors()
        .context("Error creating CORS fairing")?;

    Ok(rocket::build()
        .attach(cors)
        .manage(dex)
        .manage(UserFavorites::default())
        .mount(
            "/api",
            routes![
                index,
                pokemon::endpoints::get_pokemon,
                pokemon::endpoints::get_pokemon_by_number,
                pokemon::endpoints::get_pokemon_by_name,
                pokemon::endpoints::get_variants,
                moves::endpoints::get_moves,
                moves::endpoints::get_move,
                nature::endpoints::get_natures,
                users::endpoints::update_favorites,
            ],
        )
        .register("/", catchers![not_found, internal_error]))
}

/// Sizes of the loaded collections
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DexSummary {
    pub pokemon: usize,
    pub variants: usize,
    pub moves: usize,
    pub natures: usize,
}

#[get("/")]
pub async fn index(dex: &State<Dex>) -> JsonResult<'static> {
    info!("Request to /api");
    Ok(JsonStatus::data_owned(DexSummary {
        pokemon: dex.all_pokemon().len(),
        variants: dex.variants().len(),
        moves: dex.moves().len(),
        natures: dex.natures().len(),
    }))
}

#[catch(404)]
fn not_found() -> JsonStatus<'static> {
    JsonStatus::message(rocket::http::Status::NotFound, "Not found")
}

#[catch(500)]
fn internal_error(request: &Request) -> JsonStatus<'static> {
    error!("Internal error while handling {} {}", request.method(), request.uri());
    JsonStatus::internal("Internal server error")
}
