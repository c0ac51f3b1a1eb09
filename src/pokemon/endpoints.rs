use log::info;
use rocket::State;

use crate::{
    dex::Dex,
    json::{JsonResult, JsonStatus},
};

/// Endpoint for getting a list of all Pokemon, regional variants included.
#[get("/pokemon")]
pub async fn get_pokemon<'a>(dex: &'a State<Dex>) -> JsonResult<'a> {
    info!("Request to /api/pokemon");
    Ok(JsonStatus::data_owned(dex.all_pokemon().to_vec()))
}

/// Endpoint for getting a Pokemon by its national dex number.
#[get("/pokemon/number/<pokedex_number>")]
pub async fn get_pokemon_by_number<'a>(dex: &'a State<Dex>, pokedex_number: &str) -> JsonResult<'a> {
    info!("Request to /api/pokemon/number/{}", pokedex_number);

    match dex.pokemon_by_number(pokedex_number) {
        Some(pokemon) => Ok(JsonStatus::data_ref(pokemon)),
        None => Err(JsonStatus::not_found("Pokemon not found")),
    }
}

/// Endpoint for getting a Pokemon by name, ignoring case.
#[get("/pokemon/name/<name>")]
pub async fn get_pokemon_by_name<'a>(dex: &'a State<Dex>, name: &str) -> JsonResult<'a> {
    info!("Request to /api/pokemon/name/{}", name);

    match dex.pokemon_by_name(name) {
        Some(pokemon) => Ok(JsonStatus::data_ref(pokemon)),
        None => Err(JsonStatus::not_found("Pokemon not found")),
    }
}

/// Endpoint for getting the regional variants only.
#[get("/variants")]
pub async fn get_variants<'a>(dex: &'a State<Dex>) -> JsonResult<'a> {
    info!("Request to /api/variants");
    Ok(JsonStatus::data_owned(dex.variants().to_vec()))
}
