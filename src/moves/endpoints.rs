use log::info;
use rocket::State;

use crate::{
    dex::Dex,
    json::{JsonResult, JsonStatus},
};

/// Endpoint for getting a list of all moves.
#[get("/moves")]
pub async fn get_moves<'a>(dex: &'a State<Dex>) -> JsonResult<'a> {
    info!("Request to /api/moves");
    Ok(JsonStatus::data_owned(dex.moves().to_vec()))
}

/// Endpoint for getting a single move by name, ignoring case.
#[get("/moves/<name>")]
pub async fn get_move<'a>(dex: &'a State<Dex>, name: &str) -> JsonResult<'a> {
    info!("Request to /api/moves/{}", name);

    match dex.move_by_name(name) {
        Some(mv) => Ok(JsonStatus::data_ref(mv)),
        None => Err(JsonStatus::not_found("Move not found")),
    }
}
