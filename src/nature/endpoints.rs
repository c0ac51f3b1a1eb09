use log::info;
use rocket::State;

use crate::{
    dex::Dex,
    json::{JsonResult, JsonStatus},
};

/// Endpoint for getting a list of all natures.
#[get("/natures")]
pub async fn get_natures<'a>(dex: &'a State<Dex>) -> JsonResult<'a> {
    info!("Request to /api/natures");
    Ok(JsonStatus::data_owned(dex.natures().to_vec()))
}
