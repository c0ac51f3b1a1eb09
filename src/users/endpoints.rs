use log::info;
use rocket::State;
use rocket::serde::json::{Error as JsonError, Json};

use crate::{
    json::{JsonResult, JsonStatus},
    users::{FavoritesBody, FavoritesUpdate, UserFavorites},
};

/// Endpoint for storing a user's favorite Pokemon.
#[post("/favorites", data = "<update>")]
pub async fn update_favorites(
    users: &State<UserFavorites>,
    update: Result<Json<FavoritesUpdate>, JsonError<'_>>,
) -> JsonResult<'static> {
    info!("Request to /api/favorites");

    let update = match update {
        Ok(update) => update.into_inner(),
        Err(e) => {
            info!("Malformed favorites payload: {}", e);
            return Err(JsonStatus::bad_request("Invalid favorites payload"));
        }
    };

    let favorites = users.replace(update.user_id, update.favorites).await;
    Ok(JsonStatus::data_owned(FavoritesBody { favorites }))
}
