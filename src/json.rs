use erased_serde::Serialize as EraSerialize;
use log::{error, info};
use rocket::http::Status;
use rocket::response::Responder;
use rocket::response::content::RawJson;
use rocket::response::status::Custom;
use serde::Serialize;

/// Body sent with every failed request
#[derive(Serialize)]
struct Message {
    message: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Data<'a> {
    Owned(Box<dyn EraSerialize + Send + Sync + 'static>),
    Ref(&'a (dyn EraSerialize + Sync)),
}

/// A JSON body together with the HTTP status it is sent with.
///
/// Successful responses carry the entity itself, errors carry
/// `{"message": "..."}`.
pub struct JsonStatus<'a> {
    status: Status,
    data: Data<'a>,
}

/// Sent when the response itself cannot be produced
const SERIALIZATION_FAILURE: &str = r#"{"message":"Failed to serialize response"}"#;

impl JsonStatus<'_> {
    pub fn status(&self) -> Status {
        self.status
    }

    /// The body as it will be sent
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }
}

pub type JsonResult<'a> = Result<JsonStatus<'a>, JsonStatus<'static>>;

impl JsonStatus<'static> {
    pub fn new_owned(status: Status, data: impl EraSerialize + Send + Sync + 'static) -> Self {
        JsonStatus {
            status,
            data: Data::Owned(Box::new(data)),
        }
    }

    pub fn message<T: ToString>(status: Status, message: T) -> Self {
        JsonStatus::new_owned(
            status,
            Message {
                message: message.to_string(),
            },
        )
    }

    /// 404 with the given message
    pub fn not_found<T: ToString>(message: T) -> Self {
        info!("Lookup failed: {}", message.to_string());
        JsonStatus::message(Status::NotFound, message)
    }

    /// 400 with the given message
    pub fn bad_request<T: ToString>(message: T) -> Self {
        info!("Rejected request: {}", message.to_string());
        JsonStatus::message(Status::BadRequest, message)
    }

    /// 500 with a generic message; the details only go to the log
    pub fn internal<T: ToString>(message: T) -> Self {
        JsonStatus::message(Status::InternalServerError, message)
    }

    pub fn data_owned(data: impl EraSerialize + Send + Sync + 'static) -> Self {
        JsonStatus::new_owned(Status::Ok, data)
    }

    pub fn from_anyhow(error: anyhow::Error) -> Self {
        error!("Error while running request: {:#}", error);
        JsonStatus::internal("Internal server error")
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for JsonStatus<'o> {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let response = match self.to_json() {
            Ok(body) => Custom(self.status, RawJson(body)),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                Custom(
                    Status::InternalServerError,
                    RawJson(SERIALIZATION_FAILURE.to_string()),
                )
            }
        };
        response.respond_to(request)
    }
}

impl<'a> JsonStatus<'a> {
    pub fn new_ref(status: Status, data: &'a (dyn EraSerialize + Sync)) -> Self {
        JsonStatus {
            status,
            data: Data::Ref(data),
        }
    }

    pub fn data_ref<T: EraSerialize + Sync>(data: &'a T) -> Self {
        JsonStatus::new_ref(Status::Ok, data)
    }
}
