//! Route table and catchers.

mod health;
mod notes;
mod openapi;

use crate::error::MessageBody;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, Route};

/// Every route served by the notes API, the Swagger UI included.
pub(crate) fn routes() -> Vec<Route> {
    let mut routes = rocket::routes![
        health::health,
        notes::create_note,
        notes::list_notes,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        openapi::openapi_document,
    ];
    routes.extend(openapi::swagger_ui());
    routes
}

/// Catchers producing `{"detail": <reason>}` bodies.
pub(crate) fn catchers() -> Vec<Catcher> {
    rocket::catchers![default_catcher]
}

#[rocket::catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<MessageBody>) {
    (status, Json(MessageBody::new(status.reason_lossy())))
}
