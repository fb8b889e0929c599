//! HTTP boundary for the notes service.
//!
//! Maps the JSON CRUD routes onto [`NotesRepository`] calls, turns validation
//! and lookup outcomes into status codes, and applies the configured CORS
//! policy. The repository handle is injected by the caller; nothing here owns
//! global state.

mod cors;
mod error;
mod payload;
mod routes;

pub use error::{ApiError, ErrorDetail, MessageBody, ServerError, ValidationBody};

use log::info;
use notes_rs_config::NotesConfig;
use notes_rs_core::NotesRepository;
use rocket::{Build, Rocket};

/// Assemble the Rocket instance serving the notes API.
///
/// Listener settings come from `config.server`; Rocket's own logger is turned
/// off so that records flow through whichever `log` backend the binary set up.
pub fn build_rocket(
    config: NotesConfig,
    repository: NotesRepository,
) -> Result<Rocket<Build>, ServerError> {
    info!(
        "building notes server (address={}, port={}, origins={})",
        config.server.address,
        config.server.port,
        config.cors.allowed_origins.join(",")
    );
    let cors = cors::cors_fairing(&config.cors)?;
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port))
        .merge(("log_level", "off"));

    Ok(rocket::custom(figment)
        .attach(cors)
        .manage(repository)
        .manage(config)
        .mount("/", routes::routes())
        .register("/", routes::catchers()))
}
