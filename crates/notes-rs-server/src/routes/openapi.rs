//! OpenAPI document derived from the route annotations, plus the Swagger UI.

use super::{health, notes};
use crate::error::{ErrorDetail, MessageBody, ValidationBody};
use notes_rs_config::{AppConfig, NotesConfig};
use notes_rs_core::{Note, NoteCreate, NoteUpdate};
use rocket::serde::json::Json;
use rocket::{Route, State};
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa_swagger_ui::{Config, SwaggerUi};

/// Path the derived document is served from.
pub(crate) const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        notes::create_note,
        notes::list_notes,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
    ),
    components(schemas(
        Note,
        NoteCreate,
        NoteUpdate,
        health::HealthStatus,
        MessageBody,
        ValidationBody,
        ErrorDetail,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Notes", description = "CRUD operations for notes")
    )
)]
struct ApiDoc;

/// Derived document with title, description and version taken from `app`.
pub(crate) fn document(app: &AppConfig) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.info.title = app.name.clone();
    doc.info.description = Some(app.description.clone());
    doc.info.version = app.version.clone();
    doc
}

#[rocket::get("/openapi.json")]
pub(crate) fn openapi_document(config: &State<NotesConfig>) -> Json<OpenApiDocument> {
    Json(document(&config.app))
}

/// Swagger UI under `/docs`, reading the document from [`OPENAPI_PATH`].
pub(crate) fn swagger_ui() -> Vec<Route> {
    SwaggerUi::new("/docs/<_..>").config(Config::new([OPENAPI_PATH])).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_rs_core::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn document_json(app: &AppConfig) -> Value {
        serde_json::to_value(document(app)).expect("serialize document")
    }

    #[test]
    fn info_block_follows_app_config() {
        let app = AppConfig {
            name: "Scratchpad".to_string(),
            description: "Team notes".to_string(),
            version: "2.3.4".to_string(),
        };
        let doc = document_json(&app);
        assert_eq!(doc["info"]["title"], "Scratchpad");
        assert_eq!(doc["info"]["description"], "Team notes");
        assert_eq!(doc["info"]["version"], "2.3.4");
    }

    #[test]
    fn every_route_is_described() {
        let doc = document_json(&AppConfig::default());
        let paths = &doc["paths"];
        for method in ["get", "put", "delete"] {
            assert!(paths["/notes/{note_id}"][method].is_object(), "{method}");
        }
        assert!(paths["/notes"]["get"].is_object());
        assert!(paths["/notes"]["post"].is_object());
        assert!(paths["/health"]["get"].is_object());
        let tags: Vec<_> = doc["tags"]
            .as_array()
            .expect("tags")
            .iter()
            .filter_map(|tag| tag["name"].as_str())
            .collect();
        assert_eq!(tags, vec!["Health", "Notes"]);
    }

    #[test]
    fn field_limits_come_from_validation() {
        let doc = document_json(&AppConfig::default());
        let note = &doc["components"]["schemas"]["NoteCreate"]["properties"];
        assert_eq!(note["title"]["maxLength"], TITLE_MAX_CHARS);
        assert_eq!(note["content"]["maxLength"], CONTENT_MAX_CHARS);
    }
}
