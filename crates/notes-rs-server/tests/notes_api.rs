//! End-to-end checks of the HTTP surface against an in-process client.

use chrono::Duration;
use notes_rs_config::{AppConfig, CorsConfig, NotesConfig};
use notes_rs_core::{Note, NotesRepository};
use notes_rs_server::build_rocket;
use notes_rs_test_utils::{ManualClock, seeded_repository};
use pretty_assertions::assert_eq;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::{Value, json};
use std::sync::Arc;

fn client_with(config: NotesConfig, repository: NotesRepository) -> Client {
    let rocket = build_rocket(config, repository).expect("server config");
    Client::tracked(rocket).expect("valid rocket instance")
}

fn client(clock: &ManualClock) -> Client {
    client_with(
        NotesConfig::default(),
        NotesRepository::with_clock(Arc::new(clock.clone())),
    )
}

fn post_note(client: &Client, body: Value) -> (Status, Value) {
    let response = client
        .post("/notes")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    let status = response.status();
    (status, response.into_json().expect("json body"))
}

fn detail_types(body: &Value) -> Vec<(String, String)> {
    body["detail"]
        .as_array()
        .expect("detail array")
        .iter()
        .map(|entry| {
            let field = entry["loc"]
                .as_array()
                .and_then(|loc| loc.last())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            (field, entry["type"].as_str().unwrap_or_default().to_string())
        })
        .collect()
}

#[test]
fn note_lifecycle() {
    let clock = ManualClock::new();
    let client = client(&clock);

    let response = client
        .post("/notes")
        .header(ContentType::JSON)
        .body(json!({ "title": "Groceries", "content": "Milk, eggs" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    let created: Note = response.into_json().expect("created note");
    assert_eq!(created.title.as_str(), "Groceries");
    assert_eq!(created.created_at, created.updated_at);

    clock.advance(Duration::seconds(5));
    let response = client
        .put(format!("/notes/{}", created.id))
        .header(ContentType::JSON)
        .body(json!({ "content": "Milk, eggs, bread" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated: Note = response.into_json().expect("updated note");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title.as_str(), "Groceries");
    assert_eq!(updated.content.as_str(), "Milk, eggs, bread");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);

    let response = client.delete(format!("/notes/{}", created.id)).dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let response = client.get(format!("/notes/{}", created.id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(
        response.into_json::<Value>().expect("json"),
        json!({ "detail": "Note not found" })
    );
}

#[test]
fn create_trims_and_points_location_at_the_note() {
    let client = client(&ManualClock::new());
    let response = client
        .post("/notes")
        .header(ContentType::JSON)
        .body(json!({ "title": "  Plan  ", "content": " steps " }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    let location = response.headers().get_one("Location").map(str::to_string);
    let note: Note = response.into_json().expect("note");
    assert_eq!(note.title.as_str(), "Plan");
    assert_eq!(note.content.as_str(), "steps");
    assert_eq!(location, Some(format!("/notes/{}", note.id)));
}

#[test]
fn create_reports_every_invalid_field() {
    let client = client(&ManualClock::new());

    let (status, body) = post_note(
        &client,
        json!({ "title": "   ", "content": "x".repeat(10_001) }),
    );
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(
        detail_types(&body),
        vec![
            ("title".to_string(), "string_too_short".to_string()),
            ("content".to_string(), "string_too_long".to_string()),
        ]
    );

    let (status, body) = post_note(&client, json!({ "title": "Only title" }));
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(
        detail_types(&body),
        vec![("content".to_string(), "missing".to_string())]
    );

    let (status, body) = post_note(&client, json!({ "title": 42, "content": "body" }));
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(
        detail_types(&body),
        vec![("title".to_string(), "string_type".to_string())]
    );
}

#[test]
fn boundary_lengths_are_accepted() {
    let client = client(&ManualClock::new());
    let (status, body) = post_note(
        &client,
        json!({ "title": "t".repeat(200), "content": "c".repeat(10_000) }),
    );
    assert_eq!(status, Status::Created);
    assert_eq!(body["title"].as_str().map(str::len), Some(200));

    let (status, _) = post_note(&client, json!({ "title": "t".repeat(201), "content": "c" }));
    assert_eq!(status, Status::UnprocessableEntity);
}

#[test]
fn malformed_json_is_unprocessable() {
    let client = client(&ManualClock::new());
    let response = client
        .post("/notes")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body: Value = response.into_json().expect("json");
    assert_eq!(body["detail"][0]["type"], "json_invalid");
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[test]
fn non_object_bodies_are_unprocessable() {
    let clock = ManualClock::new();
    let (repository, seeded) = seeded_repository(&clock, 1);
    let client = client_with(NotesConfig::default(), repository.clone());

    for body in [json!(["T", "C"]), json!("note"), json!(42)] {
        let (status, response) = post_note(&client, body);
        assert_eq!(status, Status::UnprocessableEntity);
        assert_eq!(response["detail"][0]["loc"], json!(["body"]));
        assert_eq!(response["detail"][0]["type"], "model_attributes_type");
    }

    let response = client
        .put(format!("/notes/{}", seeded[0].id))
        .header(ContentType::JSON)
        .body("[]")
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(repository.list(), seeded);
}

#[test]
fn list_preserves_insertion_order() {
    let clock = ManualClock::new();
    let (repository, seeded) = seeded_repository(&clock, 3);
    let client = client_with(NotesConfig::default(), repository);

    let response = client.get("/notes").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let listed: Vec<Note> = response.into_json().expect("notes");
    assert_eq!(listed, seeded);
}

#[test]
fn list_is_empty_initially() {
    let client = client(&ManualClock::new());
    let response = client.get("/notes").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_json::<Value>().expect("json"), json!([]));
}

#[test]
fn update_rules() {
    let clock = ManualClock::new();
    let (repository, seeded) = seeded_repository(&clock, 1);
    let client = client_with(NotesConfig::default(), repository);
    let id = seeded[0].id;
    clock.advance(Duration::seconds(30));

    let response = client
        .put(format!("/notes/{id}"))
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        response.into_json::<Value>().expect("json"),
        json!({ "detail": "No fields to update" })
    );

    let response = client
        .put(format!("/notes/{id}"))
        .header(ContentType::JSON)
        .body(json!({ "title": null, "content": null }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    let response = client.get(format!("/notes/{id}")).dispatch();
    let untouched: Note = response.into_json().expect("note");
    assert_eq!(untouched.updated_at, seeded[0].updated_at);
    assert_eq!(untouched, seeded[0]);

    let response = client
        .put(format!("/notes/{id}"))
        .header(ContentType::JSON)
        .body(json!({ "title": "" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client
        .put(format!("/notes/{}", uuid::Uuid::new_v4()))
        .header(ContentType::JSON)
        .body(json!({ "title": "Renamed" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .put(format!("/notes/{id}"))
        .header(ContentType::JSON)
        .body(json!({ "title": "Renamed" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let note: Note = response.into_json().expect("note");
    assert_eq!(note.title.as_str(), "Renamed");
    assert_eq!(note.content, seeded[0].content);
}

#[test]
fn invalid_ids_are_unprocessable() {
    let client = client(&ManualClock::new());
    for response in [
        client.get("/notes/not-a-uuid").dispatch(),
        client.delete("/notes/123").dispatch(),
    ] {
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: Value = response.into_json().expect("json");
        assert_eq!(body["detail"][0]["loc"], json!(["path", "note_id"]));
        assert_eq!(body["detail"][0]["type"], "uuid_parsing");
    }
}

#[test]
fn delete_twice_is_not_found() {
    let clock = ManualClock::new();
    let (repository, seeded) = seeded_repository(&clock, 2);
    let client = client_with(NotesConfig::default(), repository.clone());
    let id = seeded[0].id;

    assert_eq!(
        client.delete(format!("/notes/{id}")).dispatch().status(),
        Status::NoContent
    );
    assert_eq!(
        client.delete(format!("/notes/{id}")).dispatch().status(),
        Status::NotFound
    );
    assert_eq!(repository.len(), 1);
}

#[test]
fn health_and_unknown_routes() {
    let client = client(&ManualClock::new());
    let response = client.get("/health").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_json::<Value>().expect("json"),
        json!({ "status": "ok" })
    );

    let response = client.get("/nope").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(
        response.into_json::<Value>().expect("json"),
        json!({ "detail": "Not Found" })
    );
}

#[test]
fn openapi_document_uses_app_metadata() {
    let config = NotesConfig::builder()
        .app(AppConfig {
            name: "Team Notes".to_string(),
            description: "Shared notes".to_string(),
            version: "1.2.3".to_string(),
        })
        .build();
    let client = client_with(config, NotesRepository::new());
    let response = client.get("/openapi.json").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let doc: Value = response.into_json().expect("json");
    assert_eq!(doc["info"]["title"], "Team Notes");
    assert_eq!(doc["info"]["description"], "Shared notes");
    assert_eq!(doc["info"]["version"], "1.2.3");
    assert!(doc["paths"]["/notes/{note_id}"]["put"].is_object());
}

#[test]
fn swagger_ui_is_served() {
    let client = client(&ManualClock::new());
    let response = client.get("/docs/index.html").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let page = response.into_string().expect("html");
    assert!(page.contains("swagger"));
}

#[test]
fn wildcard_cors_echoes_origin() {
    let client = client(&ManualClock::new());
    let response = client
        .get("/health")
        .header(Header::new("Origin", "https://app.example"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("https://app.example")
    );
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Credentials"),
        Some("true")
    );

    let response = client.get("/health").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);
}

#[test]
fn restricted_cors_origins() {
    let config = NotesConfig::builder()
        .cors(CorsConfig::with_origins(["https://app.example"]))
        .build();
    let client = client_with(config, NotesRepository::new());

    let response = client
        .get("/notes")
        .header(Header::new("Origin", "https://app.example"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("https://app.example")
    );

    let response = client
        .get("/notes")
        .header(Header::new("Origin", "https://evil.example"))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);
}

#[test]
fn preflight_requests() {
    let config = NotesConfig::builder()
        .cors(CorsConfig::with_origins(["https://app.example"]))
        .build();
    let client = client_with(config, NotesRepository::new());

    let response = client
        .options("/notes")
        .header(Header::new("Origin", "https://app.example"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .header(Header::new("Access-Control-Request-Headers", "content-type"))
        .dispatch();
    assert!(response.status().class().is_success());
    let headers = response.headers();
    assert_eq!(
        headers.get_one("Access-Control-Allow-Origin"),
        Some("https://app.example")
    );
    let methods = headers
        .get_one("Access-Control-Allow-Methods")
        .expect("allowed methods");
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }
    let allowed_headers = headers
        .get_one("Access-Control-Allow-Headers")
        .expect("allowed headers")
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert_eq!(headers.get_one("Access-Control-Max-Age"), Some("600"));

    let response = client
        .options("/notes")
        .header(Header::new("Origin", "https://evil.example"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);
}
