//! `/notes` CRUD handlers.

use crate::error::{ApiError, MessageBody, ValidationBody};
use crate::payload::{self, JsonBody};
use log::{debug, info};
use notes_rs_core::{Note, NoteCreate, NoteUpdate, NotesCoreError, NotesRepository};
use rocket::State;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    summary = "Create a note",
    description = "Create a new note with a title and content. Returns the created note.",
    request_body = NoteCreate,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 422, description = "Validation error", body = ValidationBody)
    )
)]
#[rocket::post("/notes", data = "<body>")]
pub(crate) fn create_note(
    repository: &State<NotesRepository>,
    body: JsonBody<'_>,
) -> Result<status::Created<Json<Note>>, ApiError> {
    let payload = payload::decode(body)?.into_create()?;
    let note = repository.create(payload);
    info!("note created via api (id={})", note.id);
    Ok(status::Created::new(format!("/notes/{}", note.id)).body(Json(note)))
}

#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    summary = "List notes",
    description = "Retrieve all notes currently stored.",
    responses((status = 200, description = "Notes in creation order", body = Vec<Note>))
)]
#[rocket::get("/notes")]
pub(crate) fn list_notes(repository: &State<NotesRepository>) -> Json<Vec<Note>> {
    let notes = repository.list();
    debug!("listing notes (count={})", notes.len());
    Json(notes)
}

#[utoipa::path(
    get,
    path = "/notes/{note_id}",
    tag = "Notes",
    summary = "Get note by ID",
    description = "Retrieve a single note by its UUID.",
    params(("note_id" = Uuid, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Note not found", body = MessageBody),
        (status = 422, description = "Malformed id", body = ValidationBody)
    )
)]
#[rocket::get("/notes/<note_id>")]
pub(crate) fn get_note(
    repository: &State<NotesRepository>,
    note_id: &str,
) -> Result<Json<Note>, ApiError> {
    let id = payload::note_id(note_id)?;
    let note = repository.get(id).ok_or(NotesCoreError::NotFound(id))?;
    Ok(Json(note))
}

/// Partial update; at least one field must be supplied.
#[utoipa::path(
    put,
    path = "/notes/{note_id}",
    tag = "Notes",
    summary = "Update a note",
    description = "Update an existing note's title and/or content.",
    params(("note_id" = Uuid, Path, description = "Note identifier")),
    request_body = NoteUpdate,
    responses(
        (status = 200, description = "The updated note", body = Note),
        (status = 400, description = "No fields to update", body = MessageBody),
        (status = 404, description = "Note not found", body = MessageBody),
        (status = 422, description = "Validation error", body = ValidationBody)
    )
)]
#[rocket::put("/notes/<note_id>", data = "<body>")]
pub(crate) fn update_note(
    repository: &State<NotesRepository>,
    note_id: &str,
    body: JsonBody<'_>,
) -> Result<Json<Note>, ApiError> {
    let id = payload::note_id(note_id)?;
    let update = payload::decode(body)?.into_update()?;
    if update.is_empty() {
        debug!("rejecting empty update (id={})", id);
        return Err(NotesCoreError::EmptyUpdate.into());
    }
    let note = repository.update(id, update).ok_or(NotesCoreError::NotFound(id))?;
    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/notes/{note_id}",
    tag = "Notes",
    summary = "Delete a note",
    description = "Delete a note by its UUID.",
    params(("note_id" = Uuid, Path, description = "Note identifier")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found", body = MessageBody),
        (status = 422, description = "Malformed id", body = ValidationBody)
    )
)]
#[rocket::delete("/notes/<note_id>")]
pub(crate) fn delete_note(
    repository: &State<NotesRepository>,
    note_id: &str,
) -> Result<Status, ApiError> {
    let id = payload::note_id(note_id)?;
    if repository.delete(id) {
        Ok(Status::NoContent)
    } else {
        Err(NotesCoreError::NotFound(id).into())
    }
}
