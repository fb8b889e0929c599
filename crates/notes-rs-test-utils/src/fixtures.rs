//! Payload builders and pre-filled repositories.

use crate::ManualClock;
use notes_rs_core::{Note, NoteCreate, NoteUpdate, NotesRepository};
use std::sync::Arc;

pub fn create_payload(title: &str, content: &str) -> NoteCreate {
    NoteCreate::parse(Some(title), Some(content)).expect("valid create payload")
}

pub fn update_payload(title: Option<&str>, content: Option<&str>) -> NoteUpdate {
    NoteUpdate::parse(title, content).expect("valid update payload")
}

/// Repository on `clock` holding `count` notes titled "Note 1".."Note N".
pub fn seeded_repository(clock: &ManualClock, count: usize) -> (NotesRepository, Vec<Note>) {
    let repository = NotesRepository::with_clock(Arc::new(clock.clone()));
    let notes = (1..=count)
        .map(|idx| {
            repository.create(create_payload(
                &format!("Note {idx}"),
                &format!("Content for note {idx}"),
            ))
        })
        .collect();
    (repository, notes)
}
