//! In-memory note repository guarded by a single lock.

use crate::clock::{Clock, SystemClock};
use crate::types::{Note, NoteCreate, NoteId, NoteUpdate};
use log::{debug, info};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Authoritative note collection shared by request handlers.
///
/// Cloning yields another handle to the same store. Every operation holds the
/// lock for its whole critical section and returns owned copies, so callers
/// never observe a partially applied change.
#[derive(Clone)]
pub struct NotesRepository {
    table: Arc<Mutex<NoteTable>>,
    clock: Arc<dyn Clock>,
}

#[derive(Default)]
struct NoteTable {
    notes: HashMap<NoteId, Note>,
    /// Insertion order of live notes.
    order: Vec<NoteId>,
    /// Every id handed out so far, including deleted ones.
    issued: HashSet<NoteId>,
}

impl NoteTable {
    fn fresh_id(&mut self) -> NoteId {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

impl Default for NotesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesRepository {
    /// Create an empty repository stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty repository with a custom time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Arc::new(Mutex::new(NoteTable::default())),
            clock,
        }
    }

    /// Store a new note and return it.
    pub fn create(&self, payload: NoteCreate) -> Note {
        let mut table = self.table.lock();
        let now = self.clock.now();
        let note = Note {
            id: table.fresh_id(),
            title: payload.title.into_inner(),
            content: payload.content.into_inner(),
            created_at: now,
            updated_at: now,
        };
        table.order.push(note.id);
        table.notes.insert(note.id, note.clone());
        info!(
            "created note (note_id={}, title_len={})",
            note.id,
            note.title.chars().count()
        );
        note
    }

    /// Snapshot of all notes in insertion order.
    pub fn list(&self) -> Vec<Note> {
        let table = self.table.lock();
        table
            .order
            .iter()
            .filter_map(|id| table.notes.get(id).cloned())
            .collect()
    }

    /// Fetch a note by id.
    pub fn get(&self, id: NoteId) -> Option<Note> {
        self.table.lock().notes.get(&id).cloned()
    }

    /// Apply the provided fields to a note.
    ///
    /// Returns `None` when the id is unknown. `updated_at` only moves when a
    /// provided value differs from the stored one, and it never moves back.
    pub fn update(&self, id: NoteId, payload: NoteUpdate) -> Option<Note> {
        let mut table = self.table.lock();
        let note = table.notes.get_mut(&id)?;

        let mut changed = false;
        if let Some(title) = payload.title
            && note.title != title.as_str()
        {
            note.title = title.into_inner();
            changed = true;
        }
        if let Some(content) = payload.content
            && note.content != content.as_str()
        {
            note.content = content.into_inner();
            changed = true;
        }

        if changed {
            note.updated_at = self.clock.now().max(note.updated_at);
            info!("updated note (note_id={})", id);
        } else {
            debug!("update left note unchanged (note_id={})", id);
        }
        Some(note.clone())
    }

    /// Remove a note; returns whether it existed.
    pub fn delete(&self, id: NoteId) -> bool {
        let mut table = self.table.lock();
        let removed = table.notes.remove(&id).is_some();
        if removed {
            table.order.retain(|existing| *existing != id);
            info!("deleted note (note_id={})", id);
        } else {
            debug!("delete ignored unknown note (note_id={})", id);
        }
        removed
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.table.lock().notes.len()
    }

    /// True when no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
