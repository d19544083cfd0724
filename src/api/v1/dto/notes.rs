/*
 * Responsibility
 * - Notes の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::note_repo::Note;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub note: String,
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.note.trim().is_empty() {
            return Err("note is required");
        }
        if self.note.len() > 4096 {
            return Err("note must be <= 4096 chars");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            note: n.note,
            created_at: n.created_at,
        }
    }
}
