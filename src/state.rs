/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::repos::note_repo::NoteStore;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub notes: NoteStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notes: NoteStore::new(),
        }
    }
}
