/*
 * Responsibility
 * - notes のインメモリストア (API キーごとに分割)
 * - 呼び出し側はキーの実在検証をしない前提なので、ここでは
 *   「キー文字列 = 名前空間」としてそのまま使う
 *
 * Notes
 * - ロック中に await しないこと (std::sync::RwLock を使っているため)
 */
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Note {
    pub id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    inner: Arc<RwLock<HashMap<String, Vec<Note>>>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, api_key: &str) -> Vec<Note> {
        let map = self.inner.read().expect("note store lock poisoned");
        map.get(api_key).cloned().unwrap_or_default()
    }

    pub fn create(&self, api_key: &str, note: &str) -> Note {
        let row = Note {
            id: Uuid::new_v4(),
            note: note.to_string(),
            created_at: Utc::now(),
        };
        let mut map = self.inner.write().expect("note store lock poisoned");
        map.entry(api_key.to_string()).or_default().push(row.clone());
        row
    }

    pub fn get(&self, api_key: &str, id: Uuid) -> Option<Note> {
        let map = self.inner.read().expect("note store lock poisoned");
        map.get(api_key)
            .and_then(|notes| notes.iter().find(|n| n.id == id))
            .cloned()
    }

    /// 削除できたら true。存在しない (または他キーの) note なら false
    pub fn delete(&self, api_key: &str, id: Uuid) -> bool {
        let mut map = self.inner.write().expect("note store lock poisoned");
        match map.get_mut(api_key) {
            Some(notes) => {
                let before = notes.len();
                notes.retain(|n| n.id != id);
                notes.len() != before
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;

    #[test]
    fn create_then_list() {
        let store = NoteStore::new();
        let created = store.create("key-a", "first note");

        let notes = store.list("key-a");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, created.id);
        assert_eq!(notes[0].note, "first note");
    }

    #[test]
    fn notes_are_partitioned_by_api_key() {
        let store = NoteStore::new();
        let created = store.create("key-a", "mine");

        assert!(store.list("key-b").is_empty());
        assert!(store.get("key-b", created.id).is_none());
        assert!(!store.delete("key-b", created.id));

        // key-a 側はそのまま
        assert_eq!(store.list("key-a").len(), 1);
    }

    #[test]
    fn delete_removes_only_target() {
        let store = NoteStore::new();
        let first = store.create("key-a", "first");
        let second = store.create("key-a", "second");

        assert!(store.delete("key-a", first.id));
        assert!(!store.delete("key-a", first.id));

        let rest = store.list("key-a");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, second.id);
    }
}
