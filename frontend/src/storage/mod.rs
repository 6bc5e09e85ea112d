//! Keyed, persistent storage for uncommitted edits.
//!
//! Drafts are addressed by `(Concern, record id)` and hold the full editable
//! state of one surface. The store is an injected service rather than a
//! global so tests can swap in an in-memory map; the production
//! implementation writes through to the browser's sessionStorage so drafts
//! survive reloads and tab switches within the same session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_console::warn;

use common::model::draft::{Concern, Draft};

/// Keyed cache of uncommitted drafts.
///
/// `set` overwrites unconditionally (last writer wins, no merge), `clear` is
/// idempotent, and none of the operations touch the network.
pub trait DraftStore {
    fn get(&self, concern: Concern, record_id: &str) -> Option<Draft>;
    fn set(&self, concern: Concern, record_id: &str, draft: &Draft);
    fn clear(&self, concern: Concern, record_id: &str);
}

/// Draft store holding drafts in memory with write-through persistence to
/// the browser's sessionStorage.
///
/// The in-memory map is authoritative for this tab: dirtiness and commits
/// keep working even when sessionStorage is unavailable (privacy mode,
/// storage denied). Persistence is best-effort and only affects whether
/// drafts survive a reload; a stored entry that fails to parse degrades to
/// the draft-absent case instead of failing.
#[derive(Clone, Default)]
pub struct SessionDraftStore {
    cache: MemoryDraftStore,
}

impl SessionDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn backing(&self) -> Option<web_sys::Storage> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().and_then(|w| w.session_storage().ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl DraftStore for SessionDraftStore {
    fn get(&self, concern: Concern, record_id: &str) -> Option<Draft> {
        if let Some(draft) = self.cache.get(concern, record_id) {
            return Some(draft);
        }
        let storage = self.backing()?;
        let raw = storage.get_item(&concern.draft_key(record_id)).ok()??;
        match serde_json::from_str::<Draft>(&raw) {
            Ok(draft) => {
                self.cache.set(concern, record_id, &draft);
                Some(draft)
            }
            Err(err) => {
                warn!(format!("discarding unreadable draft: {}", err));
                None
            }
        }
    }

    fn set(&self, concern: Concern, record_id: &str, draft: &Draft) {
        self.cache.set(concern, record_id, draft);
        if let Some(storage) = self.backing() {
            if let Ok(raw) = serde_json::to_string(draft) {
                // Quota or privacy-mode failures lose reload persistence,
                // not the edit: the cache above is authoritative.
                let _ = storage.set_item(&concern.draft_key(record_id), &raw);
            }
        }
    }

    fn clear(&self, concern: Concern, record_id: &str) {
        self.cache.clear(concern, record_id);
        if let Some(storage) = self.backing() {
            let _ = storage.remove_item(&concern.draft_key(record_id));
        }
    }
}

/// In-memory draft store keyed by the serialized-string representation.
/// Clones share the same backing map, so every editor session over the same
/// store sees the same drafts. Backs the cache inside [`SessionDraftStore`]
/// and stands alone in tests.
#[derive(Clone, Default)]
pub struct MemoryDraftStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, concern: Concern, record_id: &str) -> Option<Draft> {
        let entries = self.entries.borrow();
        let raw = entries.get(&concern.draft_key(record_id))?;
        serde_json::from_str(raw).ok()
    }

    fn set(&self, concern: Concern, record_id: &str, draft: &Draft) {
        if let Ok(raw) = serde_json::to_string(draft) {
            self.entries
                .borrow_mut()
                .insert(concern.draft_key(record_id), raw);
        }
    }

    fn clear(&self, concern: Concern, record_id: &str) {
        self.entries
            .borrow_mut()
            .remove(&concern.draft_key(record_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::record::FieldMap;
    use serde_json::json;

    fn draft_with(field: &str, value: serde_json::Value) -> Draft {
        let mut fields = FieldMap::new();
        fields.insert(field.to_string(), value);
        Draft::new(fields)
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = MemoryDraftStore::new();
        let draft = draft_with("status", json!("Ordered"));
        store.set(Concern::DiaryFields, "r1", &draft);
        assert_eq!(store.get(Concern::DiaryFields, "r1"), Some(draft));
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let store = MemoryDraftStore::new();
        store.set(Concern::DiaryFields, "r1", &draft_with("status", json!("Ordered")));
        let newer = draft_with("status", json!("Arrived"));
        store.set(Concern::DiaryFields, "r1", &newer);
        assert_eq!(store.get(Concern::DiaryFields, "r1"), Some(newer));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryDraftStore::new();
        store.clear(Concern::DiaryFields, "r1");
        store.set(Concern::DiaryFields, "r1", &draft_with("phone", json!("555")));
        store.clear(Concern::DiaryFields, "r1");
        store.clear(Concern::DiaryFields, "r1");
        assert_eq!(store.get(Concern::DiaryFields, "r1"), None);
    }

    #[test]
    fn concerns_are_independent_keys() {
        let store = MemoryDraftStore::new();
        store.set(Concern::DiaryFields, "r1", &draft_with("status", json!("Ordered")));
        store.set(
            Concern::FollowUpComposer,
            "r1",
            &draft_with("followup_note", json!("call back")),
        );
        store.clear(Concern::DiaryFields, "r1");
        assert!(store.get(Concern::DiaryFields, "r1").is_none());
        assert!(store.get(Concern::FollowUpComposer, "r1").is_some());
    }

    #[test]
    fn drafts_work_without_browser_storage() {
        // No sessionStorage here; the in-memory cache must carry the draft
        // so edits still read back as dirty.
        let store = SessionDraftStore::new();
        let draft = draft_with("status", json!("Ordered"));
        store.set(Concern::DiaryFields, "r1", &draft);
        assert_eq!(store.get(Concern::DiaryFields, "r1"), Some(draft));
        store.clear(Concern::DiaryFields, "r1");
        assert!(store.get(Concern::DiaryFields, "r1").is_none());
    }

    #[test]
    fn session_store_clones_share_the_cache() {
        let store = SessionDraftStore::new();
        let other = store.clone();
        store.set(Concern::DiaryFields, "r1", &draft_with("phone", json!("555")));
        assert!(other.get(Concern::DiaryFields, "r1").is_some());
    }

    #[test]
    fn clones_share_backing_storage() {
        let store = MemoryDraftStore::new();
        let other = store.clone();
        store.set(Concern::ProductLines, "r1", &draft_with("product_lines", json!([])));
        assert!(other.get(Concern::ProductLines, "r1").is_some());
    }
}
