//! Runtime state of the diary detail editor.
//!
//! One [`EditorSession`] per editing surface, all over the same
//! sessionStorage-backed draft store, plus the record cache and the shared
//! auto-save debouncer. Only one surface is visible at a time, so a single
//! debouncer is enough: switching tabs flushes the surface being left.

use serde_json::Value;
use uuid::Uuid;

use common::model::draft::Concern;
use common::model::record::fields;

use crate::api::RemoteRecordStore;
use crate::editor::debounce::Debouncer;
use crate::editor::session::EditorSession;
use crate::storage::SessionDraftStore;

/// Auto-save fires after this much edit inactivity.
pub const AUTO_SAVE_DELAY_MS: u32 = 2000;

/// Visible editing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTab {
    Details,
    FollowUp,
    Products,
}

impl EditorTab {
    pub fn concern(&self) -> Concern {
        match self {
            EditorTab::Details => Concern::DiaryFields,
            EditorTab::FollowUp => Concern::FollowUpComposer,
            EditorTab::Products => Concern::ProductLines,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorTab::Details => "Details",
            EditorTab::FollowUp => "Follow-up",
            EditorTab::Products => "Products",
        }
    }
}

pub struct DiaryDetail {
    pub record_id: String,
    /// The editor was opened without an id: a fresh entry under a new uuid,
    /// created server-side by the first commit.
    pub is_new: bool,
    pub records: RemoteRecordStore,
    pub details: EditorSession<SessionDraftStore>,
    pub follow_up: EditorSession<SessionDraftStore>,
    pub lines: EditorSession<SessionDraftStore>,
    pub active_tab: EditorTab,
    pub load_error: Option<String>,
    pub autosave: Debouncer,
    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
}

impl DiaryDetail {
    pub fn new(record_id: Option<String>) -> Self {
        let (record_id, is_new) = match record_id {
            Some(id) => (id, false),
            None => (Uuid::new_v4().to_string(), true),
        };
        let store = SessionDraftStore::new();
        Self {
            details: EditorSession::new(Concern::DiaryFields, record_id.clone(), store.clone()),
            follow_up: EditorSession::new(
                Concern::FollowUpComposer,
                record_id.clone(),
                store.clone(),
            ),
            lines: EditorSession::new(Concern::ProductLines, record_id.clone(), store),
            record_id,
            is_new,
            records: RemoteRecordStore::new(),
            active_tab: EditorTab::Details,
            load_error: None,
            autosave: Debouncer::new(AUTO_SAVE_DELAY_MS),
            loaded: false,
        }
    }

    pub fn session(&self, concern: Concern) -> &EditorSession<SessionDraftStore> {
        match concern {
            Concern::DiaryFields => &self.details,
            Concern::FollowUpComposer => &self.follow_up,
            Concern::ProductLines => &self.lines,
        }
    }

    pub fn session_mut(&mut self, concern: Concern) -> &mut EditorSession<SessionDraftStore> {
        match concern {
            Concern::DiaryFields => &mut self.details,
            Concern::FollowUpComposer => &mut self.follow_up,
            Concern::ProductLines => &mut self.lines,
        }
    }

    pub fn active_concern(&self) -> Concern {
        self.active_tab.concern()
    }

    /// The product line list as currently edited.
    pub fn product_lines(&self) -> Vec<Value> {
        self.lines
            .form()
            .get(fields::PRODUCT_LINES)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }
}
