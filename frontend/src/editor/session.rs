//! Draft-aware editing session for one `(Concern, record id)` pair.
//!
//! `EditorSession` is the reconciler and commit pipeline behind the diary
//! detail screen. It owns the editable form state for one surface, writes
//! every edit through to the [`DraftStore`], and tracks the commit lifecycle:
//!
//! - **Clean**: no draft, form mirrors the last known record.
//! - **Dirty**: a draft exists; the form holds uncommitted edits.
//! - **Committing**: one commit is in flight; further edits keep landing in
//!   the draft and are picked up by a later trigger.
//!
//! Dirtiness is derived from draft presence, never stored separately. The
//! session performs no I/O itself: the component fetches and commits over
//! the network and feeds the outcomes back in.

use common::model::draft::{Concern, Draft};
use common::model::record::{DiaryRecord, FieldMap};

use crate::storage::DraftStore;

/// Commit lifecycle state for one editing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorPhase {
    Clean,
    Dirty,
    Committing,
}

/// A single in-flight commit, handed out by [`EditorSession::begin_commit`].
///
/// Carries the full payload to send and an md5 fingerprint of its serialized
/// form, used on success to detect edits that arrived after send-time.
#[derive(Clone, Debug)]
pub struct CommitTicket {
    pub concern: Concern,
    pub record_id: String,
    pub payload: FieldMap,
    fingerprint: String,
}

fn fingerprint(fields: &FieldMap) -> String {
    // FieldMap is ordered, so the JSON encoding is canonical.
    let encoded = serde_json::to_string(fields).unwrap_or_default();
    format!("{:x}", md5::compute(encoded))
}

pub struct EditorSession<S: DraftStore> {
    concern: Concern,
    record_id: String,
    store: S,
    record: Option<DiaryRecord>,
    form: FieldMap,
    in_flight: Option<String>,
}

impl<S: DraftStore> EditorSession<S> {
    pub fn new(concern: Concern, record_id: impl Into<String>, store: S) -> Self {
        Self {
            concern,
            record_id: record_id.into(),
            store,
            record: None,
            form: FieldMap::new(),
            in_flight: None,
        }
    }

    pub fn concern(&self) -> Concern {
        self.concern
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// The current editable state shown by the form.
    pub fn form(&self) -> &FieldMap {
        &self.form
    }

    pub fn record(&self) -> Option<&DiaryRecord> {
        self.record.as_ref()
    }

    /// True iff an uncommitted draft exists for this surface.
    pub fn is_dirty(&self) -> bool {
        self.store.get(self.concern, &self.record_id).is_some()
    }

    pub fn phase(&self) -> EditorPhase {
        if self.in_flight.is_some() {
            EditorPhase::Committing
        } else if self.is_dirty() {
            EditorPhase::Dirty
        } else {
            EditorPhase::Clean
        }
    }

    /// This concern's slice of a record's fields.
    fn record_slice(&self, record: &DiaryRecord) -> FieldMap {
        let mut slice = FieldMap::new();
        for name in self.concern.field_names() {
            if let Some(value) = record.fields.get(*name) {
                slice.insert((*name).to_string(), value.clone());
            }
        }
        slice
    }

    /// Reconciles a freshly fetched record against any pending draft.
    ///
    /// A pending draft means a prior commit never completed, so it wins for
    /// initial display and the session starts dirty; otherwise the form
    /// mirrors the record and the session is clean. The record cache is
    /// replaced either way.
    pub fn load_record(&mut self, record: DiaryRecord) {
        self.form = match self.store.get(self.concern, &self.record_id) {
            Some(draft) => draft.fields,
            None => self.record_slice(&record),
        };
        self.record = Some(record);
    }

    /// A record fetch failed. The session fabricates nothing: any pending
    /// draft stays in the store untouched for a later retry.
    pub fn load_failed(&mut self) {
        self.record = None;
    }

    /// Applies one field edit: the full current form is rewritten into the
    /// draft store under this session's key.
    pub fn edit(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.form.insert(field.into(), value);
        self.store
            .set(self.concern, &self.record_id, &Draft::new(self.form.clone()));
    }

    /// Starts a commit if one should run: returns `None` while another commit
    /// is in flight (triggers coalesce, they never queue) and when there is
    /// no draft to send.
    pub fn begin_commit(&mut self) -> Option<CommitTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let draft = self.store.get(self.concern, &self.record_id)?;
        let fp = fingerprint(&draft.fields);
        self.in_flight = Some(fp.clone());
        Some(CommitTicket {
            concern: self.concern,
            record_id: self.record_id.clone(),
            payload: draft.fields,
            fingerprint: fp,
        })
    }

    /// Reconciles a successful commit response.
    ///
    /// The server response is authoritative and replaces the cached record.
    /// The draft is cleared only if it still matches the payload that was
    /// sent; if a newer edit overwrote it mid-flight, the draft survives and
    /// the session stays dirty so the next trigger commits it. Returns
    /// whether the draft was cleared.
    pub fn commit_succeeded(&mut self, ticket: &CommitTicket, response: DiaryRecord) -> bool {
        self.in_flight = None;
        let unchanged = self
            .store
            .get(self.concern, &self.record_id)
            .map(|draft| fingerprint(&draft.fields) == ticket.fingerprint)
            .unwrap_or(true);
        if unchanged {
            // Clear before exposing the clean state so a draft and a fresh
            // record never disagree silently.
            self.store.clear(self.concern, &self.record_id);
            self.form = self.record_slice(&response);
        }
        self.record = Some(response);
        unchanged
    }

    /// A commit failed (network error or server rejection). The draft is
    /// left intact and the session stays dirty; the caller surfaces the
    /// reason and the user may retry via the same trigger.
    pub fn commit_failed(&mut self, _ticket: &CommitTicket) {
        self.in_flight = None;
    }

    /// Explicit user discard: drops the draft and restores the form to the
    /// last known record state.
    pub fn discard(&mut self) {
        self.store.clear(self.concern, &self.record_id);
        self.form = match &self.record {
            Some(record) => {
                let record = record.clone();
                self.record_slice(&record)
            }
            None => FieldMap::new(),
        };
    }
}
