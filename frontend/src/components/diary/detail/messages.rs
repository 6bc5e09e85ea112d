use serde_json::Value;

use common::model::draft::Concern;
use common::model::record::DiaryRecord;

use crate::api::FetchError;
use crate::editor::session::CommitTicket;

use super::state::EditorTab;

pub enum Msg {
    RecordLoaded(DiaryRecord),
    RecordLoadFailed(FetchError),
    SetTab(EditorTab),
    EditField {
        concern: Concern,
        field: String,
        value: Value,
    },
    /// Explicit user save of one surface.
    Save(Concern),
    /// Debounced auto-save trigger for one surface.
    AutoSave(Concern),
    CommitFinished {
        ticket: CommitTicket,
        result: Result<DiaryRecord, FetchError>,
    },
    Discard(Concern),
    AddProductLine,
    RemoveProductLine(usize),
    EditProductLine {
        index: usize,
        field: String,
        value: Value,
    },
}
