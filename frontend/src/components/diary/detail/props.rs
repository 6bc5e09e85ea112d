//! Properties for the diary detail editor.

use yew::prelude::*;

/// Configuration passed by the parent when mounting the editor.
#[derive(Properties, PartialEq, Clone)]
pub struct DiaryDetailProps {
    /// The id of the diary record to edit. If `None`, the editor starts a
    /// new entry under a freshly generated id; the record is created on the
    /// server by the first successful commit.
    #[prop_or_default]
    pub record_id: Option<String>,
}
