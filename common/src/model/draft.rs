use serde::{Deserialize, Serialize};

use crate::model::record::{FieldMap, fields};

/// A named editing surface with its own draft key-space.
///
/// Each concern edits a disjoint subset of the record's fields; drafts for
/// different concerns on the same record are fully independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Concern {
    /// Core diary fields: customer, phone, order reference, status, payment.
    DiaryFields,
    /// The follow-up note composer.
    FollowUpComposer,
    /// The product line list.
    ProductLines,
}

impl Concern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::DiaryFields => "diary_fields",
            Concern::FollowUpComposer => "followup_composer",
            Concern::ProductLines => "product_lines",
        }
    }

    /// The record fields this surface edits and commits.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Concern::DiaryFields => &[
                fields::CUSTOMER_NAME,
                fields::PHONE,
                fields::ORDER_REF,
                fields::STATUS,
                fields::IS_PAID,
            ],
            Concern::FollowUpComposer => &[fields::FOLLOWUP_NOTE],
            Concern::ProductLines => &[fields::PRODUCT_LINES],
        }
    }

    /// Storage key for the draft of this concern on one record.
    pub fn draft_key(&self, record_id: &str) -> String {
        format!("diary.draft.{}.{}", self.as_str(), record_id)
    }
}

/// Uncommitted local edits for one concern on one record.
///
/// Holds the full editable state of the surface, not a diff; every edit
/// overwrites the previous draft in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub fields: FieldMap,
}

impl Draft {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_keys_are_distinct_per_concern_and_record() {
        let a = Concern::DiaryFields.draft_key("r1");
        let b = Concern::FollowUpComposer.draft_key("r1");
        let c = Concern::DiaryFields.draft_key("r2");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "diary.draft.diary_fields.r1");
    }

    #[test]
    fn concerns_edit_disjoint_fields() {
        let core = Concern::DiaryFields.field_names();
        for name in Concern::FollowUpComposer.field_names() {
            assert!(!core.contains(name));
        }
        for name in Concern::ProductLines.field_names() {
            assert!(!core.contains(name));
        }
    }
}
