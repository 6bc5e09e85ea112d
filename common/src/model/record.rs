use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to value mapping shared by records, drafts and commit payloads.
pub type FieldMap = BTreeMap<String, Value>;

/// A customer diary entry as last known from the server.
///
/// The server owns this type: clients hold a read-only cached copy that is
/// replaced wholesale by a fresh fetch or by a successful commit response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiaryRecord {
    pub id: String,
    pub fields: FieldMap,
    /// Last-modified marker, unix seconds.
    pub updated_at: i64,
}

impl DiaryRecord {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: FieldMap::new(),
            updated_at: 0,
        }
    }
}

/// Well-known diary field names.
pub mod fields {
    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const PHONE: &str = "phone";
    pub const ORDER_REF: &str = "order_ref";
    pub const STATUS: &str = "status";
    pub const IS_PAID: &str = "is_paid";
    pub const FOLLOWUP_NOTE: &str = "followup_note";
    pub const PRODUCT_LINES: &str = "product_lines";
}

/// Order/collection workflow states stored in the `status` field.
pub mod status {
    pub const PENDING: &str = "Pending";
    pub const ORDERED: &str = "Ordered";
    pub const ARRIVED: &str = "Arrived";
    pub const COLLECTED: &str = "Collected";

    pub const ALL: [&str; 4] = [PENDING, ORDERED, ARRIVED, COLLECTED];
}
