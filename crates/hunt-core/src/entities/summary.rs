use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Stage;

/// One row of the summary document's Active Targets table.
///
/// Derived from an active pipeline entry; `deadline` and `next_action` fall
/// back to "—" when the source line carries no matching segment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActiveTarget {
    pub company: String,
    pub role: String,
    pub stage: Stage,
    pub next_action: String,
    pub deadline: String,
}
