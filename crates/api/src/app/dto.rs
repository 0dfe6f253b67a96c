use serde::{Deserialize, Serialize};

use cookbook_core::{CookbookResult, Entry, RequiredItem};
use cookbook_recipes::entry_from_parts;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub input: String,
}

/// Admission payload. Kept loosely typed so that an unknown or missing `type`
/// surfaces as `invalid_entry_type` rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntryRequest {
    #[serde(rename = "type", default)]
    pub entry_type: String,
    pub name: String,
    pub required_items: Option<Vec<RequiredItem>>,
    pub cook_time: Option<i64>,
}

impl AddEntryRequest {
    pub fn into_entry(self) -> CookbookResult<Entry> {
        entry_from_parts(&self.entry_type, self.name, self.required_items, self.cook_time)
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}
