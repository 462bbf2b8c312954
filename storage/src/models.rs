//! Record model persisted in the durable file, and the draft built per post.

use serde::{Deserialize, Serialize};

/// Persisted representation of one ingested post. Serialized field names match
/// the data file consumed downstream (flag fields are camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub title: String,
    /// Untouched source caption; the byte-identical comparison target for the
    /// update-family skip.
    pub caption: String,
    /// Stored image file name, set per successful download.
    pub image: String,
    pub tags: Vec<String>,
    pub url: String,
    pub date: i64,
    pub edit_date: i64,
    #[serde(rename = "isMonth")]
    pub is_month: bool,
    #[serde(rename = "isYear")]
    pub is_year: bool,
    #[serde(rename = "isHighlighted")]
    pub is_highlighted: bool,
    #[serde(rename = "isRemoved")]
    pub is_removed: bool,
}

/// Field values derived from one incoming post, before flag resolution
/// against any existing record.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub title: String,
    pub caption: String,
    pub image: String,
    pub tags: Vec<String>,
    pub url: String,
    pub date: i64,
    pub edit_date: i64,
}
