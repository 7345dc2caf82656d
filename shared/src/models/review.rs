//! Review Model

use serde::{Deserialize, Serialize};

/// Customer review awaiting moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub product: i64,
    #[serde(default)]
    pub author: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Moderation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub is_approved: bool,
}
