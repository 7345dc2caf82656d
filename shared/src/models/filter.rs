//! Filter Model
//!
//! Filter types are category-scoped facet dimensions (e.g. "Bed Size");
//! their options are the selectable values products get assigned.

use serde::{Deserialize, Serialize};

/// Selectable facet value under a filter type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Filter type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterType {
    pub id: i64,
    pub name: String,
    /// Category this filter type is scoped to
    pub category: i64,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

/// Create filter type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterTypeCreate {
    pub name: String,
    pub category: i64,
    /// Option names; IDs are minted server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Update filter type payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterTypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}
