//! Shared types for API communication

use serde::Deserialize;
use serde_json::{Map, Value};

/// One celestial object as returned by the API.
///
/// `name` is always present; every other field is kept in response order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of a non-success response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
