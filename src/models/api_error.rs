use serde::{Deserialize, Serialize};
use std::fmt;

/// The error object the API returns in place of the requested resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    /// Subtype such as `ambiguous`; the API leaves it out for plain 404s.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    pub status: u16,
    pub details: String,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Details: {}", self.details)
    }
}
