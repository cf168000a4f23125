//! GraphQL-level error types

use serde::Deserialize;

/// A single entry of a GraphQL response `errors` array.
///
/// Only the first entry is kept; the rest are logged by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    pub message: String,
    /// Path of the field that failed, if the server reported one.
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

impl GraphQlError {
    /// Creates an error with the given message and no path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Returns the failing field path joined with dots, e.g. `getUsers.0.email`.
    pub fn path_string(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let parts: Vec<String> = path
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        Some(parts.join("."))
    }
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
