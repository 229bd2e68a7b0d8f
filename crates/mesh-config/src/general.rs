//! General project configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// SQL dialect used when rendering queries for display (e.g., "duckdb").
    /// Empty means each query's default rendering.
    #[serde(default)]
    pub dialect: String,
}

impl GeneralConfig {
    /// The configured dialect, `None` when unset.
    #[must_use]
    pub fn dialect(&self) -> Option<&str> {
        Some(self.dialect.as_str()).filter(|d| !d.is_empty())
    }
}
