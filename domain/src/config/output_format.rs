//! Output format value object

use serde::{Deserialize, Serialize};

/// How a handled inquiry is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Wire response as the contact flow receives it (default)
    #[default]
    Json,
    /// Human-readable rendering
    Text,
}
