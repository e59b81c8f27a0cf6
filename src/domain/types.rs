use serde::{Deserialize, Serialize};

/// Structural shape of an admissible query: a status inquiry about a pending
/// application, or a general request for recorded information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Status,
    Basic,
}

/// The generated letter artifact. Owned by the caller once returned; the
/// drafter keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    pub content: String,
    pub department: String,
    pub subject: String,
}
