use serde::{Deserialize, Serialize};

/// Incoming payload for the publish endpoint. Absent and empty fields are
/// rejected by the handler, not the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostResult {
    pub status: String,
    pub post_url: String,
}
