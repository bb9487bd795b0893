use serde::{Deserialize, Serialize};

/// Body of a generation request at the JSON boundary: `{"prompt": "..."}`.
///
/// `prompt` is optional so that a missing or `null` field reaches the
/// pipeline and is reported as [`ErrorKind::MissingPrompt`] instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// The two failure classes visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingPrompt,
    GenerationFailure,
}

impl ErrorKind {
    /// Short public message. Underlying causes are never exposed.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingPrompt => "Prompt is required",
            Self::GenerationFailure => "Failed to generate code",
        }
    }
}

/// Response body: either `{"code": ...}` or `{"error": ..., "kind": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Success { code: String },
    Failure { error: String, kind: ErrorKind },
}

impl GenerateResponse {
    pub fn failure(kind: ErrorKind) -> Self {
        Self::Failure {
            error: kind.message().to_string(),
            kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
