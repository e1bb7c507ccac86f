// Optional request bodies, and the body of every approve/reject endpoint.
// An empty request approves or rejects without a comment.

use crate::shared::core::approval::{Review, Verdict};
use crate::shell::response::ApiError;
use crate::shell::session::CurrentUser;
use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Parses `body` as JSON, or returns `T::default()` when it is empty.
pub fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewBody {
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewBody {
    /// The trimmed comment, if any text is left.
    pub fn into_comment(self) -> Option<String> {
        self.comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
    }
}

pub fn parse_review(
    body: &Bytes,
    verdict: Verdict,
    user: &CurrentUser,
    at: DateTime<Utc>,
) -> Result<Review, ApiError> {
    let body: ReviewBody = optional_json(body)?;
    Ok(Review {
        verdict,
        reviewer: user.reviewer(),
        at,
        comment: body.into_comment(),
    })
}
