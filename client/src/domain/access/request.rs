//! Request-side value types for the access layer.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// HTTP methods the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Idempotent read.
    Get,
    /// Create or invoke.
    Post,
    /// Full replacement.
    Put,
    /// Removal.
    Delete,
    /// Partial update.
    Patch,
}

impl Method {
    /// Wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Whether the fallback transport may retry this method.
    ///
    /// Only idempotent reads ride the fallback path: re-issuing a mutation
    /// whose first attempt may have reached the server could double-apply it.
    #[must_use]
    pub fn supports_fallback(self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON-encoded body.
    Json(Value),
    /// Multipart form body, used by dashboard media uploads.
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    /// Serialise any payload into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `payload` cannot be represented as JSON.
    pub fn json_payload<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(payload)?))
    }
}

/// One part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartField {
    /// Form field name.
    pub name: String,
    /// Original file name, when the part carries a file.
    pub filename: Option<String>,
    /// MIME type of the part, when known.
    pub content_type: Option<String>,
    /// Raw part content.
    pub bytes: Vec<u8>,
}

/// Per-request overrides merged over the client defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra headers appended after the defaults; later entries win.
    pub headers: Vec<(String, String)>,
    /// Content-type override. Meaningful for JSON bodies only; multipart
    /// bodies own their boundary-bearing content type.
    pub content_type: Option<String>,
}
