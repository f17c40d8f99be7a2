use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::pagination::{Paginated, PaginationDescriptor};

/// Body of a `POST /{resource}/list` request: the page's submitted filter
/// values flattened next to the pagination parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest<F> {
    #[serde(flatten)]
    pub filters: F,
    pub page: usize,
    pub per_page: usize,
}

/// Success envelope of a list endpoint: `{data, pagination}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<Row> {
    pub data: Vec<Row>,
    pub pagination: PaginationDescriptor,
}

impl<Row> From<ListEnvelope<Row>> for Paginated<Row> {
    fn from(e: ListEnvelope<Row>) -> Self {
        Self {
            data: e.data,
            pagination: e.pagination,
        }
    }
}

/// Success envelope of a detail endpoint: `{data}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Success envelope of a write endpoint: `{message, code}`.
/// `message` feeds the success toast, `code` carries server-generated
/// identifiers (e.g. a freshly assigned record code).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AckEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// One field-level validation message from an upsert rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Decoded API error. The server is allowed to answer with any of three
/// envelope shapes; decoding is defensive and always yields something
/// presentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    /// Decode an error response body. Accepted shapes, tried in order:
    ///   1. `{"error": {"code", "message", "details"?}}`
    ///   2. `{"code", "message"}`
    ///   3. `{"errors": [{"field", "message"}]}`
    /// Anything else falls back to a generic message carrying the HTTP
    /// status, so a failure is never silently swallowed.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Inner {
            code: Option<String>,
            message: Option<String>,
        }
        #[derive(Deserialize)]
        struct Wrapped {
            error: Inner,
        }
        #[derive(Deserialize)]
        struct Flat {
            code: Option<String>,
            message: String,
        }
        #[derive(Deserialize)]
        struct Fields {
            errors: Vec<FieldError>,
        }

        if let Ok(w) = serde_json::from_str::<Wrapped>(body) {
            return Self {
                code: w.error.code,
                message: w
                    .error
                    .message
                    .unwrap_or_else(|| format!("Request failed (HTTP {status})")),
                field_errors: Vec::new(),
            };
        }
        if let Ok(f) = serde_json::from_str::<Fields>(body) {
            let message = f
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| format!("Request failed (HTTP {status})"));
            return Self {
                code: None,
                message,
                field_errors: f.errors,
            };
        }
        if let Ok(f) = serde_json::from_str::<Flat>(body) {
            return Self {
                code: f.code,
                message: f.message,
                field_errors: Vec::new(),
            };
        }
        Self::transport(format!("Request failed (HTTP {status})"))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Parse a success body of type `T`, mapping parse failures to `ApiError`
/// instead of panicking.
pub fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::transport(format!("Malformed response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wrapped_error() {
        let e = ApiError::from_body(500, r#"{"error":{"code":"SERVER_ERROR","message":"boom"}}"#);
        assert_eq!(e.code.as_deref(), Some("SERVER_ERROR"));
        assert_eq!(e.message, "boom");
        assert!(!e.has_field_errors());
    }

    #[test]
    fn test_decode_flat_error() {
        let e = ApiError::from_body(409, r#"{"code":"CONFLICT","message":"duplicate name"}"#);
        assert_eq!(e.code.as_deref(), Some("CONFLICT"));
        assert_eq!(e.message, "duplicate name");
    }

    #[test]
    fn test_decode_field_errors() {
        let e = ApiError::from_body(
            422,
            r#"{"errors":[{"field":"name","message":"required"},{"field":"price","message":"must be positive"}]}"#,
        );
        assert!(e.has_field_errors());
        assert_eq!(e.field_errors.len(), 2);
        assert_eq!(e.field_errors[0].field, "name");
        assert_eq!(e.message, "required");
    }

    #[test]
    fn test_decode_garbage_falls_back() {
        let e = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(e.message, "Request failed (HTTP 502)");
        assert!(e.code.is_none());
    }

    #[test]
    fn test_list_request_flattens_filters() {
        #[derive(Serialize)]
        struct F {
            q: String,
        }
        let req = ListRequest {
            filters: F { q: "abc".into() },
            page: 2,
            per_page: 25,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["q"], "abc");
        assert_eq!(json["page"], 2);
        assert_eq!(json["perPage"], 25);
    }
}
