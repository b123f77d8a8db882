use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Everything that can go wrong while extracting events from a page.
///
/// Each variant names the selector, path, key or field involved so a failure
/// points straight at the part of the page structure that changed.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected exactly one element matching {selector:?}, found {found}")]
    NotFound { selector: String, found: usize },
    #[error("invalid state selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("state script is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing path segment {segment:?} in {path:?}")]
    MissingPath { path: String, segment: String },
    #[error("malformed event {key}: field {field:?} {reason}")]
    MalformedEvent {
        key: String,
        field: String,
        reason: String,
    },
    #[error("entity {from} field {field:?} references missing entity {target}")]
    DanglingReference {
        from: String,
        field: String,
        target: String,
    },
}

impl ParseError {
    pub fn not_found(selector: impl Into<String>, found: usize) -> Self {
        Self::NotFound {
            selector: selector.into(),
            found,
        }
    }

    pub fn missing_path(path: &[String], segment: impl Into<String>) -> Self {
        Self::MissingPath {
            path: path.join("."),
            segment: segment.into(),
        }
    }

    pub fn malformed_event(
        key: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedEvent {
            key: key.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn dangling(
        from: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            from: from.into(),
            field: field.into(),
            target: target.into(),
        }
    }
}
