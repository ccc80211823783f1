//! Error kinds surfaced by the service and their HTTP status mapping.

use axum::http::StatusCode;
use thiserror::Error;

use crate::utils::codec::CodecError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid long URL: {long_url}")]
    InvalidLongUrl { long_url: String },

    #[error("No mapping found for short code {short_code} (id {id})")]
    NoMappingFound { short_code: String, id: u64 },

    #[error("Invalid short code: {0}")]
    InvalidShortCode(CodecError),

    #[error("Short code out of range: {0}")]
    ShortCodeOverflow(CodecError),

    /// Path segment that could not be extracted, e.g. invalid UTF-8.
    #[error("Unreadable short code: {0}")]
    UnreadableShortCode(String),

    /// Connectivity, transport or pool failure. Retriable.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Constraint violation. Not retriable.
    #[error("Store integrity violation: {0}")]
    StoreIntegrity(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status returned to clients for this error.
    ///
    /// Only invalid long URLs and missing mappings are client errors; everything
    /// else, malformed short codes included, is reported as a server error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidLongUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::NoMappingFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidShortCode(_)
            | AppError::ShortCodeOverflow(_)
            | AppError::UnreadableShortCode(_)
            | AppError::StoreUnavailable(_)
            | AppError::StoreIntegrity(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether retrying the same operation may succeed.
    pub fn is_retriable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }
}

impl From<CodecError> for AppError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::InvalidShortCode { .. } => AppError::InvalidShortCode(e),
            CodecError::ShortCodeOverflow { .. } => AppError::ShortCodeOverflow(e),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && !matches!(db.kind(), sqlx::error::ErrorKind::Other)
        {
            return AppError::StoreIntegrity(db.message().to_string());
        }

        AppError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = AppError::InvalidLongUrl {
            long_url: "nope".to_string(),
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let missing = AppError::NoMappingFound {
            short_code: "c".to_string(),
            id: 1,
        };
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        assert_eq!(
            AppError::StoreUnavailable("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StoreIntegrity("dup".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codec_errors_are_server_errors() {
        let invalid: AppError = CodecError::InvalidShortCode { character: '-' }.into();
        assert!(matches!(invalid, AppError::InvalidShortCode(_)));
        assert_eq!(invalid.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let overflow: AppError = CodecError::ShortCodeOverflow {
            code: "9999999999999".to_string(),
        }
        .into();
        assert!(matches!(overflow, AppError::ShortCodeOverflow(_)));
        assert_eq!(overflow.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let unreadable = AppError::UnreadableShortCode("Invalid UTF-8".to_string());
        assert_eq!(unreadable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!unreadable.is_retriable());
    }

    #[test]
    fn test_sqlx_transport_errors_are_retriable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
        assert!(err.is_retriable());

        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn test_integrity_errors_are_not_retriable() {
        assert!(!AppError::StoreIntegrity("dup".to_string()).is_retriable());
    }
}
