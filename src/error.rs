//! Error taxonomy surfaced by the store and service.

use thiserror::Error;

/// Errors returned by store and service operations.
///
/// [`ApiError::NotFound`] is the only variant callers are expected to branch
/// on; the remaining variants are fatal to the request that hit them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested record id does not resolve to an existing file.
    #[error("{0}")]
    NotFound(String),

    /// A record file exists but its contents do not decode as the expected
    /// record type.
    #[error("record `{id}` is not valid JSON: {source}")]
    Decode {
        /// Id of the record whose file failed to decode.
        id: String,
        /// The underlying serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// An underlying filesystem operation failed.
    #[error("storage failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Builds a [`ApiError::NotFound`] with the given message.
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Returns `true` for the [`ApiError::NotFound`] variant.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn not_found_displays_bare_message() {
        let err = ApiError::not_found("cannot find that product");
        assert_eq!(err.to_string(), "cannot find that product");
        assert!(err.is_not_found());
    }

    #[test]
    fn decode_names_the_record() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Decode { id: "p1".to_string(), source };
        assert!(err.to_string().contains("`p1`"));
        assert!(!err.is_not_found());
    }
}
