use thiserror::Error;

/// Errors raised while talking to an actions source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::DecodeError(err.to_string())
    }
}

impl SourceError {
    /// True for failures caused by a body that did not match the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(self, SourceError::DecodeError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        let err: SourceError = err.into();
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Decode error:"));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = SourceError::FetchError("GET /repos/a/b/actions/runs: 502".to_string());
        assert_eq!(
            err.to_string(),
            "Fetch error: GET /repos/a/b/actions/runs: 502"
        );
        assert!(!err.is_decode());
    }
}
