// Error type shared by the listing backends, the scanner and the CLI
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use thiserror::Error;

/// Boxed underlying cause of a failed listing.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for `s3vdu` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a run.
///
/// None of these are retried, the caller reports them and exits.
#[derive(Debug, Error)]
pub enum Error {
    /// The bucket being scanned does not exist.
    #[error("bucket '{0}' does not exist")]
    BucketNotFound(String),

    /// Any other failure while listing object versions.
    #[error("failed to list object versions")]
    Listing(#[source] BoxError),

    /// Malformed command line input, raised before any listing starts.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap `cause` in a `Listing` error.
    pub fn listing<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Listing(cause.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let tests = vec![
            (Error::BucketNotFound("demo".into()), "bucket 'demo' does not exist"),
            (Error::listing("connection reset"),   "failed to list object versions"),
            (Error::InvalidInput("empty".into()),  "invalid input: empty"),
        ];

        for test in tests {
            let error    = test.0;
            let expected = test.1;

            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_listing_error_keeps_cause() {
        let error = Error::listing("connection reset");

        let source = error.source().map(ToString::to_string);

        assert_eq!(source.as_deref(), Some("connection reset"));
    }
}
