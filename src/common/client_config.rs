// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    Error,
    Result,
};
use tracing::debug;

/// Client configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    /// The bucket name that the client should report the usage of.
    pub bucket_name: String,

    /// Only object keys starting with this prefix are counted.
    ///
    /// An empty prefix on the command line is the same as no prefix.
    pub prefix: Option<String>,
}

impl ClientConfig {
    /// Return a new `ClientConfig` after validating the inputs.
    ///
    /// The bucket name must be non-blank and must not contain a `/`, anything
    /// else is left for the storage service to reject.
    pub fn new(bucket_name: &str, prefix: Option<&str>) -> Result<Self> {
        debug!("ClientConfig: bucket {:?}, prefix {:?}", bucket_name, prefix);

        if bucket_name.trim().is_empty() {
            return Err(Error::InvalidInput("bucket name must not be empty".into()));
        }

        if bucket_name.contains('/') {
            let msg = format!("bucket name '{}' must not contain '/'", bucket_name);

            return Err(Error::InvalidInput(msg));
        }

        let prefix = prefix
            .filter(|p| !p.is_empty())
            .map(ToOwned::to_owned);

        Ok(Self {
            bucket_name: bucket_name.to_owned(),
            prefix:      prefix,
        })
    }

    /// The prefix as a borrowed `&str`, if set.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}
