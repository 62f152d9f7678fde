// VersionLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    PageMarker,
    Result,
    VersionPage,
};

/// `VersionLister` represents a paginated source of object versions and
/// delete markers for a bucket.
///
/// Implementations must return `Error::BucketNotFound` when the bucket does
/// not exist and `Error::Listing` for every other failure.
#[async_trait]
pub trait VersionLister {
    /// Returns the page starting at `marker`, or the first page if `marker`
    /// is `None`.
    async fn list_versions(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        marker: Option<&PageMarker>,
    ) -> Result<VersionPage>;
}
