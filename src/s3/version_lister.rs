// Implement the VersionLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    PageMarker,
    Result,
    VersionLister,
    VersionPage,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl VersionLister for Client {
    /// Return one page of `ListObjectVersions` output for `bucket`.
    async fn list_versions(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        marker: Option<&PageMarker>,
    ) -> Result<VersionPage> {
        let output = self.list_object_versions(bucket, prefix, marker).await?;
        let page   = VersionPage::try_from(output)?;

        debug!(
            "list_versions: '{}' returned {} version(s), {} delete marker(s), last page: {}",
            bucket,
            page.versions.as_ref().map_or(0, Vec::len),
            page.delete_markers.as_ref().map_or(0, Vec::len),
            page.is_last(),
        );

        Ok(page)
    }
}
