// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::error::{
    ProvideErrorMetadata,
    SdkError,
};
use aws_sdk_s3::operation::list_object_versions::{
    ListObjectVersionsError,
    ListObjectVersionsOutput,
};
use crate::common::{
    BoxError,
    Error,
    PageMarker,
    Result,
};
use tracing::debug;

/// Region used when none can be found in the environment or AWS profile.
const DEFAULT_REGION: &str = "us-east-1";

/// Error code S3 returns when listing a bucket that doesn't exist.
const NO_SUCH_BUCKET: &str = "NoSuchBucket";

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client`.
    ///
    /// Credentials and region come from the usual AWS provider chains, with
    /// the region falling back to `us-east-1`.
    pub async fn new() -> Self {
        let region = RegionProviderChain::default_provider()
            .or_else(DEFAULT_REGION);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        debug!(
            "new: Creating S3Client in region '{}'",
            config.region().map_or("unknown", |r| r.as_ref()),
        );

        let client = S3Client::new(&config);

        Self {
            client,
        }
    }

    /// Fetch one page of object versions from `bucket`, starting at `marker`.
    pub async fn list_object_versions(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        marker: Option<&PageMarker>,
    ) -> Result<ListObjectVersionsOutput> {
        debug!(
            "list_object_versions: '{}' prefix {:?} marker {:?}",
            bucket,
            prefix,
            marker,
        );

        let marker = marker.cloned().unwrap_or_default();

        self.client.list_object_versions()
            .bucket(bucket)
            .set_prefix(prefix.map(ToOwned::to_owned))
            .set_key_marker(marker.key_marker)
            .set_version_id_marker(marker.version_id_marker)
            .send()
            .await
            .map_err(|e| sdk_error(bucket, e))
    }
}

// Pull the service error code out of the SDK error, if there is one, before
// classifying it.
fn sdk_error(bucket: &str, error: SdkError<ListObjectVersionsError>) -> Error {
    let code = error
        .as_service_error()
        .and_then(|e| e.code())
        .map(ToOwned::to_owned);

    debug!("list_object_versions failed for '{}', code {:?}", bucket, code);

    listing_error(bucket, code.as_deref(), error)
}

/// Map a failed listing of `bucket` to our `Error`.
///
/// A `NoSuchBucket` code becomes `Error::BucketNotFound`, anything else is an
/// `Error::Listing` wrapping `cause`.
pub fn listing_error<E>(bucket: &str, code: Option<&str>, cause: E) -> Error
where
    E: Into<BoxError>,
{
    match code {
        Some(NO_SUCH_BUCKET) => Error::BucketNotFound(bucket.to_owned()),
        _                    => Error::listing(cause),
    }
}
