// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// S3 `Client`.
mod client;

/// Implementation of the `VersionLister` trait for our S3 `Client`.
mod version_lister;

/// Conversion of `ListObjectVersions` output into a `VersionPage`.
mod version_page;

pub use client::*;
