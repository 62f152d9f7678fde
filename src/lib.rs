//! s3vdu: A tool for reporting current and non-current version usage in S3.
//!
//! The scan itself is exposed here so that the statistics can be gathered
//! programmatically, against S3 or any other `VersionLister`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Types and traits shared by the rest of the crate.
pub mod common;

/// Progress notice shown while scanning.
pub mod progress;

/// Final summary of a scan.
pub mod report;

/// `ListObjectVersions` backed `VersionLister`.
pub mod s3;

/// Aggregation of listing pages into `AggregateStats`.
pub mod scanner;
