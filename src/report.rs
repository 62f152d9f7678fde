// Turns AggregateStats into the user facing summary
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    AggregateStats,
    ClientConfig,
    HumanSize,
    Result,
    VersionLister,
};
use crate::progress::Progress;
use crate::scanner;
use std::fmt;

/// Shown in place of the prefix when none was given.
pub const NO_PREFIX: &str = "(none)";

const SEPARATOR: &str = "----------";

/// Final statistics for a scan, with sizes already formatted.
///
/// This is what gets printed, but it can also be consumed directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Bucket that was scanned.
    pub bucket: String,

    /// Prefix that was scanned, or `NO_PREFIX`.
    pub prefix: String,

    /// Number of delete markers.
    pub delete_marker_count: u64,

    /// Number of current object versions.
    pub current_object_count: u64,

    /// Size of current object versions.
    pub current_object_size: String,

    /// Number of non-current object versions.
    pub versioned_object_count: u64,

    /// Size of non-current object versions.
    pub versioned_object_size: String,

    /// Size of current and non-current versions together.
    pub total_size: String,
}

impl Report {
    /// Build a `Report` from the finished `stats` of a scan.
    pub fn new(bucket: &str, prefix: Option<&str>, stats: &AggregateStats) -> Self {
        let prefix = match prefix {
            Some(prefix) if !prefix.is_empty() => prefix,
            _                                  => NO_PREFIX,
        };

        Self {
            bucket:                 bucket.to_owned(),
            prefix:                 prefix.to_owned(),
            delete_marker_count:    stats.delete_marker_count,
            current_object_count:   stats.current_object_count,
            current_object_size:    stats.current_object_size.human_size(),
            versioned_object_count: stats.versioned_object_count,
            versioned_object_size:  stats.versioned_object_size.human_size(),
            total_size:             stats.total_size().human_size(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "$ Bucket: {}", self.bucket)?;
        writeln!(f, "$ Prefix: {}", self.prefix)?;
        writeln!(f, "$ Delete markers: {}", self.delete_marker_count)?;
        writeln!(
            f,
            "$ Current objects: {} ({})",
            self.current_object_count,
            self.current_object_size,
        )?;
        writeln!(
            f,
            "$ Non-current objects: {} ({})",
            self.versioned_object_count,
            self.versioned_object_size,
        )?;
        writeln!(f, "$ Total size (current + non-current): {}", self.total_size)?;
        writeln!(f, "{}", SEPARATOR)?;
        write!(f, "$ Scan completed successfully")
    }
}

/// Render the summary for `bucket` and `prefix` as printed by the CLI.
pub fn render(bucket: &str, prefix: Option<&str>, stats: &AggregateStats) -> String {
    Report::new(bucket, prefix, stats).to_string()
}

/// Scan the bucket described by `config` and return the rendered summary.
///
/// On failure nothing is rendered, the error is handed back for the caller
/// to report.
pub async fn run(
    lister:   &dyn VersionLister,
    config:   &ClientConfig,
    progress: &Progress,
) -> Result<String> {
    let stats = scanner::aggregate(
        lister,
        &config.bucket_name,
        config.prefix(),
        progress,
    ).await?;

    Ok(render(&config.bucket_name, config.prefix(), &stats))
}
