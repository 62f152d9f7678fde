// AggregateStats accumulates counts and sizes over listing pages
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    ObjectVersion,
    VersionPage,
};

/// Running totals for a bucket scan.
///
/// Every field only ever grows while pages are added. Byte totals are
/// `u128` so summing `u64` object sizes can't overflow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AggregateStats {
    /// Number of delete markers seen.
    pub delete_marker_count: u64,

    /// Number of current (latest) object versions.
    pub current_object_count: u64,

    /// Total size of current object versions in bytes.
    pub current_object_size: u128,

    /// Number of non-current object versions.
    pub versioned_object_count: u64,

    /// Total size of non-current object versions in bytes.
    pub versioned_object_size: u128,
}

impl AggregateStats {
    /// Add every record on `page` to the totals.
    pub fn add_page(&mut self, page: &VersionPage) {
        if let Some(markers) = &page.delete_markers {
            self.delete_marker_count += markers.len() as u64;
        }

        if let Some(versions) = &page.versions {
            for version in versions {
                self.add_version(version);
            }
        }
    }

    /// Classify a single object version by its `is_latest` flag.
    pub fn add_version(&mut self, version: &ObjectVersion) {
        let size = u128::from(version.size);

        if version.is_latest {
            self.current_object_count += 1;
            self.current_object_size  += size;
        }
        else {
            self.versioned_object_count += 1;
            self.versioned_object_size  += size;
        }
    }

    /// Size of current and non-current versions together.
    ///
    /// Delete markers have no size and never contribute.
    pub fn total_size(&self) -> u128 {
        self.current_object_size + self.versioned_object_size
    }

    /// Total number of object versions seen, regardless of classification.
    pub fn object_count(&self) -> u64 {
        self.current_object_count + self.versioned_object_count
    }
}
