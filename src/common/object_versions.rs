// Records returned by a page of object version listing
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// One version of one object key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectVersion {
    /// Object key the version belongs to.
    pub key: String,

    /// Size of this version in bytes.
    pub size: u64,

    /// `true` if this is the current version of `key`.
    pub is_latest: bool,
}

/// A delete marker. These only ever count towards the number of markers,
/// they have no size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteMarker {
    /// Object key the marker was placed on.
    pub key: String,
}

/// Continuation state for fetching the page after this one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageMarker {
    /// Key to continue listing from.
    pub key_marker: Option<String>,

    /// Version ID to continue listing from, within `key_marker`.
    pub version_id_marker: Option<String>,
}

/// A single page of listing output.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VersionPage {
    /// Delete markers on this page, if any.
    pub delete_markers: Option<Vec<DeleteMarker>>,

    /// Object versions on this page, if any.
    pub versions: Option<Vec<ObjectVersion>>,

    /// Where the next page starts. `None` on the final page.
    pub next: Option<PageMarker>,
}

impl VersionPage {
    /// Returns `true` if there are no further pages after this one.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
