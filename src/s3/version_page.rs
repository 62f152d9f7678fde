// Easily handle converting from a ListObjectVersionsOutput into a VersionPage
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsOutput;
use aws_sdk_s3::types::ObjectVersion as S3ObjectVersion;
use crate::common::{
    DeleteMarker,
    Error,
    ObjectVersion,
    PageMarker,
    Result,
    VersionPage,
};

/// Implement a conversion from `ListObjectVersionsOutput` to `VersionPage`.
///
/// This fails if a version is missing its size or `IsLatest` flag, has a
/// negative size, or if the output is truncated without telling us where
/// the next page starts.
impl TryFrom<ListObjectVersionsOutput> for VersionPage {
    type Error = Error;

    fn try_from(output: ListObjectVersionsOutput) -> Result<Self> {
        let versions = output.versions()
            .iter()
            .map(object_version)
            .collect::<Result<Vec<_>>>()?;

        let delete_markers: Vec<DeleteMarker> = output.delete_markers()
            .iter()
            .map(|m| DeleteMarker {
                key: m.key().unwrap_or_default().to_owned(),
            })
            .collect();

        // If the output was truncated (Some(true)), we should have next
        // markers. If it wasn't, (Some(false) | None) this is the last page.
        let next = match output.is_truncated() {
            Some(true) => Some(next_marker(&output)?),
            _          => None,
        };

        Ok(Self {
            delete_markers: non_empty(delete_markers),
            versions:       non_empty(versions),
            next:           next,
        })
    }
}

fn object_version(version: &S3ObjectVersion) -> Result<ObjectVersion> {
    let key = version.key().unwrap_or_default();

    let is_latest = version.is_latest().ok_or_else(|| {
        Error::listing(format!("version of '{}' has no IsLatest flag", key))
    })?;

    let size = version.size().ok_or_else(|| {
        Error::listing(format!("version of '{}' has no size", key))
    })?;

    let size = u64::try_from(size).map_err(|_| {
        Error::listing(format!("version of '{}' has negative size {}", key, size))
    })?;

    Ok(ObjectVersion {
        key:       key.to_owned(),
        size:      size,
        is_latest: is_latest,
    })
}

// Requesting again without any marker would return the first page and loop
// forever, so a truncated page must carry at least one.
fn next_marker(output: &ListObjectVersionsOutput) -> Result<PageMarker> {
    let key_marker        = output.next_key_marker().map(ToOwned::to_owned);
    let version_id_marker = output.next_version_id_marker().map(ToOwned::to_owned);

    if key_marker.is_none() && version_id_marker.is_none() {
        return Err(Error::listing("truncated listing has no continuation markers"));
    }

    Ok(PageMarker {
        key_marker,
        version_id_marker,
    })
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    }
    else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::types::DeleteMarkerEntry;
    use pretty_assertions::assert_eq;

    fn s3_version(key: &str, size: i64, is_latest: bool) -> S3ObjectVersion {
        S3ObjectVersion::builder()
            .key(key)
            .version_id(format!("{}-{}", key, size))
            .size(size)
            .is_latest(is_latest)
            .build()
    }

    fn s3_marker(key: &str) -> DeleteMarkerEntry {
        DeleteMarkerEntry::builder()
            .key(key)
            .is_latest(true)
            .build()
    }

    #[test]
    fn test_version_page_from_final_page() {
        let output = ListObjectVersionsOutput::builder()
            .versions(s3_version("report.csv", 2048, true))
            .versions(s3_version("report.csv", 512, false))
            .delete_markers(s3_marker("deleted.txt"))
            .is_truncated(false)
            .build();

        let page = VersionPage::try_from(output).unwrap();

        let expected = VersionPage {
            delete_markers: Some(vec![
                DeleteMarker { key: "deleted.txt".into() },
            ]),
            versions:       Some(vec![
                ObjectVersion {
                    key:       "report.csv".into(),
                    size:      2048,
                    is_latest: true,
                },
                ObjectVersion {
                    key:       "report.csv".into(),
                    size:      512,
                    is_latest: false,
                },
            ]),
            next:           None,
        };

        assert_eq!(page, expected);
        assert!(page.is_last());
    }

    #[test]
    fn test_version_page_from_empty_output() {
        let output = ListObjectVersionsOutput::builder().build();

        let page = VersionPage::try_from(output).unwrap();

        assert_eq!(page, VersionPage::default());
    }

    #[test]
    fn test_version_page_truncated() {
        let output = ListObjectVersionsOutput::builder()
            .versions(s3_version("a", 1, true))
            .is_truncated(true)
            .next_key_marker("a")
            .next_version_id_marker("a-1")
            .build();

        let page = VersionPage::try_from(output).unwrap();

        let expected = Some(PageMarker {
            key_marker:        Some("a".into()),
            version_id_marker: Some("a-1".into()),
        });

        assert_eq!(page.next, expected);
        assert!(!page.is_last());
    }

    #[test]
    fn test_version_page_truncated_without_markers() {
        let output = ListObjectVersionsOutput::builder()
            .versions(s3_version("a", 1, true))
            .is_truncated(true)
            .build();

        let ret = VersionPage::try_from(output);

        assert!(matches!(ret, Err(Error::Listing(_))));
    }

    #[test]
    fn test_version_page_invalid_versions() {
        let tests = vec![
            // Negative size
            s3_version("negative", -1, true),
            // No IsLatest
            S3ObjectVersion::builder().key("no-latest").size(1).build(),
            // No Size
            S3ObjectVersion::builder().key("no-size").is_latest(false).build(),
        ];

        for version in tests {
            let output = ListObjectVersionsOutput::builder()
                .versions(version)
                .build();

            let ret = VersionPage::try_from(output);

            assert!(matches!(ret, Err(Error::Listing(_))));
        }
    }
}
