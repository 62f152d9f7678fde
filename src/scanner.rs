// Walks every page of a bucket's version listing and aggregates the results
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    AggregateStats,
    Result,
    VersionLister,
};
use crate::progress::Progress;
use std::time::Instant;
use tracing::{
    debug,
    info,
};

/// Aggregate every object version and delete marker in `bucket`, limited to
/// keys starting with `prefix` if one is given.
///
/// Pages are requested one at a time, each using the continuation marker of
/// the page before it, until the lister reports the final page. Any error
/// aborts the scan, no partial totals are returned.
pub async fn aggregate<L>(
    lister:   &L,
    bucket:   &str,
    prefix:   Option<&str>,
    progress: &Progress,
) -> Result<AggregateStats>
where
    L: VersionLister + ?Sized,
{
    info!("aggregate: Scanning '{}' with prefix {:?}", bucket, prefix);

    progress.start(bucket);

    let started    = Instant::now();
    let mut stats  = AggregateStats::default();
    let mut marker = None;
    let mut pages  = 0u64;

    loop {
        let page = lister.list_versions(bucket, prefix, marker.as_ref()).await?;
        pages += 1;

        stats.add_page(&page);

        debug!(
            "aggregate: page {} for '{}', running totals {:?}",
            pages,
            bucket,
            stats,
        );

        progress.update(pages, &stats);

        match page.next {
            Some(next) => marker = Some(next),
            None       => break,
        }
    }

    progress.finish();

    info!(
        "aggregate: Finished '{}', {} version(s) over {} page(s) in {:?}",
        bucket,
        stats.object_count(),
        pages,
        started.elapsed(),
    );

    Ok(stats)
}
