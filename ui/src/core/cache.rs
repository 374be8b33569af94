//! Process-lifetime snapshot cache.
//!
//! The cache is an explicit object: the app creates one at startup and hands it to
//! components through the Dioxus context. Ingestion runs at most once per cache; callers
//! that arrive while it is in flight await the same shared future. Reshaped snapshots are
//! memoized per metric on top of that single ingestion, so a second request for a metric
//! gets the very same `Rc<Snapshot>` back.
//!
//! Failures are cached as well. A failed ingestion stays failed until the process restarts.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use tracing::debug;

use super::ingest::{IngestError, Ingested};
use super::records::Metric;
use super::snapshot::Snapshot;

type SharedIngest = Shared<LocalBoxFuture<'static, Result<Rc<Ingested>, IngestError>>>;

#[derive(Clone, Default)]
pub struct SnapshotCache {
    inner: Rc<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    ingest: RefCell<Option<SharedIngest>>,
    snapshots: RefCell<BTreeMap<Metric, Rc<Snapshot>>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot for `metric`, running `load` only if nothing has been ingested yet.
    pub async fn get_or_populate<F, Fut>(
        &self,
        metric: Metric,
        load: F,
    ) -> Result<Rc<Snapshot>, IngestError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Ingested, IngestError>> + 'static,
    {
        if let Some(snapshot) = self.peek(metric) {
            debug!(?metric, "snapshot cache hit");
            return Ok(snapshot);
        }

        // The slot borrow ends inside `ingestion`, before this await.
        let ingested = self.ingestion(load).await?;

        let mut snapshots = self.inner.snapshots.borrow_mut();
        let snapshot = snapshots
            .entry(metric)
            .or_insert_with(|| {
                debug!(?metric, "reshaping snapshot");
                Rc::new(Snapshot::build(&ingested, metric))
            })
            .clone();
        Ok(snapshot)
    }

    /// Already-built snapshot for `metric`, without suspending.
    pub fn peek(&self, metric: Metric) -> Option<Rc<Snapshot>> {
        self.inner.snapshots.borrow().get(&metric).cloned()
    }

    fn ingestion<F, Fut>(&self, load: F) -> SharedIngest
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Ingested, IngestError>> + 'static,
    {
        self.inner
            .ingest
            .borrow_mut()
            .get_or_insert_with(|| {
                debug!("starting ingestion");
                load().map(|result| result.map(Rc::new)).boxed_local().shared()
            })
            .clone()
    }
}

impl PartialEq for SnapshotCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::parse_csv;
    use futures::executor::block_on;
    use futures::future::poll_fn;
    use std::cell::Cell;
    use std::task::Poll;

    const CSV: &str = "\
date,state,median,upper_90
2021-01-01,AL,1.2,1.5
2021-01-01,CO,0.9,1.1
2021-01-02,AL,1.1,1.4
";

    async fn yield_once() {
        let mut yielded = false;
        poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }

    fn counting_loader(
        calls: Rc<Cell<usize>>,
    ) -> impl FnOnce() -> LocalBoxFuture<'static, Result<Ingested, IngestError>> {
        move || {
            calls.set(calls.get() + 1);
            async move {
                yield_once().await;
                parse_csv(CSV, None)
            }
            .boxed_local()
        }
    }

    #[test]
    fn sequential_calls_ingest_once_and_share_the_snapshot() {
        let cache = SnapshotCache::new();
        let calls = Rc::new(Cell::new(0));

        let first = block_on(cache.get_or_populate(Metric::Median, counting_loader(calls.clone())))
            .unwrap();
        for _ in 0..3 {
            let again =
                block_on(cache.get_or_populate(Metric::Median, counting_loader(calls.clone())))
                    .unwrap();
            assert!(Rc::ptr_eq(&first, &again));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn concurrent_first_calls_coalesce() {
        let cache = SnapshotCache::new();
        let calls = Rc::new(Cell::new(0));

        let (a, b) = block_on(async {
            futures::join!(
                cache.get_or_populate(Metric::Median, counting_loader(calls.clone())),
                cache.get_or_populate(Metric::Median, counting_loader(calls.clone())),
            )
        });

        assert_eq!(calls.get(), 1);
        assert!(Rc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[test]
    fn other_metrics_reuse_the_ingestion() {
        let cache = SnapshotCache::new();
        let calls = Rc::new(Cell::new(0));

        let median = block_on(cache.get_or_populate(Metric::Median, counting_loader(calls.clone())))
            .unwrap();
        let upper = block_on(cache.get_or_populate(Metric::Upper90, counting_loader(calls.clone())))
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(median.metric, Metric::Median);
        assert_eq!(upper.metric, Metric::Upper90);
        assert!(!Rc::ptr_eq(&median, &upper));
        assert!(Rc::ptr_eq(&upper, &cache.peek(Metric::Upper90).unwrap()));
    }

    #[test]
    fn failures_are_terminal() {
        let cache = SnapshotCache::new();
        let calls = Rc::new(Cell::new(0));

        let failing = {
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                async { Err(IngestError::Status(503)) }
            }
        };
        let err = block_on(cache.get_or_populate(Metric::Median, failing)).unwrap_err();
        assert_eq!(err, IngestError::Status(503));

        let err = block_on(cache.get_or_populate(Metric::Median, counting_loader(calls.clone())))
            .unwrap_err();
        assert_eq!(err, IngestError::Status(503));
        assert_eq!(calls.get(), 1);
        assert!(cache.peek(Metric::Median).is_none());
    }

    #[test]
    fn clones_share_state() {
        let cache = SnapshotCache::new();
        let handle = cache.clone();
        let calls = Rc::new(Cell::new(0));

        let a = block_on(cache.get_or_populate(Metric::Median, counting_loader(calls.clone())))
            .unwrap();
        let b = block_on(handle.get_or_populate(Metric::Median, counting_loader(calls.clone())))
            .unwrap();

        assert!(cache == handle);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);
    }
}
