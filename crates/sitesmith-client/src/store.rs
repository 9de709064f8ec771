//! Observable state containers.
//!
//! A [`Store`] owns one state value behind a lock and notifies subscribers after
//! every change. Stores are built once at startup and handed to whoever needs them;
//! there are no globals.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use thiserror::Error;

use sitesmith_engine::RequestTracker;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A newer request for the same data was started; this result was dropped.
    #[error("Request superseded by a newer one")]
    Superseded,
}

/// Loading flag and last error shared by every store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub loading: bool,
    pub error: Option<String>,
}

pub trait StoreState: Clone + Send + Sync + 'static {
    fn status(&self) -> &Status;
    fn status_mut(&mut self) -> &mut Status;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

pub struct Store<S> {
    state: RwLock<S>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber<S>)>>,
    next_subscription: AtomicU64,
}

impl<S: StoreState> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> S {
        self.read(S::clone)
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Call `f` with the new state after every change.
    pub fn subscribe(&self, f: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(sub, _)| *sub != id);
    }

    pub fn clear_error(&self) {
        self.update(|s| s.status_mut().error = None);
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut S)) {
        let snapshot = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
            state.clone()
        };
        // Notify outside the state lock so subscribers may read the store
        let subscribers: Vec<Subscriber<S>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, f)| Arc::clone(f))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    /// Run one API call with loading/error bookkeeping.
    ///
    /// With a `tracker`, only the most recent call of that operation may touch the
    /// state; older ones resolve to [`StoreError::Superseded`]. Without one, every
    /// result is applied.
    pub(crate) async fn run<T, F>(
        &self,
        operation: &'static str,
        tracker: Option<&RequestTracker>,
        call: F,
        apply: impl FnOnce(&mut S, &T),
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let token = tracker.map(RequestTracker::begin);
        self.update(|s| {
            let status = s.status_mut();
            status.loading = true;
            status.error = None;
        });

        let result = call.await;

        if let (Some(tracker), Some(token)) = (tracker, token) {
            if !tracker.is_current(token) {
                log::debug!("{operation}: dropping superseded response #{}", token.sequence());
                return Err(StoreError::Superseded);
            }
        }

        match result {
            Ok(value) => {
                self.update(|s| {
                    apply(s, &value);
                    s.status_mut().loading = false;
                });
                Ok(value)
            }
            Err(err) => {
                log::warn!("{operation} failed: {err}");
                self.update(|s| {
                    let status = s.status_mut();
                    status.loading = false;
                    status.error = Some(err.to_string());
                });
                Err(err.into())
            }
        }
    }
}

/// One [`RequestTracker`] per record id, so repeated saves of the same record
/// supersede each other while saves of different records do not.
#[derive(Debug, Default)]
pub(crate) struct RecordTrackers {
    trackers: Mutex<HashMap<i64, Arc<RequestTracker>>>,
}

impl RecordTrackers {
    pub(crate) fn for_record(&self, id: i64) -> Arc<RequestTracker> {
        let mut trackers = self.trackers.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(trackers.entry(id).or_default())
    }
}

impl<S: StoreState + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: i32,
        status: Status,
    }

    impl StoreState for Counter {
        fn status(&self) -> &Status {
            &self.status
        }
        fn status_mut(&mut self) -> &mut Status {
            &mut self.status
        }
    }

    #[test]
    fn test_subscribers_see_every_update_until_unsubscribed() {
        let store = Store::<Counter>::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |s| sink.lock().unwrap().push(s.value));

        store.update(|s| s.value = 1);
        store.update(|s| s.value = 2);
        store.unsubscribe(id);
        store.update(|s| s.value = 3);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert_eq!(store.snapshot().value, 3);
    }

    #[tokio::test]
    async fn test_run_records_error_and_clears_loading() {
        let store = Store::<Counter>::default();

        let result = store
            .run(
                "bump",
                None,
                async {
                    Err::<i32, _>(ApiError::Status {
                        status: 403,
                        message: "Forbidden".to_string(),
                    })
                },
                |s, v| s.value = *v,
            )
            .await;

        assert!(matches!(result, Err(StoreError::Api(_))));
        let state = store.snapshot();
        assert!(!state.status.loading);
        assert_eq!(state.status.error.as_deref(), Some("Forbidden"));

        store.clear_error();
        assert_eq!(store.snapshot().status.error, None);
    }

    #[tokio::test]
    async fn test_run_drops_superseded_result() {
        let store = Store::<Counter>::default();
        let tracker = RequestTracker::new();

        let result = store
            .run(
                "bump",
                Some(&tracker),
                async {
                    // A newer call starts while this one is in flight
                    tracker.begin();
                    Ok(5)
                },
                |s, v| s.value = *v,
            )
            .await;

        assert_eq!(result, Err(StoreError::Superseded));
        assert_eq!(store.snapshot().value, 0);
    }

    #[test]
    fn test_record_trackers_are_shared_per_id() {
        let trackers = RecordTrackers::default();
        let first = trackers.for_record(1).begin();

        trackers.for_record(2).begin();
        assert!(trackers.for_record(1).is_current(first));

        trackers.for_record(1).begin();
        assert!(!trackers.for_record(1).is_current(first));
    }
}
