use dioxus::prelude::*;
use sitesmith_client::{Store, StoreState};
use std::sync::Arc;

/// Mirror a client store into a signal so the calling component re-renders after
/// every store change. The subscription is dropped with the component.
pub fn use_store<T, S>(owner: Arc<T>, store: fn(&T) -> &Store<S>) -> SyncSignal<S>
where
    T: Send + Sync + 'static,
    S: StoreState,
{
    let state = use_signal_sync(|| store(&owner).snapshot());
    let subscription = use_hook(|| {
        store(&owner).subscribe(move |next: &S| {
            let mut state = state;
            state.set(next.clone());
        })
    });
    use_drop(move || store(&owner).unsubscribe(subscription));
    state
}
