//! Reactive Context
//!
//! The reactive context tracks which computation is currently running.
//! This enables automatic dependency tracking: when a data source is read,
//! it can register the current computation as a dependent.
//!
//! # Implementation
//!
//! A single mutable slot for "the current computation" breaks as soon as a
//! computation awaits: another task (or another future polled by the same
//! task) runs in the gap and sees, or overwrites, the wrong value.
//!
//! Instead the active computation lives in a tokio task-local. [`scope`]
//! wraps a future so that the value is swapped in every time the future is
//! polled and swapped back out when it returns `Pending`. Every suspension
//! and resumption inside the future therefore observes the same computation,
//! while unrelated futures interleaved with it observe their own.
//!
//! Scopes nest: the innermost scope wins and the previous value is restored
//! when it completes, even if the inner future panics.

use std::future::Future;

use super::Computation;

tokio::task_local! {
    static CURRENT: Option<Computation>;
}

/// Get the active computation, if any.
///
/// Returns `None` outside of any scope as well as inside a scope that was
/// explicitly cleared (see [`crate::reactive::nonreactive`]).
pub fn current() -> Option<Computation> {
    CURRENT.try_with(|current| current.clone()).ok().flatten()
}

/// Check if there is an active computation.
pub fn is_active() -> bool {
    CURRENT
        .try_with(|current| current.is_some())
        .unwrap_or(false)
}

/// Run `future` with `computation` active for its whole execution.
pub async fn scope<F>(computation: Option<Computation>, future: F) -> F::Output
where
    F: Future,
{
    if let Some(computation) = &computation {
        tracing::trace!(computation = %computation.id(), "entering reactive scope");
    }
    CURRENT.scope(computation, future).await
}

/// Run `f` synchronously with `computation` active.
pub fn sync_scope<R>(computation: Option<Computation>, f: impl FnOnce() -> R) -> R {
    CURRENT.sync_scope(computation, f)
}
