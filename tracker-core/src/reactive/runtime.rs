//! Reactive Runtime
//!
//! Free-function entry points that tie the context, computations and
//! dependencies together.
//!
//! # How It Works
//!
//! 1. [`autorun`] creates a computation (a child of the active one unless the
//!    options say otherwise) and awaits its first run.
//!
//! 2. While the computation runs, every source it reads records it as a
//!    dependent.
//!
//! 3. When a source changes, each dependent is invalidated and rerun.
//!
//! There is no scheduler thread or event loop: all work happens on whatever
//! task calls into the engine.

use std::future::Future;

use tokio::task::JoinHandle;

use super::{context, AutorunOptions, Computation};
use crate::error::{Result, TrackerError};

/// Create a computation and run it for the first time.
///
/// The computation becomes a child of the active computation unless
/// `options` names an explicit parent or asks for a root. If the first run
/// fails, the computation is stopped and the failure returned.
///
/// # Errors
///
/// - [`TrackerError::InvalidArgument`] if the explicit parent is stopped.
/// - [`TrackerError::FirstRun`] if the function fails on its first run.
pub async fn autorun<F, Fut>(func: F, options: AutorunOptions) -> Result<Computation>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    if let Some(parent) = options.explicit_parent() {
        if parent.is_stopped() {
            return Err(TrackerError::invalid_argument(format!(
                "parent computation {} is stopped",
                parent.id()
            )));
        }
    }

    let computation = Computation::new(func, options);
    if let Err(error) = computation.start().await {
        computation.stop();
        return Err(error);
    }
    Ok(computation)
}

/// Get the computation currently executing, if any.
pub fn current_computation() -> Option<Computation> {
    context::current()
}

/// Check if a computation is currently executing.
pub fn is_tracking() -> bool {
    context::is_active()
}

/// Run `f` with no active computation, so nothing it reads is tracked.
///
/// The previously active computation is restored afterwards.
pub async fn nonreactive<F, Fut>(f: F) -> Fut::Output
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    context::scope(None, async move { f().await }).await
}

/// Synchronous form of [`nonreactive`].
pub fn nonreactive_sync<R>(f: impl FnOnce() -> R) -> R {
    context::sync_scope(None, f)
}

/// Spawn a task that inherits the active computation.
///
/// Plain `tokio::spawn` starts the task with no active computation.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(context::scope(context::current(), future))
}
