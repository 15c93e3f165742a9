//! Computation Implementation
//!
//! A Computation is a side-effecting async function that reruns whenever the
//! data sources it read during its last run change.
//!
//! # Lifecycle
//!
//! ```text
//! Created -> Running -> Idle(clean) / Idle(invalidated) -> Running -> ... -> Stopped
//! ```
//!
//! 1. [`Computation::new`] creates the computation and attaches it to its
//!    parent. Nothing runs yet; a fresh computation is "invalidated" in the
//!    sense that it is waiting for its first run.
//!
//! 2. [`Computation::start`] performs the first run. A failure here is
//!    returned to the caller because there is no earlier good state to keep.
//!    [`Computation::ready`] lets other tasks wait for that first run.
//!
//! 3. While the function runs, the computation is the active one in the
//!    reactive context, so every source it reads registers it as a dependent.
//!
//! 4. When a source changes it calls [`Computation::run`] on each dependent:
//!    the computation is invalidated (dropping its registrations and stopping
//!    its children) and then flushed (rerun).
//!
//! 5. [`Computation::stop`] is terminal. A run already in flight completes,
//!    but nothing ever reruns the function again.
//!
//! # Convergence
//!
//! If the computation is invalidated while it is running (a source it already
//! read changes while it is suspended, or the function invalidates itself),
//! the flush triggered by that change is a no-op. Instead the run-cycle
//! notices the flag when the function returns and immediately runs again, so
//! one call to `flush` always settles on a result computed from current data.
//! Registrations and children made by the remainder of the invalidated run
//! are released before running again.
//! A function that invalidates itself on every run never settles.
//!
//! # Children
//!
//! A computation created while another one is running becomes its child.
//! The parent owns its children and stops all of them whenever it is
//! invalidated or stopped, so every rerun starts from a clean slate and
//! recreates whatever children it needs.

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Weak};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use indexmap::IndexMap;
use parking_lot::{Mutex, MutexGuard};
use smallvec::smallvec;
use tokio::sync::watch;

use super::context;
use super::hooks::{self, Hook, HookKind, HookList, Teardown};
use super::ComputationId;
use crate::error::{Result, TrackerError};

type RunFn = Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Handler for failures of any run after the first.
pub type ErrorHandler = Arc<dyn Fn(&Computation, anyhow::Error) + Send + Sync>;

/// How the parent of a new computation is chosen.
#[derive(Clone, Default)]
enum ParentChoice {
    /// Whatever computation is active when the computation is created.
    #[default]
    Inherit,
    /// No parent, even if a computation is active.
    Root,
    /// An explicit parent.
    Explicit(Computation),
}

/// Options for creating a computation.
///
/// # Example
///
/// ```rust,ignore
/// let options = AutorunOptions::new()
///     .name("user-feed")
///     .on_error(|computation, error| eprintln!("{computation:?}: {error:#}"));
/// ```
#[derive(Clone, Default)]
pub struct AutorunOptions {
    name: Option<String>,
    parent: ParentChoice,
    on_error: Option<ErrorHandler>,
}

impl AutorunOptions {
    /// Options with an inherited parent and no error handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a computation that never has a parent.
    pub fn root() -> Self {
        Self {
            parent: ParentChoice::Root,
            ..Self::default()
        }
    }

    /// Attach a name used in logs and `Debug` output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use `parent` instead of the active computation.
    pub fn parent(mut self, parent: &Computation) -> Self {
        self.parent = ParentChoice::Explicit(parent.clone());
        self
    }

    /// Route failures of reruns to `handler` instead of logging them.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Computation, anyhow::Error) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    pub(crate) fn explicit_parent(&self) -> Option<&Computation> {
        match &self.parent {
            ParentChoice::Explicit(parent) => Some(parent),
            _ => None,
        }
    }

    fn resolve_parent(&self) -> Option<Computation> {
        match &self.parent {
            ParentChoice::Inherit => context::current(),
            ParentChoice::Root => None,
            ParentChoice::Explicit(parent) => Some(parent.clone()),
        }
    }
}

impl fmt::Debug for AutorunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = match &self.parent {
            ParentChoice::Inherit => "inherit".to_string(),
            ParentChoice::Root => "root".to_string(),
            ParentChoice::Explicit(parent) => parent.id().to_string(),
        };
        f.debug_struct("AutorunOptions")
            .field("name", &self.name)
            .field("parent", &parent)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// A managed async computation with automatic rerun.
///
/// Cloning yields another handle to the same computation.
#[derive(Clone)]
pub struct Computation {
    inner: Arc<Inner>,
}

struct Inner {
    id: ComputationId,
    name: Option<String>,
    func: RunFn,
    on_error: Option<ErrorHandler>,
    parent: Option<Weak<Inner>>,
    state: Mutex<State>,

    /// Flips to `true` once the first run-cycle finished or the computation
    /// was stopped.
    settled: watch::Sender<bool>,
}

struct State {
    first_run: bool,
    running: bool,
    invalidated: bool,
    stopped: bool,

    before_run: HookList,
    after_run: HookList,
    on_invalidate: HookList,
    on_stop: HookList,

    /// Children created during the current run, owned by this computation.
    children: IndexMap<ComputationId, Computation>,

    /// One-shot cleanups fired on the next invalidate or stop.
    teardown: Vec<Teardown>,
}

impl Computation {
    /// Create a computation without running it.
    ///
    /// The parent is taken from `options`, defaulting to the computation
    /// active in the current reactive context. Call [`Computation::start`]
    /// to perform the first run, or use [`crate::reactive::autorun`] which
    /// does both.
    pub fn new<F, Fut>(func: F, options: AutorunOptions) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let parent = options.resolve_parent();
        let (settled, _) = watch::channel(false);

        let computation = Self {
            inner: Arc::new(Inner {
                id: ComputationId::next(),
                name: options.name,
                func: Box::new(move || func().boxed()),
                on_error: options.on_error,
                parent: parent.as_ref().map(|parent| Arc::downgrade(&parent.inner)),
                state: Mutex::new(State {
                    first_run: true,
                    running: false,
                    invalidated: true,
                    stopped: false,
                    before_run: HookList::default(),
                    after_run: HookList::default(),
                    on_invalidate: HookList::default(),
                    on_stop: HookList::default(),
                    children: IndexMap::new(),
                    teardown: Vec::new(),
                }),
                settled,
            }),
        };

        tracing::debug!(
            computation = %computation.id(),
            name = computation.name(),
            parent = parent.as_ref().map(|p| p.id().raw()),
            "computation created"
        );

        if let Some(parent) = parent {
            parent.adopt(&computation);
        }

        computation
    }

    /// Get the computation's unique ID.
    pub fn id(&self) -> ComputationId {
        self.inner.id
    }

    /// Get the computation's name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Get the parent computation, if it is still alive.
    pub fn parent(&self) -> Option<Computation> {
        self.inner
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Computation { inner })
    }

    /// True until the first run-cycle has finished.
    pub fn is_first_run(&self) -> bool {
        self.state().first_run
    }

    /// True while the function is executing.
    pub fn is_running(&self) -> bool {
        self.state().running
    }

    /// True if the computation needs to run again.
    pub fn is_invalidated(&self) -> bool {
        self.state().invalidated
    }

    /// True once the computation has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.state().stopped
    }

    /// Number of live children created during the current run.
    pub fn child_count(&self) -> usize {
        self.state().children.len()
    }

    /// Register a callback invoked at the start of every run.
    pub fn before_run(&self, hook: impl Fn(&Computation) + Send + Sync + 'static) {
        self.state().before_run.push(Arc::new(hook));
    }

    /// Register a callback invoked at the end of every run.
    pub fn after_run(&self, hook: impl Fn(&Computation) + Send + Sync + 'static) {
        self.state().after_run.push(Arc::new(hook));
    }

    /// Register a callback invoked every time the computation is invalidated.
    pub fn on_invalidate(&self, hook: impl Fn(&Computation) + Send + Sync + 'static) {
        self.state().on_invalidate.push(Arc::new(hook));
    }

    /// Register a callback invoked when the computation stops.
    ///
    /// If the computation is already stopped the callback runs immediately.
    pub fn on_stop(&self, hook: impl Fn(&Computation) + Send + Sync + 'static) {
        let hook: Hook = Arc::new(hook);
        let stopped = {
            let mut state = self.state();
            if !state.stopped {
                state.on_stop.push(hook.clone());
            }
            state.stopped
        };

        if stopped {
            hooks::invoke(HookKind::Stop, smallvec![hook], self);
        }
    }

    /// Perform the first run, if it has not happened yet.
    ///
    /// Returns [`TrackerError::FirstRun`] if the function fails.
    pub async fn start(&self) -> Result<()> {
        if !self.is_first_run() {
            return Ok(());
        }
        self.flush().await
    }

    /// Wait until the first run has finished or the computation stopped.
    pub async fn ready(&self) {
        let mut settled = self.inner.settled.subscribe();
        loop {
            let done = *settled.borrow_and_update();
            if done || settled.changed().await.is_err() {
                return;
            }
        }
    }

    /// Mark the computation as needing a rerun.
    ///
    /// Drops the computation from every dependency it registered with, stops
    /// its children, and fires the `on_invalidate` hooks. Does not rerun.
    pub fn invalidate(&self) {
        let (teardown, children, hooks) = {
            let mut state = self.state();
            if state.invalidated || state.stopped {
                return;
            }
            state.invalidated = true;
            (
                std::mem::take(&mut state.teardown),
                std::mem::take(&mut state.children),
                state.on_invalidate.snapshot(),
            )
        };

        tracing::debug!(computation = %self.id(), name = self.name(), "computation invalidated");

        for cleanup in teardown {
            cleanup();
        }
        for child in children.into_values() {
            child.stop();
        }
        hooks::invoke(HookKind::Invalidate, hooks, self);
    }

    /// Stop the computation permanently.
    ///
    /// A run already executing is not interrupted, but the function never
    /// runs again.
    pub fn stop(&self) {
        let (teardown, children, hooks) = {
            let mut state = self.state();
            if state.stopped {
                return;
            }
            state.stopped = true;
            state.invalidated = false;

            state.before_run.take();
            state.on_invalidate.take();
            if !state.running {
                state.after_run.take();
            }
            (
                std::mem::take(&mut state.teardown),
                std::mem::take(&mut state.children),
                state.on_stop.take(),
            )
        };

        tracing::debug!(computation = %self.id(), name = self.name(), "computation stopped");

        for cleanup in teardown {
            cleanup();
        }
        for child in children.into_values() {
            child.stop();
        }
        if let Some(parent) = self.parent() {
            parent.state().children.shift_remove(&self.id());
        }
        hooks::invoke(HookKind::Stop, hooks, self);

        self.inner.settled.send_replace(true);
    }

    /// Rerun the computation if it is invalidated and not already running.
    pub async fn flush(&self) -> Result<()> {
        {
            let state = self.state();
            if state.running || !state.invalidated || state.stopped {
                return Ok(());
            }
        }
        self.run_cycle().await
    }

    /// Invalidate and immediately flush, forcing a rerun.
    pub async fn run(&self) -> Result<()> {
        self.invalidate();
        self.flush().await
    }

    /// Register a one-shot cleanup for the next invalidate or stop.
    ///
    /// Returns `false`, without registering, if the computation is stopped.
    pub(crate) fn add_teardown(&self, cleanup: Teardown) -> bool {
        let mut state = self.state();
        if state.stopped {
            return false;
        }
        state.teardown.push(cleanup);
        true
    }

    #[cfg(test)]
    pub(crate) fn teardown_count(&self) -> usize {
        self.state().teardown.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock()
    }

    fn adopt(&self, child: &Computation) {
        let stopped = {
            let mut state = self.state();
            if !state.stopped {
                state.children.insert(child.id(), child.clone());
            }
            state.stopped
        };

        // A stopped parent can never tear the child down later.
        if stopped {
            child.stop();
        }
    }

    async fn run_cycle(&self) -> Result<()> {
        loop {
            let before_run = {
                let mut state = self.state();
                state.running = true;
                state.before_run.snapshot()
            };
            hooks::invoke(HookKind::BeforeRun, before_run, self);

            self.state().invalidated = false;

            tracing::debug!(computation = %self.id(), name = self.name(), "running computation");

            let inner = self.inner.clone();
            let outcome = AssertUnwindSafe(context::scope(Some(self.clone()), async move {
                (inner.func)().await
            }))
            .catch_unwind()
            .await;

            let result = match outcome {
                Ok(result) => result,
                Err(panic) => Err(anyhow::anyhow!(
                    "computation panicked: {}",
                    hooks::panic_message(panic.as_ref())
                )),
            };

            let first_run = std::mem::replace(&mut self.state().first_run, false);

            if let Err(error) = result {
                if first_run {
                    self.state().running = false;
                    self.inner.settled.send_replace(true);
                    return Err(TrackerError::FirstRun {
                        id: self.id(),
                        error,
                    });
                }
                self.report(error);
            }

            let after_run = self.state().after_run.snapshot();
            hooks::invoke(HookKind::AfterRun, after_run, self);

            if first_run {
                self.inner.settled.send_replace(true);
            }

            let (again, stale_teardown, stale_children) = {
                let mut state = self.state();
                state.running = false;
                if state.stopped {
                    state.after_run.take();
                }
                if state.invalidated && !state.stopped {
                    // Registered by the tail of a run that was invalidated
                    // while suspended; the rerun starts clean.
                    (
                        true,
                        std::mem::take(&mut state.teardown),
                        std::mem::take(&mut state.children),
                    )
                } else {
                    (false, Vec::new(), IndexMap::new())
                }
            };

            if !again {
                return Ok(());
            }

            for cleanup in stale_teardown {
                cleanup();
            }
            for child in stale_children.into_values() {
                child.stop();
            }

            tracing::trace!(
                computation = %self.id(),
                "computation invalidated while running; running again"
            );
        }
    }

    fn report(&self, error: anyhow::Error) {
        match &self.inner.on_error {
            Some(handler) => {
                let handled =
                    std::panic::catch_unwind(AssertUnwindSafe(|| handler(self, error)));
                if handled.is_err() {
                    tracing::error!(computation = %self.id(), "error handler panicked");
                }
            }
            None => tracing::error!(
                computation = %self.id(),
                name = self.name(),
                error = %format_args!("{error:#}"),
                "computation failed and no error handler is installed"
            ),
        }
    }
}

impl PartialEq for Computation {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Computation {}

impl fmt::Debug for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Computation")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("first_run", &state.first_run)
            .field("running", &state.running)
            .field("invalidated", &state.invalidated)
            .field("stopped", &state.stopped)
            .field("children", &state.children.len())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(count: &Arc<AtomicUsize>) -> Computation {
        let count = count.clone();
        Computation::new(
            move || {
                let count = count.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
            AutorunOptions::root(),
        )
    }

    #[tokio::test]
    async fn computation_does_not_run_until_started() {
        let count = Arc::new(AtomicUsize::new(0));
        let computation = counting(&count);

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(computation.is_first_run());
        assert!(computation.is_invalidated());

        computation.start().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!computation.is_first_run());
        assert!(!computation.is_invalidated());

        // Starting again is a no-op.
        computation.start().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn run_forces_rerun_and_flush_only_when_invalidated() {
        let count = Arc::new(AtomicUsize::new(0));
        let computation = counting(&count);
        computation.start().await.unwrap();

        computation.flush().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        computation.run().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        computation.invalidate();
        assert!(computation.is_invalidated());
        computation.flush().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stopped_computation_never_runs_again() {
        let count = Arc::new(AtomicUsize::new(0));
        let computation = counting(&count);
        computation.start().await.unwrap();

        computation.stop();
        assert!(computation.is_stopped());

        computation.invalidate();
        assert!(!computation.is_invalidated());
        computation.flush().await.unwrap();
        computation.run().await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn hooks_fire_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let computation = {
            let log = log.clone();
            Computation::new(
                move || {
                    let log = log.clone();
                    async move {
                        log.lock().push("run");
                        Ok(())
                    }
                },
                AutorunOptions::root(),
            )
        };

        {
            let log = log.clone();
            computation.before_run(move |_| log.lock().push("before_run"));
        }
        {
            let log = log.clone();
            computation.after_run(move |_| log.lock().push("after_run"));
        }
        {
            let log = log.clone();
            computation.on_invalidate(move |_| log.lock().push("invalidate"));
        }
        {
            let log = log.clone();
            computation.on_stop(move |_| log.lock().push("stop"));
        }

        computation.start().await.unwrap();
        computation.run().await.unwrap();
        computation.stop();

        assert_eq!(
            *log.lock(),
            vec![
                "before_run",
                "run",
                "after_run",
                "invalidate",
                "before_run",
                "run",
                "after_run",
                "stop"
            ]
        );
    }

    #[tokio::test]
    async fn on_stop_after_stop_runs_immediately() {
        let computation = Computation::new(|| async { Ok(()) }, AutorunOptions::root());
        computation.stop();

        let called = Arc::new(AtomicUsize::new(0));
        let called_clone = called.clone();
        computation.on_stop(move |_| {
            called_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(called.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn first_run_failure_is_returned() {
        let computation = Computation::new(
            || async { Err(anyhow::anyhow!("no data")) },
            AutorunOptions::root(),
        );

        let err = computation.start().await.unwrap_err();
        assert!(matches!(err, TrackerError::FirstRun { id, .. } if id == computation.id()));
        assert!(!computation.is_running());
    }

    #[tokio::test]
    async fn later_failures_go_to_the_error_handler() {
        let runs = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(Mutex::new(Vec::new()));

        let computation = {
            let runs = runs.clone();
            let errors = errors.clone();
            Computation::new(
                move || {
                    let runs = runs.clone();
                    async move {
                        if runs.fetch_add(1, Ordering::SeqCst) > 0 {
                            anyhow::bail!("rerun failed");
                        }
                        Ok(())
                    }
                },
                AutorunOptions::root()
                    .on_error(move |_, error| errors.lock().push(error.to_string())),
            )
        };

        computation.start().await.unwrap();
        computation.run().await.unwrap();

        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(*errors.lock(), vec!["rerun failed".to_string()]);
        assert!(!computation.is_stopped());
    }

    #[tokio::test]
    async fn panicking_function_is_reported_as_error() {
        fn explode() -> anyhow::Result<()> {
            panic!("exploded")
        }

        let computation = Computation::new(|| async { explode() }, AutorunOptions::root());

        let err = computation.start().await.unwrap_err();
        let message = err.user_error().unwrap().to_string();
        assert!(message.contains("exploded"), "{message}");
        assert!(!computation.is_running());
    }

    #[tokio::test]
    async fn invalidation_during_run_loops_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let computation = {
            let runs = runs.clone();
            Computation::new(
                move || {
                    let runs = runs.clone();
                    async move {
                        // The first run invalidates itself once.
                        if runs.fetch_add(1, Ordering::SeqCst) == 0 {
                            if let Some(current) = context::current() {
                                current.invalidate();
                                // A flush while running is a no-op.
                                current.flush().await?;
                            }
                        }
                        Ok(())
                    }
                },
                AutorunOptions::root(),
            )
        };

        computation.start().await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert!(!computation.is_invalidated());
    }

    #[tokio::test]
    async fn children_are_stopped_when_parent_invalidates() {
        let children = Arc::new(Mutex::new(Vec::<Computation>::new()));
        let parent = {
            let children = children.clone();
            Computation::new(
                move || {
                    let children = children.clone();
                    async move {
                        let child = Computation::new(|| async { Ok(()) }, AutorunOptions::new());
                        child.start().await?;
                        children.lock().push(child);
                        Ok(())
                    }
                },
                AutorunOptions::root(),
            )
        };

        parent.start().await.unwrap();
        assert_eq!(parent.child_count(), 1);
        let first = children.lock()[0].clone();
        assert_eq!(first.parent(), Some(parent.clone()));
        assert!(!first.is_stopped());

        parent.run().await.unwrap();
        assert!(first.is_stopped());
        assert_eq!(parent.child_count(), 1);

        let second = children.lock()[1].clone();
        parent.stop();
        assert!(second.is_stopped());
        assert_eq!(parent.child_count(), 0);
    }

    #[tokio::test]
    async fn stopping_a_child_detaches_it() {
        let parent = Computation::new(|| async { Ok(()) }, AutorunOptions::root());
        let child = Computation::new(|| async { Ok(()) }, AutorunOptions::new().parent(&parent));

        assert_eq!(parent.child_count(), 1);
        child.stop();
        assert_eq!(parent.child_count(), 0);
    }

    #[tokio::test]
    async fn child_of_stopped_parent_is_stopped() {
        let parent = Computation::new(|| async { Ok(()) }, AutorunOptions::root());
        parent.stop();

        let child = Computation::new(|| async { Ok(()) }, AutorunOptions::new().parent(&parent));
        assert!(child.is_stopped());
    }

    #[tokio::test]
    async fn ready_resolves_after_first_run() {
        let count = Arc::new(AtomicUsize::new(0));
        let computation = counting(&count);

        let waiter = {
            let computation = computation.clone();
            tokio::spawn(async move { computation.ready().await })
        };

        computation.start().await.unwrap();
        waiter.await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Already settled: resolves immediately.
        computation.ready().await;
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let count = Arc::new(AtomicUsize::new(0));
        let c1 = counting(&count);
        let c2 = c1.clone();

        assert_eq!(c1.id(), c2.id());
        assert_eq!(c1, c2);

        c1.start().await.unwrap();
        assert!(!c2.is_first_run());

        c1.stop();
        assert!(c2.is_stopped());
    }

    #[test]
    fn options_debug_shows_parent_choice() {
        let options = AutorunOptions::root().name("feed");
        let rendered = format!("{options:?}");
        assert!(rendered.contains("root"));
        assert!(rendered.contains("feed"));
        assert!(options.explicit_parent().is_none());
    }
}
