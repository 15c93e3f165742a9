//! Dependency Implementation
//!
//! A Dependency links one data source to the computations interested in it.
//! Sources call [`Dependency::depend`] when they are read and
//! [`Dependency::changed`] when they are written.
//!
//! # Registration
//!
//! `depend` asks the reactive context for the active computation and adds it
//! to an insertion-ordered registry keyed by [`ComputationId`]. Repeated reads
//! in one run are idempotent. The first registration of a computation also
//! attaches a one-shot teardown to it, which removes the entry again the next
//! time that computation is invalidated or stopped. A computation is
//! therefore registered only for the sources it read during its current run.
//!
//! # Ownership
//!
//! The registry holds computation handles, but the teardown holds only a weak
//! reference back to the registry, so a dropped source never keeps its
//! dependents' cleanups alive and no reference cycle forms.

use std::fmt;
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;

use super::context;
use super::{Computation, ComputationId};

/// A registry of computations that depend on one data source.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Dependency {
    inner: Arc<Registry>,
}

#[derive(Default)]
struct Registry {
    dependents: Mutex<IndexMap<ComputationId, Computation>>,
}

impl Dependency {
    /// Create an empty dependency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the active computation as a dependent.
    ///
    /// Returns `false`, with no effect, if no computation is active.
    pub fn depend(&self) -> bool {
        match context::current() {
            Some(computation) => self.depend_on(&computation),
            None => false,
        }
    }

    /// Register `computation` as a dependent.
    ///
    /// Returns `false` if the computation is already stopped.
    pub fn depend_on(&self, computation: &Computation) -> bool {
        let id = computation.id();

        {
            let mut dependents = self.inner.dependents.lock();
            if dependents.contains_key(&id) {
                return true;
            }
            dependents.insert(id, computation.clone());
        }

        let registry: Weak<Registry> = Arc::downgrade(&self.inner);
        let attached = computation.add_teardown(Box::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.dependents.lock().shift_remove(&id);
            }
        }));

        if !attached {
            self.inner.dependents.lock().shift_remove(&id);
            tracing::warn!(computation = %id, "ignoring dependency from a stopped computation");
            return false;
        }

        tracing::trace!(computation = %id, "dependency registered");
        true
    }

    /// Rerun every dependent, one after another, in registration order.
    ///
    /// The registry is snapshotted first; computations that register during
    /// the reruns are not rerun by this call. A rerun that fails is logged
    /// and the remaining dependents still run.
    pub async fn changed(&self) {
        let dependents = self.snapshot();
        tracing::trace!(dependents = dependents.len(), "dependency changed");

        for computation in dependents {
            if let Err(error) = computation.run().await {
                tracing::warn!(
                    computation = %computation.id(),
                    error = %error,
                    "rerun after dependency change failed"
                );
            }
        }
    }

    /// Schedule a rerun of every dependent on a separate task.
    ///
    /// For call sites that cannot await. Must be called from within a tokio
    /// runtime; otherwise the notification is logged and dropped.
    pub fn changed_sync(&self) {
        let dependents = self.snapshot();
        if dependents.is_empty() {
            return;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(error) => {
                tracing::error!(
                    dependents = dependents.len(),
                    error = %error,
                    "changed_sync called outside of a tokio runtime; dropping notification"
                );
                return;
            }
        };

        handle.spawn(context::scope(None, async move {
            for computation in dependents {
                if let Err(error) = computation.run().await {
                    tracing::warn!(
                        computation = %computation.id(),
                        error = %error,
                        "deferred rerun after dependency change failed"
                    );
                }
            }
        }));
    }

    /// True if at least one computation depends on this source.
    pub fn has_dependents(&self) -> bool {
        !self.inner.dependents.lock().is_empty()
    }

    /// Number of computations depending on this source.
    pub fn dependent_count(&self) -> usize {
        self.inner.dependents.lock().len()
    }

    fn snapshot(&self) -> Vec<Computation> {
        self.inner.dependents.lock().values().cloned().collect()
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ComputationId> = self.inner.dependents.lock().keys().copied().collect();
        f.debug_struct("Dependency").field("dependents", &ids).finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
