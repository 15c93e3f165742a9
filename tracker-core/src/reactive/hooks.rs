//! Lifecycle hooks.
//!
//! Hooks are plain callbacks attached to a computation. They are invoked in
//! registration order, from a snapshot taken when the invocation starts, and
//! each one is isolated: a hook that panics is logged and skipped, and the
//! remaining hooks still run.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use smallvec::SmallVec;

use super::{context, Computation};

/// A lifecycle callback.
pub(crate) type Hook = Arc<dyn Fn(&Computation) + Send + Sync>;

/// A one-shot callback fired on the first invalidate or stop transition.
///
/// Dependencies use these to drop a computation from their registry.
pub(crate) type Teardown = Box<dyn FnOnce() + Send>;

/// Which lifecycle transition a hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookKind {
    BeforeRun,
    AfterRun,
    Invalidate,
    Stop,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookKind::BeforeRun => "before_run",
            HookKind::AfterRun => "after_run",
            HookKind::Invalidate => "on_invalidate",
            HookKind::Stop => "on_stop",
        })
    }
}

/// An ordered list of hooks. No deduplication.
#[derive(Default)]
pub(crate) struct HookList {
    hooks: SmallVec<[Hook; 2]>,
}

impl HookList {
    pub(crate) fn push(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    /// Copy the current hooks so they can be invoked without holding a lock.
    pub(crate) fn snapshot(&self) -> SmallVec<[Hook; 2]> {
        self.hooks.clone()
    }

    /// Take every hook out of the list, leaving it empty.
    pub(crate) fn take(&mut self) -> SmallVec<[Hook; 2]> {
        std::mem::take(&mut self.hooks)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.hooks.len()
    }
}

/// Invoke `hooks` in order, isolating each one.
///
/// Hooks run with no active computation, so nothing they read is tracked
/// against whichever computation triggered the transition.
pub(crate) fn invoke(kind: HookKind, hooks: SmallVec<[Hook; 2]>, computation: &Computation) {
    for hook in hooks {
        let outcome = context::sync_scope(None, || {
            catch_unwind(AssertUnwindSafe(|| hook(computation)))
        });
        if let Err(panic) = outcome {
            tracing::error!(
                computation = %computation.id(),
                hook = %kind,
                panic = panic_message(panic.as_ref()),
                "lifecycle hook panicked"
            );
        }
    }
}

pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::AutorunOptions;
    use parking_lot::Mutex;

    #[test]
    fn hooks_run_in_order_and_survive_panics() {
        let computation = Computation::new(|| async { Ok(()) }, AutorunOptions::root());
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut list = HookList::default();
        for i in 0..3 {
            let order = order.clone();
            list.push(Arc::new(move |_: &Computation| {
                if i == 1 {
                    panic!("hook {i} failed");
                }
                order.lock().push(i);
            }));
        }

        invoke(HookKind::AfterRun, list.snapshot(), &computation);

        assert_eq!(*order.lock(), vec![0, 2]);
        // Snapshot leaves the list intact.
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn take_empties_the_list() {
        let mut list = HookList::default();
        list.push(Arc::new(|_: &Computation| {}));
        assert_eq!(list.take().len(), 1);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn panic_message_extracts_strings() {
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");

        let boxed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(boxed.as_ref()), "static");

        let boxed: Box<dyn Any + Send> = Box::new(5_u8);
        assert_eq!(panic_message(boxed.as_ref()), "<non-string panic payload>");
    }
}
