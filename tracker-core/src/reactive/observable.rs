//! Observable Value Implementation
//!
//! An ObservableValue is the simplest data source: a boxed value with one
//! embedded [`Dependency`].
//!
//! # How Observable Values Work
//!
//! 1. Reading the value inside a computation registers that computation as
//!    a dependent. Registration is synchronous, so a read before an `.await`
//!    and a read after it behave the same.
//!
//! 2. Writing compares the new value against the current one. Equal writes
//!    are ignored.
//!
//! 3. A real change stores the value and reruns every dependent.
//!
//! # Thread Safety
//!
//! The value sits behind a `parking_lot::RwLock`. The lock is never held
//! while dependents rerun, so a computation may freely read the value it is
//! being rerun for.

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use parking_lot::RwLock;

use super::equality::ValueEquality;
use super::Dependency;

type EqualsFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A reactive boxed value.
///
/// # Example
///
/// ```rust,ignore
/// let count = ObservableValue::new(0);
///
/// autorun(
///     {
///         let count = count.clone();
///         move || {
///             let count = count.clone();
///             async move {
///                 println!("count is {}", count.get());
///                 Ok(())
///             }
///         }
///     },
///     AutorunOptions::new(),
/// )
/// .await?;
///
/// count.set(5).await; // prints "count is 5"
/// ```
pub struct ObservableValue<T> {
    value: Arc<RwLock<T>>,
    equals: EqualsFn<T>,
    dependency: Dependency,
}

impl<T> ObservableValue<T>
where
    T: Send + Sync + 'static,
{
    /// Create a value compared with the default [`ValueEquality`] rule.
    pub fn new(value: T) -> Self
    where
        T: ValueEquality,
    {
        Self::with_equals(value, T::value_eq)
    }

    /// Create a value compared with a custom equality function.
    pub fn with_equals<F>(value: T, equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            value: Arc::new(RwLock::new(value)),
            equals: Arc::new(equals),
            dependency: Dependency::new(),
        }
    }

    /// Get a copy of the value, registering the active computation.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.dependency.depend();
        self.value.read().clone()
    }

    /// Borrow the value, registering the active computation.
    ///
    /// The value is locked for reading while `f` runs; `f` must not write to
    /// this same value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.dependency.depend();
        f(&self.value.read())
    }

    /// Get a copy of the value without registering a dependency.
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.value.read().clone()
    }

    /// Borrow the value without registering a dependency.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Store `value` and rerun dependents if it differs from the current one.
    ///
    /// Returns `true` if the value changed.
    pub async fn set(&self, value: T) -> bool {
        if !self.store(value) {
            return false;
        }
        self.dependency.changed().await;
        true
    }

    /// Like [`set`](Self::set), but schedules the reruns on another task
    /// instead of waiting for them.
    pub fn set_sync(&self, value: T) -> bool {
        if !self.store(value) {
            return false;
        }
        self.dependency.changed_sync();
        true
    }

    /// Compute a new value from the current one, then [`set`](Self::set) it.
    pub async fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value.read());
        self.set(next).await
    }

    /// The embedded dependency.
    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    fn store(&self, value: T) -> bool {
        let unchanged = {
            let current = self.value.read();
            (self.equals)(&current, &value)
        };
        if unchanged {
            return false;
        }

        *self.value.write() = value;
        true
    }
}

impl<T> Clone for ObservableValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            equals: Arc::clone(&self.equals),
            dependency: self.dependency.clone(),
        }
    }
}

impl<T: Default + ValueEquality + Send + Sync + 'static> Default for ObservableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Renders the current value without registering a dependency.
impl<T: Display> Display for ObservableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.value.read(), f)
    }
}

impl<T: Debug> Debug for ObservableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &*self.value.read())
            .field("dependents", &self.dependency.dependent_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
