//! Equality rules for observable values.
//!
//! The default rule only ever considers two *primitive* values equal:
//! numbers, booleans, characters, strings, unit, and `None` (null). Anything
//! else (collections, smart pointers, user structs) is always treated as
//! changed, even when the very same `Arc` is stored twice. There is no deep
//! comparison; a value that wants structural comparison passes its own
//! function to [`ObservableValue::with_equals`](super::ObservableValue::with_equals),
//! for example [`structural_equals`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// The default equality used by [`ObservableValue::new`](super::ObservableValue::new).
///
/// The provided method returns `false`, so user types opt in as "objects"
/// with an empty impl:
///
/// ```rust,ignore
/// struct Profile { name: String }
/// impl ValueEquality for Profile {}
/// ```
pub trait ValueEquality {
    /// True if storing `other` over `self` is not a change.
    fn value_eq(&self, _other: &Self) -> bool {
        false
    }
}

macro_rules! primitive_equality {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueEquality for $ty {
                fn value_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

primitive_equality!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, &'static str,
);

// `None` is null: two nulls are equal, null against a value is a change.
impl<T: ValueEquality> ValueEquality for Option<T> {
    fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.value_eq(b),
            _ => false,
        }
    }
}

impl<T> ValueEquality for Vec<T> {}
impl<T> ValueEquality for VecDeque<T> {}
impl<T, const N: usize> ValueEquality for [T; N] {}
impl<K, V, S> ValueEquality for HashMap<K, V, S> {}
impl<K, V> ValueEquality for BTreeMap<K, V> {}
impl<T, S> ValueEquality for HashSet<T, S> {}
impl<T> ValueEquality for BTreeSet<T> {}
impl<T: ?Sized> ValueEquality for Box<T> {}
impl<T: ?Sized> ValueEquality for Arc<T> {}
impl<T: ?Sized> ValueEquality for Rc<T> {}

/// The default rule as a free function.
pub fn default_equals<T: ValueEquality>(a: &T, b: &T) -> bool {
    a.value_eq(b)
}

/// Structural comparison through `PartialEq`.
pub fn structural_equals<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// Never equal: every write is a change.
pub fn never_equals<T>(_a: &T, _b: &T) -> bool {
    false
}
