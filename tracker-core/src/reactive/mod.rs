//! Reactive Primitives
//!
//! This module implements the reactive engine: computations, dependencies,
//! and observable values, held together by a task-scoped reactive context.
//!
//! # Concepts
//!
//! ## Computations
//!
//! A Computation wraps an async function. While the function runs, the
//! computation is the active one, and any data source the function reads
//! records it as a dependent. When one of those sources changes, the
//! computation is invalidated and rerun.
//!
//! ## Dependencies
//!
//! A Dependency is the registry behind a data source: `depend` on read,
//! `changed` on write. Anything can embed one (a cursor, a cache entry, a
//! remote subscription) to become reactive.
//!
//! ## Observable Values
//!
//! An ObservableValue is a value plus a Dependency and an equality check.
//! Writes that compare equal to the current value do nothing.
//!
//! # Implementation Notes
//!
//! The active computation is carried by a tokio task-local, not by a global
//! slot, so a computation keeps its identity across `.await` points even
//! when other computations run in between.

pub mod context;
pub mod equality;

mod computation;
mod dependency;
mod hooks;
mod id;
mod observable;
mod runtime;

pub use computation::{AutorunOptions, Computation, ErrorHandler};
pub use dependency::Dependency;
pub use equality::ValueEquality;
pub use id::ComputationId;
pub use observable::ObservableValue;
pub use runtime::{
    autorun, current_computation, is_tracking, nonreactive, nonreactive_sync, spawn,
};
