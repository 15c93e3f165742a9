//! Tracker Core
//!
//! This crate provides a dependency-tracking reactive computation engine for
//! async Rust. It implements:
//!
//! - Computations: async functions that rerun when what they read changes
//! - Dependencies: registries linking a data source to its readers
//! - Observable values: the simplest reactive data source
//! - A task-scoped reactive context that survives `.await`
//!
//! Higher layers (database cursors, publish/diff sessions) build on the
//! [`reactive::Dependency`] and [`reactive::autorun`] surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracker_core::reactive::{autorun, AutorunOptions, ObservableValue};
//!
//! // Create a value
//! let count = ObservableValue::new(0);
//!
//! // Create a computation that reads it
//! let reader = count.clone();
//! let computation = autorun(
//!     move || {
//!         let count = reader.clone();
//!         async move {
//!             println!("Count: {}", count.get());
//!             Ok(())
//!         }
//!     },
//!     AutorunOptions::new(),
//! )
//! .await?;
//!
//! // Update the value
//! count.set(5).await;
//! // Computation automatically reruns, prints: "Count: 5"
//!
//! computation.stop();
//! ```

pub mod error;
pub mod reactive;

pub use error::{Result, TrackerError};
pub use reactive::{
    autorun, current_computation, nonreactive, AutorunOptions, Computation, ComputationId,
    Dependency, ObservableValue,
};
