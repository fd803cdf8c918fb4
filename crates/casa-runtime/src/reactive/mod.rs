#![forbid(unsafe_code)]

//! Shared single-threaded state.
//!
//! - [`State`]: a read-only, cloneable handle to a version-tracked value.
//! - [`Setter`]: the single write handle for that value.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//!
//! # Invariants
//!
//! 1. Each value has exactly one [`Setter`]; it cannot be cloned.
//! 2. Version increments exactly once per write that changes the value.
//! 3. Writing a value equal to the current one is a no-op.
//! 4. Subscribers run in registration order, after the write completes.

pub mod state;

pub use state::{Setter, State, Subscription, state};
