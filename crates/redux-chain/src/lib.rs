//! Redux-style store with a composed middleware chain
//!
//! A [`Store`] owns the current state, a reducer, its subscribers and one
//! dispatch function built from an ordered list of [`Middleware`]. Every
//! dispatched action travels through the middleware in "onion" order:
//!
//! ```text
//! dispatch(action)
//!   → m1 → m2 → … → mn → reducer → commit → notify subscribers
//!   ← m1 ← m2 ← … ← mn ←
//! ```
//!
//! # Example
//!
//! ```
//! use redux_chain::{AnyAction, CaptureSink, LoggingMiddleware, StoreBuilder};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let store = StoreBuilder::new(
//!     |count: &i64, action: &AnyAction| match action.kind.as_str() {
//!         "increment" => count + 1,
//!         _ => *count,
//!     },
//!     0,
//! )
//! .middleware(LoggingMiddleware::new("L1", sink.clone()))
//! .middleware(LoggingMiddleware::new("L2", sink.clone()))
//! .build()?;
//!
//! store.dispatch(AnyAction::new("increment"))?;
//!
//! assert_eq!(*store.get_state(), 1);
//! assert_eq!(sink.labels(), ["L1-pre", "L2-pre", "L2-post", "L1-post"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod compose;
mod error;
pub mod middleware;
mod reducer;
mod store;
mod subscription;

pub use action::{Action, AnyAction};
pub use compose::{DispatchFn, compose};
pub use error::{ChainError, DispatchError};
pub use middleware::{
    CaptureSink, FnMiddleware, LogSink, LoggingMiddleware, Middleware, Next, Phase, TraceEvent,
    TraceSink, middleware_fn,
};
pub use reducer::{Fallible, Reducer, fallible};
pub use store::{DEFAULT_MAX_DISPATCH_DEPTH, Store, StoreApi, StoreBuilder};
pub use subscription::Subscription;
