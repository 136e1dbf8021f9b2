//! Middleware system
//!
//! Middleware wraps dispatch. Every middleware sees an action on its way in
//! (pre-phase), hands it inward by running [`Next`], and sees the result on
//! the way out (post-phase):
//!
//! ```text
//! dispatch(action)
//!   → m1 pre → m2 pre → m3 pre → reducer → m3 post → m2 post → m1 post
//! ```
//!
//! Each middleware can:
//! - Inspect the action and current state
//! - Dispatch new actions through [`StoreApi::dispatch`] (re-enters at `m1`)
//! - Stop the action by returning without running `next`
//! - Fail, which aborts every outer post-phase
//!
//! ## Example
//!
//! ```
//! use redux_chain::{AnyAction, DispatchError, Middleware, Next, StoreApi};
//!
//! struct Doubler;
//!
//! impl Middleware<i64, AnyAction> for Doubler {
//!     fn name(&self) -> &str {
//!         "doubler"
//!     }
//!
//!     fn handle(
//!         &self,
//!         api: &StoreApi<i64, AnyAction>,
//!         action: AnyAction,
//!         next: Next<AnyAction>,
//!     ) -> Result<AnyAction, DispatchError> {
//!         let result = next.run(action)?;
//!         if result.kind == "double" {
//!             api.dispatch(AnyAction::new("noop"))?;
//!         }
//!         Ok(result)
//!     }
//! }
//! ```

use crate::compose::DispatchFn;
use crate::error::{ChainError, DispatchError};
use crate::store::StoreApi;
use std::fmt;

pub mod logging;
pub mod trace;

pub use logging::LoggingMiddleware;
pub use trace::{CaptureSink, LogSink, Phase, TraceEvent, TraceSink};

/// Middleware trait - wraps every dispatch on its way to the reducer
///
/// The two methods mirror the two stages of a middleware's life:
/// [`bind`](Middleware::bind) runs once while the chain is composed, and
/// [`handle`](Middleware::handle) runs once per dispatched action.
pub trait Middleware<S, A>: Send + Sync {
    /// Identity used in logs and error reports
    fn name(&self) -> &str;

    /// Called once while the chain is composed, innermost middleware first
    ///
    /// `api.get_state()` works here; `api.dispatch` fails with
    /// [`DispatchError::NotReady`] until composition has finished.
    fn bind(&self, _api: &StoreApi<S, A>) -> Result<(), ChainError> {
        Ok(())
    }

    /// Handle one action
    ///
    /// - `api`: read state, or dispatch through the full chain
    /// - `action`: the action being dispatched
    /// - `next`: the rest of the chain inward; consumed when run
    fn handle(
        &self,
        api: &StoreApi<S, A>,
        action: A,
        next: Next<A>,
    ) -> Result<A, DispatchError>;
}

/// Continuation to the rest of the chain inward from the current middleware
///
/// Running it consumes it, so a middleware can pass an action inward at most
/// once per invocation.
pub struct Next<A> {
    inner: DispatchFn<A>,
}

impl<A> Next<A> {
    pub(crate) fn new(inner: DispatchFn<A>) -> Self {
        Self { inner }
    }

    /// Pass the action to the next middleware, or to the reducer if this is the last one
    pub fn run(self, action: A) -> Result<A, DispatchError> {
        (self.inner)(action)
    }
}

impl<A> fmt::Debug for Next<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Next")
    }
}

/// Middleware built from a closure, see [`middleware_fn`]
pub struct FnMiddleware<F> {
    name: String,
    handler: F,
}

/// Build a middleware from a name and a handler closure
pub fn middleware_fn<S, A, F>(name: impl Into<String>, handler: F) -> FnMiddleware<F>
where
    F: Fn(&StoreApi<S, A>, A, Next<A>) -> Result<A, DispatchError> + Send + Sync,
{
    FnMiddleware {
        name: name.into(),
        handler,
    }
}

impl<S, A, F> Middleware<S, A> for FnMiddleware<F>
where
    F: Fn(&StoreApi<S, A>, A, Next<A>) -> Result<A, DispatchError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(
        &self,
        api: &StoreApi<S, A>,
        action: A,
        next: Next<A>,
    ) -> Result<A, DispatchError> {
        (self.handler)(api, action, next)
    }
}
