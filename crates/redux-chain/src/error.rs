//! Error types for chain construction and dispatch

use thiserror::Error;

/// Errors raised while composing the middleware chain, before any dispatch
#[derive(Debug, Error)]
pub enum ChainError {
    /// A middleware refused to bind to the store
    #[error("middleware `{middleware}` failed to bind: {source}")]
    Bind {
        middleware: String,
        #[source]
        source: anyhow::Error,
    },

    /// A middleware reported an empty name
    #[error("middleware at position {index} has an empty name")]
    EmptyName { index: usize },

    /// A configured middleware name has no registered implementation
    #[error("unknown middleware `{0}`")]
    UnknownMiddleware(String),
}

impl ChainError {
    pub fn bind(middleware: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Bind {
            middleware: middleware.into(),
            source: source.into(),
        }
    }
}

/// Errors surfaced from `dispatch`
///
/// The composer never wraps or rewrites these: whatever a middleware or the
/// reducer produced is what the caller of `dispatch` receives.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The reducer failed; state was left untouched
    #[error("reducer failed on `{action_type}`: {source}")]
    Reducer {
        action_type: String,
        #[source]
        source: anyhow::Error,
    },

    /// A middleware failed during its pre- or post-phase
    #[error("middleware `{middleware}` failed: {source}")]
    Middleware {
        middleware: String,
        #[source]
        source: anyhow::Error,
    },

    /// Re-entrant dispatch nested deeper than the store allows
    #[error("dispatch depth limit of {limit} exceeded by `{action_type}`")]
    DepthExceeded { limit: usize, action_type: String },

    /// Dispatch was attempted while the middleware chain was still being built
    #[error("dispatching while constructing the middleware chain is not allowed")]
    NotReady,

    /// The store behind this handle has been dropped
    #[error("store has been dropped")]
    StoreDropped,
}

impl DispatchError {
    pub fn middleware(middleware: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Middleware {
            middleware: middleware.into(),
            source: source.into(),
        }
    }
}
