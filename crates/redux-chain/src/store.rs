use crate::action::Action;
use crate::compose::{DispatchFn, compose};
use crate::error::{ChainError, DispatchError};
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use crate::subscription::{Subscribers, Subscription};
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::Cell;
use std::sync::{Arc, OnceLock, Weak};

/// Re-entrant dispatch nesting allowed unless configured otherwise
pub const DEFAULT_MAX_DISPATCH_DEPTH: usize = 64;

type StateSlot<S> = Arc<RwLock<Arc<S>>>;

struct Inner<S, A> {
    state: StateSlot<S>,
    reducer: Box<dyn Reducer<S, A>>,
    subscribers: Arc<Subscribers>,
    /// Composed chain, set once composition has finished
    dispatch: OnceLock<DispatchFn<A>>,
    /// Serializes dispatch across threads; counts nesting on the owning thread
    gate: ReentrantMutex<Cell<usize>>,
    max_depth: Option<usize>,
}

impl<S, A> Inner<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    fn dispatch(&self, action: A) -> Result<A, DispatchError> {
        let depth = self.gate.lock();
        let dispatch = self
            .dispatch
            .get()
            .cloned()
            .ok_or(DispatchError::NotReady)?;

        let level = depth.get() + 1;
        if let Some(limit) = self.max_depth {
            if level > limit {
                log::warn!(
                    "Dispatch of `{}` exceeds depth limit {}",
                    action.action_type(),
                    limit
                );
                return Err(DispatchError::DepthExceeded {
                    limit,
                    action_type: action.action_type().to_string(),
                });
            }
        }

        let _level = DepthGuard::enter(&depth, level);
        dispatch(action)
    }

    /// Base dispatcher: reduce, commit, notify
    fn reduce(&self, action: A) -> Result<A, DispatchError> {
        let current = Arc::clone(&*self.state.read());
        let next = self
            .reducer
            .reduce(&current, &action)
            .map_err(|source| DispatchError::Reducer {
                action_type: action.action_type().to_string(),
                source,
            })?;

        *self.state.write() = Arc::new(next);
        log::trace!("State committed for `{}`", action.action_type());

        for listener in self.subscribers.snapshot() {
            listener();
        }

        Ok(action)
    }
}

/// Restores the nesting counter when a dispatch returns or unwinds
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> DepthGuard<'a> {
    fn enter(depth: &'a Cell<usize>, level: usize) -> Self {
        depth.set(level);
        Self { depth }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

/// The view of the store handed to middleware: read state, dispatch through
/// the full chain
///
/// `dispatch` is resolved when called, not when the handle is created, so the
/// handle given to middleware during composition reaches the finished chain.
pub struct StoreApi<S, A> {
    state: StateSlot<S>,
    store: Weak<Inner<S, A>>,
}

impl<S, A> Clone for StoreApi<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: Weak::clone(&self.store),
        }
    }
}

impl<S, A> StoreApi<S, A> {
    /// Current state snapshot
    ///
    /// Still answers with the last committed state after the store is dropped.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&*self.state.read())
    }

    /// A handle with no store behind it, for exercising the composer alone
    #[cfg(test)]
    pub(crate) fn detached(state: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(state))),
            store: Weak::new(),
        }
    }
}

impl<S, A> StoreApi<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Dispatch through the full middleware chain, starting at the outermost middleware
    pub fn dispatch(&self, action: A) -> Result<A, DispatchError> {
        let store = self.store.upgrade().ok_or(DispatchError::StoreDropped)?;
        store.dispatch(action)
    }
}

/// Store - holds application state and runs every action through the
/// middleware chain into the reducer
///
/// Build one with [`StoreBuilder`]; the middleware order is fixed from then on.
///
/// ```
/// use redux_chain::{AnyAction, StoreBuilder};
///
/// let store = StoreBuilder::new(
///     |count: &i64, action: &AnyAction| match action.kind.as_str() {
///         "increment" => count + 1,
///         _ => *count,
///     },
///     0,
/// )
/// .build()?;
///
/// store.dispatch(AnyAction::new("increment"))?;
/// assert_eq!(*store.get_state(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Current state snapshot
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&*self.inner.state.read())
    }

    /// Run an action through the middleware chain and reducer
    ///
    /// Returns whatever the chain returns: the action itself once the reducer
    /// has run, or the value of a middleware that stopped the chain early.
    /// Calls from other threads wait until the current dispatch has finished.
    pub fn dispatch(&self, action: A) -> Result<A, DispatchError> {
        self.inner.dispatch(action)
    }

    /// Register a listener called after every committed state change
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.subscribers.add(Arc::new(listener));
        log::debug!("Subscriber {} added", id);
        Subscription::new(id, &self.inner.subscribers)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// Handle for code that needs to read or dispatch without owning the store
    pub fn api(&self) -> StoreApi<S, A> {
        StoreApi {
            state: Arc::clone(&self.inner.state),
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn max_dispatch_depth(&self) -> Option<usize> {
        self.inner.max_depth
    }
}

/// Store construction: reducer, initial state, ordered middleware
pub struct StoreBuilder<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    initial_state: S,
    middlewares: Vec<Arc<dyn Middleware<S, A>>>,
    max_depth: Option<usize>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub fn new<R>(reducer: R, initial_state: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self {
            reducer: Box::new(reducer),
            initial_state,
            middlewares: Vec::new(),
            max_depth: Some(DEFAULT_MAX_DISPATCH_DEPTH),
        }
    }

    /// Append a middleware; the first one added is the outermost
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Append an already shared middleware
    pub fn shared_middleware(mut self, middleware: Arc<dyn Middleware<S, A>>) -> Self {
        self.middlewares.push(middleware);
        self
    }

    /// Limit re-entrant dispatch nesting to `limit` levels
    pub fn max_dispatch_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Allow re-entrant dispatch to nest without limit
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Compose the chain and create the store
    pub fn build(self) -> Result<Store<S, A>, ChainError> {
        let inner = Arc::new(Inner {
            state: Arc::new(RwLock::new(Arc::new(self.initial_state))),
            reducer: self.reducer,
            subscribers: Arc::new(Subscribers::default()),
            dispatch: OnceLock::new(),
            gate: ReentrantMutex::new(Cell::new(0)),
            max_depth: self.max_depth,
        });
        let store = Store { inner };

        let base: DispatchFn<A> = {
            let inner = Arc::downgrade(&store.inner);
            Arc::new(move |action: A| match inner.upgrade() {
                Some(inner) => inner.reduce(action),
                None => Err(DispatchError::StoreDropped),
            })
        };

        let dispatch = compose(&self.middlewares, &store.api(), base)?;
        store.inner.dispatch.get_or_init(|| dispatch);

        log::debug!(
            "Store built with {} middleware(s)",
            self.middlewares.len()
        );
        Ok(store)
    }
}
