//! Chain composition
//!
//! Folds an ordered middleware list around the base dispatch, right to left,
//! so that for `[m1, m2, m3]` the result behaves like
//! `m1(api)(m2(api)(m3(api)(base)))`.

use crate::error::{ChainError, DispatchError};
use crate::middleware::{Middleware, Next};
use crate::store::StoreApi;
use std::sync::Arc;

/// A composed dispatch function (or any stage of one)
pub type DispatchFn<A> = Arc<dyn Fn(A) -> Result<A, DispatchError> + Send + Sync>;

/// Compose `middlewares` around `base`
///
/// Each step binds one middleware (innermost first) and wraps the function
/// built so far in a continuation that captures only the `api` handle and
/// the next-inward function. An empty list returns `base` itself.
pub fn compose<S, A>(
    middlewares: &[Arc<dyn Middleware<S, A>>],
    api: &StoreApi<S, A>,
    base: DispatchFn<A>,
) -> Result<DispatchFn<A>, ChainError>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    for (index, middleware) in middlewares.iter().enumerate() {
        if middleware.name().is_empty() {
            return Err(ChainError::EmptyName { index });
        }
    }

    middlewares
        .iter()
        .rev()
        .try_fold(base, |next, middleware| {
            middleware.bind(api)?;
            log::debug!("Bound middleware `{}`", middleware.name());
            Ok(wrap(Arc::clone(middleware), api.clone(), next))
        })
}

fn wrap<S, A>(
    middleware: Arc<dyn Middleware<S, A>>,
    api: StoreApi<S, A>,
    next: DispatchFn<A>,
) -> DispatchFn<A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    Arc::new(move |action: A| middleware.handle(&api, action, Next::new(Arc::clone(&next))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, AnyAction};
    use crate::middleware::middleware_fn;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    fn recorder(
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn Middleware<(), AnyAction>> {
        Arc::new(middleware_fn(
            name,
            move |_api: &StoreApi<(), AnyAction>, action: AnyAction, next: Next<AnyAction>| {
                log.lock().push(format!("{name}-pre"));
                let result = next.run(action)?;
                log.lock().push(format!("{name}-post"));
                Ok(result)
            },
        ))
    }

    fn base(log: Arc<Mutex<Vec<String>>>) -> DispatchFn<AnyAction> {
        Arc::new(move |action: AnyAction| {
            log.lock().push(format!("base {}", action.action_type()));
            Ok(action)
        })
    }

    #[test]
    fn test_empty_chain_is_base() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let base = base(log.clone());
        let composed = compose(&[], &StoreApi::detached(()), base.clone()).unwrap();

        assert!(Arc::ptr_eq(&composed, &base));
        composed(AnyAction::new("ping")).unwrap();
        assert_eq!(*log.lock(), vec!["base ping"]);
    }

    #[test]
    fn test_onion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = vec![
            recorder("m1", log.clone()),
            recorder("m2", log.clone()),
            recorder("m3", log.clone()),
        ];
        let composed = compose(&chain, &StoreApi::detached(()), base(log.clone())).unwrap();

        composed(AnyAction::new("ping")).unwrap();

        assert_eq!(
            *log.lock(),
            vec!["m1-pre", "m2-pre", "m3-pre", "base ping", "m3-post", "m2-post", "m1-post"]
        );
    }

    #[test]
    fn test_bind_runs_innermost_first() {
        struct Binder(&'static str, Arc<Mutex<Vec<String>>>);

        impl Middleware<(), AnyAction> for Binder {
            fn name(&self) -> &str {
                self.0
            }

            fn bind(&self, _api: &StoreApi<(), AnyAction>) -> Result<(), ChainError> {
                self.1.lock().push(self.0.to_string());
                Ok(())
            }

            fn handle(
                &self,
                _api: &StoreApi<(), AnyAction>,
                action: AnyAction,
                next: Next<AnyAction>,
            ) -> Result<AnyAction, DispatchError> {
                next.run(action)
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let chain: Vec<Arc<dyn Middleware<(), AnyAction>>> = vec![
            Arc::new(Binder("m1", log.clone())),
            Arc::new(Binder("m2", log.clone())),
            Arc::new(Binder("m3", log.clone())),
        ];
        compose(&chain, &StoreApi::detached(()), base(Arc::default())).unwrap();

        assert_eq!(*log.lock(), vec!["m3", "m2", "m1"]);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = vec![recorder("m1", log.clone()), recorder("", log.clone())];

        let err = compose(&chain, &StoreApi::detached(()), base(log.clone())).err().unwrap();

        assert!(matches!(err, ChainError::EmptyName { index: 1 }));
    }

    #[test]
    fn test_short_circuit_skips_inner_layers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let gate_log = log.clone();
        let gate: Arc<dyn Middleware<(), AnyAction>> = Arc::new(middleware_fn(
            "gate",
            move |_api: &StoreApi<(), AnyAction>, action: AnyAction, _next: Next<AnyAction>| {
                gate_log.lock().push("gate".to_string());
                Ok(AnyAction::new(format!("blocked/{}", action.kind)))
            },
        ));
        let chain = vec![recorder("m1", log.clone()), gate, recorder("m3", log.clone())];
        let composed = compose(&chain, &StoreApi::detached(()), base(log.clone())).unwrap();

        let result = composed(AnyAction::new("ping")).unwrap();

        assert_eq!(result, AnyAction::new("blocked/ping"));
        assert_eq!(*log.lock(), vec!["m1-pre", "gate", "m1-post"]);
    }
}
