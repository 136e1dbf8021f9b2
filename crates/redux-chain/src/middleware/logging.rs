//! LoggingMiddleware - reports every action on its way in and out

use super::trace::{Phase, TraceEvent, TraceSink};
use super::{Middleware, Next};
use crate::action::Action;
use crate::error::{ChainError, DispatchError};
use crate::store::StoreApi;
use std::sync::Arc;

/// LoggingMiddleware - records an `Entering` event before passing the action
/// inward and a `Leaving` event once the inner chain returns
///
/// The result of the inner chain is returned unchanged. If the inner chain
/// fails, no `Leaving` event is recorded.
pub struct LoggingMiddleware {
    name: String,
    sink: Arc<dyn TraceSink>,
}

impl LoggingMiddleware {
    pub fn new(name: impl Into<String>, sink: Arc<dyn TraceSink>) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }
}

impl<S, A: Action> Middleware<S, A> for LoggingMiddleware {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self, _api: &StoreApi<S, A>) -> Result<(), ChainError> {
        self.sink.record(TraceEvent::bound(&self.name));
        Ok(())
    }

    fn handle(
        &self,
        _api: &StoreApi<S, A>,
        action: A,
        next: Next<A>,
    ) -> Result<A, DispatchError> {
        let action_type = action.action_type().to_string();
        self.sink
            .record(TraceEvent::action(&self.name, Phase::Entering, &action_type));

        let result = next.run(action)?;

        self.sink
            .record(TraceEvent::action(&self.name, Phase::Leaving, action_type));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AnyAction;
    use crate::store::StoreBuilder;
    use crate::middleware::CaptureSink;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: i64,
    }

    fn counter_reducer(state: &Counter, action: &AnyAction) -> Counter {
        match action.action_type() {
            "increment" => Counter {
                value: state.value + 1,
            },
            _ => state.clone(),
        }
    }

    #[test]
    fn test_logging_middleware_passes_result_through() {
        let sink = Arc::new(CaptureSink::new());
        let store = StoreBuilder::new(counter_reducer, Counter::default())
            .middleware(LoggingMiddleware::new("L1", sink.clone()))
            .build()
            .unwrap();

        let result = store.dispatch(AnyAction::new("increment")).unwrap();

        assert_eq!(result, AnyAction::new("increment"));
        assert_eq!(
            sink.events(),
            vec![
                TraceEvent::bound("L1"),
                TraceEvent::action("L1", Phase::Entering, "increment"),
                TraceEvent::action("L1", Phase::Leaving, "increment"),
            ]
        );
    }

    #[test]
    fn test_no_leaving_event_when_inner_chain_fails() {
        let sink = Arc::new(CaptureSink::new());
        let store = StoreBuilder::new(
            crate::reducer::fallible(|_: &Counter, _: &AnyAction| {
                Err::<Counter, _>(anyhow::anyhow!("reducer exploded"))
            }),
            Counter::default(),
        )
        .middleware(LoggingMiddleware::new("L1", sink.clone()))
        .build()
        .unwrap();

        let err = store.dispatch(AnyAction::new("increment")).unwrap_err();

        assert!(matches!(err, DispatchError::Reducer { .. }));
        assert_eq!(sink.labels(), vec!["L1-pre"]);
    }
}
