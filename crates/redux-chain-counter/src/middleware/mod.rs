//! Middleware registry
//!
//! Maps the names used in the configuration file to middleware instances.
//! Order in the configuration is the order in the chain: the first name is
//! the outermost middleware.

use crate::state::RootState;
use redux_chain::{AnyAction, ChainError, LoggingMiddleware, Middleware, TraceSink};
use std::sync::Arc;

pub mod audit_middleware;

use audit_middleware::AuditMiddleware;

pub type CounterMiddleware = Arc<dyn Middleware<RootState, AnyAction>>;

const LOGGERS: [&str; 3] = ["logger1", "logger2", "logger3"];

/// Build the middleware registered under `name`
pub fn by_name(name: &str, sink: &Arc<dyn TraceSink>) -> Result<CounterMiddleware, ChainError> {
    match name {
        name if LOGGERS.contains(&name) => {
            Ok(Arc::new(LoggingMiddleware::new(name, Arc::clone(sink))))
        }
        "audit" => Ok(Arc::new(AuditMiddleware::new())),
        other => Err(ChainError::UnknownMiddleware(other.to_string())),
    }
}

/// Build the whole chain, failing on the first unknown name
pub fn from_names(
    names: &[String],
    sink: &Arc<dyn TraceSink>,
) -> Result<Vec<CounterMiddleware>, ChainError> {
    names.iter().map(|name| by_name(name, sink)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use redux_chain::CaptureSink;

    fn sink() -> Arc<dyn TraceSink> {
        Arc::new(CaptureSink::new())
    }

    #[test]
    fn test_known_names() {
        let names: Vec<String> = ["logger1", "audit", "logger3"]
            .into_iter()
            .map(String::from)
            .collect();
        let chain = from_names(&names, &sink()).unwrap();

        let built: Vec<&str> = chain.iter().map(|m| m.name()).collect();
        assert_eq!(built, vec!["logger1", "audit", "logger3"]);
    }

    #[test]
    fn test_unknown_name() {
        let names = vec!["logger1".to_string(), "thunk".to_string()];
        let err = from_names(&names, &sink()).err().unwrap();

        assert!(matches!(err, ChainError::UnknownMiddleware(ref name) if name == "thunk"));
        assert_eq!(err.to_string(), "unknown middleware `thunk`");
    }
}
