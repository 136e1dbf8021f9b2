use crate::middleware;
use crate::reducer;
use crate::state::RootState;
use redux_chain::{fallible, AnyAction, Store, StoreBuilder, TraceSink};
use redux_chain_config::AppConfig;
use std::sync::Arc;

pub type CounterStore = Store<RootState, AnyAction>;

/// Create the counter store described by `config`
///
/// Logging middleware report to `sink`. Fails if the configuration names a
/// middleware that does not exist or one of them refuses to bind.
pub fn create_store(config: &AppConfig, sink: Arc<dyn TraceSink>) -> anyhow::Result<CounterStore> {
    let chain = middleware::from_names(&config.middlewares, &sink)?;

    let mut builder = StoreBuilder::new(
        fallible(reducer::reduce),
        RootState::new(config.initial_value),
    );
    builder = match config.dispatch_depth_limit() {
        Some(limit) => builder.max_dispatch_depth(limit),
        None => builder.unbounded(),
    };
    for middleware in chain {
        builder = builder.shared_middleware(middleware);
    }

    let store = builder.build()?;
    log::info!(
        "Counter store ready with middleware [{}]",
        config.middlewares.join(", ")
    );
    Ok(store)
}
