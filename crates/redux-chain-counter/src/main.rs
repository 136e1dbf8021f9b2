use redux_chain::{LogSink, TraceSink};
use redux_chain_config::AppConfig;
use std::sync::Arc;

mod actions;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod store;

fn main() -> anyhow::Result<()> {
    // The logger depends on the config, so a bad file is reported once it is up
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let log_file = logger::init(&config)?;

    log::info!("Starting redux-chain-counter");
    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {:#}", e);
    }
    if let Some(path) = &log_file {
        log::info!("Writing log to {}", path.display());
    }

    let sink: Arc<dyn TraceSink> = Arc::new(LogSink);
    let store = store::create_store(&config, sink)?;

    let subscription = {
        let api = store.api();
        store.subscribe(move || {
            log::info!("State changed: value = {}", api.get_state().counter.value)
        })
    };

    // One action per argument; a single increment when none are given
    let commands: Vec<String> = std::env::args().skip(1).collect();
    let actions = if commands.is_empty() {
        vec![actions::increment()]
    } else {
        commands.iter().map(|word| actions::parse_command(word)).collect()
    };

    let mut failed = 0;
    for action in actions {
        if let Err(e) = store.dispatch(action) {
            log::error!("Dispatch failed: {:#}", anyhow::Error::new(e));
            failed += 1;
        }
    }

    subscription.unsubscribe();
    println!("{}", serde_json::to_string_pretty(&*store.get_state())?);

    if failed > 0 {
        anyhow::bail!("{} action(s) failed", failed);
    }

    log::info!("Exiting redux-chain-counter");
    Ok(())
}
