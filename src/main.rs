use std::sync::Arc;

mod config;
mod function;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path_from_args(std::env::args().skip(1))?;
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(&cfg));

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals))?;

    logger::log_server_start(&addr, &cfg);
    server::run_server(listener, state, Arc::clone(&signals.shutdown)).await;
    Ok(())
}

/// Parse `-c <path>` / `--config <path>`; anything else is rejected
fn config_path_from_args(
    mut args: impl Iterator<Item = String>,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut path = config::DEFAULT_CONFIG_PATH.to_string();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                path = args
                    .next()
                    .ok_or_else(|| format!("{arg} requires a path argument"))?;
            }
            other => return Err(format!("Unknown argument: '{other}'").into()),
        }
    }
    Ok(path)
}
