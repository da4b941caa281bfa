// Application state module
// Shared, read-only state handed to every connection

use super::types::Config;
use crate::function::HttpTrigger;

/// Application state
pub struct AppState {
    pub config: Config,
    pub trigger: HttpTrigger,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let trigger = HttpTrigger::new(config.function.name.clone(), config.function.clock);

        Self {
            config: config.clone(),
            trigger,
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
