// Configuration module entry point
// Loads layered configuration (defaults, file, environment) and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension), resolves to `config.toml`
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable prefix, e.g. `HELLO_TRIGGER_SERVER__PORT=8080`
const ENV_PREFIX: &str = "HELLO_TRIGGER";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7071)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.request_timeout", 30)?
            .set_default("function.name", "HttpTrigger")?
            .set_default("function.clock", "local")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::SystemClock;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("hello-trigger-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.toml"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 7071);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.request_timeout, 30);
        assert!(cfg.performance.max_connections.is_none());
        assert_eq!(cfg.function.name, "HttpTrigger");
        assert_eq!(cfg.function.clock, SystemClock::Local);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_config(
            "override",
            r#"
[server]
port = 9090
workers = 2

[logging]
level = "debug"
access_log_format = "json"

[performance]
max_connections = 64

[function]
name = "Greeter"
clock = "utc"
"#,
        );
        let cfg = Config::load_from(path.with_extension("").to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.access_log_format, "json");
        assert_eq!(cfg.performance.max_connections, Some(64));
        assert_eq!(cfg.function.name, "Greeter");
        assert_eq!(cfg.function.clock, SystemClock::Utc);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:7071".parse().unwrap()
        );
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
