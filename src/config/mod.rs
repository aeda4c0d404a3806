// Configuration module entry point
// Defaults mirror the original hardcoded values: 127.0.0.1:8080 serving
// static/abcd.html

mod types;

use std::net::SocketAddr;

pub use types::{Config, LoggingConfig, RoutesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" (optional)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Precedence: environment (`SERVER_` prefix) over file over defaults.
    /// Nested keys use a `__` separator, e.g. `SERVER_SERVER__PORT=9090`
    /// or `SERVER_ROUTES__HOME_FILE=www/index.html`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("routes.home_file", "static/abcd.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests here read (or mutate) process environment; serialize them
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_match_original_literals() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let cfg = Config::load_from("no-such-config").expect("load defaults");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.routes.home_file, "static/abcd.html");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn env_override_reaches_nested_keys() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("SERVER_SERVER__PORT", "9090");
        std::env::set_var("SERVER_ROUTES__HOME_FILE", "www/index.html");

        let cfg = Config::load_from("no-such-config").expect("load with env");

        std::env::remove_var("SERVER_SERVER__PORT");
        std::env::remove_var("SERVER_ROUTES__HOME_FILE");

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.routes.home_file, "www/index.html");
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let cfg = Config::load_from("no-such-config").expect("load defaults");
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr, "127.0.0.1:8080".parse().expect("literal addr"));
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let mut cfg = Config::load_from("no-such-config").expect("load defaults");
        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
