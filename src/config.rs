use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    sync::LazyLock,
};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `listen_addr`. Env: `NOTEFUL_LISTEN_ADDR`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// TOML: `listen_port`. Env: `NOTEFUL_LISTEN_PORT`. Default: `8000`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Connection string of the SQLite database holding `folders` and `notes`.
    /// TOML: `database_url`. Env: `NOTEFUL_DATABASE_URL`. Default: `sqlite://noteful.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `loglevel`. Env: `NOTEFUL_LOGLEVEL`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "NOTEFUL_";

impl Config {
    /// Builds a Figment that merges defaults, an optional `config.toml`, and
    /// `NOTEFUL_`-prefixed environment variables (highest precedence).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration, panicking with the extraction error if any source is malformed.
    pub fn load() -> Self {
        let cfg: Self = Self::figment()
            .extract()
            .unwrap_or_else(|err| panic!("failed to extract configuration: {err}"));
        if cfg.database_url.trim().is_empty() {
            panic!("database_url must be set and non-empty");
        }
        cfg
    }
}

/// Global, lazily-initialized configuration instance. Only the binary reads it;
/// library code receives its settings explicitly.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

/// Default IP address for the HTTP server listen address.
fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the HTTP server.
fn default_listen_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://noteful.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}
