use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    SingleUser,
    Proxy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub proxy: Option<ProxyAuthConfig>,
    pub single_user: Option<SingleUserAuthConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxyAuthConfig {
    /// Header carrying the authenticated user's email, set by the reverse proxy.
    pub header: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleUserAuthConfig {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redact_credentials(&self.url))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Replaces the user-info part of a connection URL with `***`.
fn redact_credentials(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://***@{host}"),
        _ => url.to_string(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// IANA zone whose civil calendar defines "today" for date validation.
    pub time_zone: String,
    /// Default page size for reservation listings.
    pub page_size: i64,
}

/// Prefix of every environment variable read into [`Settings`].
pub const ENV_PREFIX: &str = "PAWSTAY";

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` and the process environment.
    ///
    /// Variables are named `PAWSTAY_<SECTION>__<KEY>`, e.g.
    /// `PAWSTAY_BOOKING__TIME_ZONE`. The double underscore separates nesting
    /// levels so keys may themselves contain `_`. Environment values take
    /// precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_environment(environment())
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "info")?
            .set_default("auth.method", "single_user")?
            .set_default("booking.time_zone", "Europe/Warsaw")?
            .set_default("booking.page_size", 10)?
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
