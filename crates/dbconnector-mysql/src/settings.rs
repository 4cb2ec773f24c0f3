//! MySQL connector settings.
//!
//! Holds every option that shapes a MySQL handle. Settings start from the
//! documented defaults and are refined through consuming setters; a later
//! call to the same setter overrides an earlier one.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dbconnector_core::IsolationLevel;
use dbconnector_pool::PoolConfig;
use dbconnector_tls::TlsConfig;

use crate::dialer::Dialer;

/// Logical name used when none is given.
pub const DEFAULT_NAME: &str = "default-mysql-pool";

/// Collation used when none is given.
pub const DEFAULT_COLLATION: &str = "utf8_unicode_520_ci";

/// Transport used to reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// TCP to `host:port`
    #[default]
    Tcp,
    /// Unix domain socket at a filesystem path
    Unix,
}

impl Network {
    /// The network name as it appears in a descriptor.
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Tcp => "tcp",
            Network::Unix => "unix",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a MySQL handle.
///
/// `username`, `password` and `address` are configuration values: each may
/// be a literal, `env://NAME` or `file:///path`, and is resolved when the
/// descriptor is rendered.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dbconnector_mysql::MySqlSettings;
///
/// let settings = MySqlSettings::new()
///     .name("orders")
///     .username("app")
///     .password("env://ORDERS_DB_PASSWORD")
///     .address("db.internal:3306")
///     .schema("orders")
///     .read_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct MySqlSettings {
    /// Logical pool name, used in log events
    pub name: String,
    pub username: String,
    pub password: String,
    pub network: Network,
    /// `host:port` for TCP, a socket path for Unix
    pub address: String,
    /// Default schema selected on connect
    pub schema: String,
    pub collation: String,
    /// Scan DATE and DATETIME columns into time values
    pub parse_time: bool,
    /// Interpolate placeholders client side instead of preparing
    pub interpolate_params: bool,
    pub multi_statements: bool,
    /// Keep connections to a server that became read only
    pub allow_read_only: bool,
    /// Report matched rows instead of changed rows
    pub client_found_rows: bool,
    pub dial_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub pool: PoolConfig,
    pub isolation: IsolationLevel,
    pub tls: Option<TlsConfig>,
    pub dialer: Option<Arc<dyn Dialer>>,
    /// Extra driver parameters, emitted after the standard ones
    pub params: BTreeMap<String, String>,
}

impl Default for MySqlSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            username: "root".to_string(),
            password: String::new(),
            network: Network::Tcp,
            address: "127.0.0.1:3306".to_string(),
            schema: String::new(),
            collation: DEFAULT_COLLATION.to_string(),
            parse_time: true,
            interpolate_params: true,
            multi_statements: false,
            allow_read_only: false,
            client_found_rows: true,
            dial_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(15),
            write_timeout: Duration::from_secs(30),
            pool: PoolConfig::default(),
            isolation: IsolationLevel::ReadCommitted,
            tls: None,
            dialer: None,
            params: BTreeMap::new(),
        }
    }
}

impl MySqlSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical pool name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the network kind.
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the server address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the default schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Set the connection collation.
    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = collation.into();
        self
    }

    pub fn parse_time(mut self, enabled: bool) -> Self {
        self.parse_time = enabled;
        self
    }

    pub fn interpolate_params(mut self, enabled: bool) -> Self {
        self.interpolate_params = enabled;
        self
    }

    pub fn multi_statements(mut self, enabled: bool) -> Self {
        self.multi_statements = enabled;
        self
    }

    pub fn allow_read_only(mut self, enabled: bool) -> Self {
        self.allow_read_only = enabled;
        self
    }

    pub fn client_found_rows(mut self, enabled: bool) -> Self {
        self.client_found_rows = enabled;
        self
    }

    /// Set the dial timeout.
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the write timeout.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Replace the whole pool configuration.
    pub fn pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    pub fn max_open_connections(mut self, n: u16) -> Self {
        self.pool.max_open_connections = n;
        self
    }

    pub fn max_idle_connections(mut self, n: u16) -> Self {
        self.pool.max_idle_connections = n;
        self
    }

    pub fn max_idle_time(mut self, timeout: Duration) -> Self {
        self.pool.max_idle_time = timeout;
        self
    }

    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.pool.max_lifetime = lifetime;
        self
    }

    /// Set the session transaction isolation level.
    pub fn isolation(mut self, level: IsolationLevel) -> Self {
        self.isolation = level;
        self
    }

    /// Use an assembled TLS configuration.
    ///
    /// Accepts the output of [`dbconnector_tls::assemble`] directly, so a
    /// disabled TLS configuration leaves the connection in plaintext.
    pub fn tls(mut self, tls: impl Into<Option<TlsConfig>>) -> Self {
        self.tls = tls.into();
        self
    }

    /// Route connections through a custom dialer.
    pub fn dialer(mut self, dialer: Arc<dyn Dialer>) -> Self {
        self.dialer = Some(dialer);
        self
    }

    /// Add a driver parameter to the descriptor.
    ///
    /// Keys the descriptor already writes, such as `tls` or `collation`,
    /// are ignored at render time; see [`RESERVED_PARAMS`](crate::dsn::RESERVED_PARAMS).
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for MySqlSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            crate::dsn::REDACTED
        };
        f.debug_struct("MySqlSettings")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &password)
            .field("network", &self.network)
            .field("address", &self.address)
            .field("schema", &self.schema)
            .field("collation", &self.collation)
            .field("parse_time", &self.parse_time)
            .field("interpolate_params", &self.interpolate_params)
            .field("multi_statements", &self.multi_statements)
            .field("allow_read_only", &self.allow_read_only)
            .field("client_found_rows", &self.client_found_rows)
            .field("dial_timeout", &self.dial_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("write_timeout", &self.write_timeout)
            .field("pool", &self.pool)
            .field("isolation", &self.isolation)
            .field("tls", &self.tls.is_some())
            .field("dialer", &self.dialer.is_some())
            .field("params", &self.params)
            .finish()
    }
}
