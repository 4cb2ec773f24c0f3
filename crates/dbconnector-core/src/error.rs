//! Error types for dbconnector operations.

use std::fmt;

/// The primary error type for all dbconnector operations.
#[derive(Debug)]
pub enum Error {
    /// Failed to establish a database handle
    Connection(ConnectionError),
    /// Error reported by the MySQL server
    Server(ServerError),
    /// TLS assembly errors (trust anchors could not be loaded)
    Tls(TlsError),
    /// A driver value could not be converted into a column type
    Scan(ScanError),
    /// A column payload cannot be carried by the driver
    OutOfBounds(BoundsError),
    /// Another writer has modified the underlying rows
    OptimisticConcurrency,
    /// Configuration errors
    Config(ConfigError),
    /// Custom error with message
    Custom(String),
}

#[derive(Debug)]
pub struct ConnectionError {
    pub kind: ConnectionErrorKind,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionErrorKind {
    /// The driver refused to open a handle for the descriptor
    Open,
    /// A dialer failed to establish the transport
    Dial,
    /// The descriptor referenced a registration that does not exist
    Registration,
}

/// An error packet returned by the MySQL server.
#[derive(Debug, Clone)]
pub struct ServerError {
    /// MySQL error number (e.g. 1062 for ER_DUP_ENTRY)
    pub number: u16,
    /// Five character SQLSTATE, when the server sent one
    pub sqlstate: Option<String>,
    pub message: String,
}

#[derive(Debug)]
pub struct TlsError {
    pub kind: TlsErrorKind,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsErrorKind {
    /// The PEM source was named but could not be read
    ReadPemFile,
    /// The PEM bytes did not contain a usable certificate
    MalformedPem,
}

/// Failure converting a driver value into a column type.
#[derive(Debug, Clone)]
pub struct ScanError {
    /// Type name of the driver value (see [`Value::type_name`](crate::Value::type_name))
    pub actual: &'static str,
    /// Rendering of the offending value
    pub value: String,
    /// The Rust type the value was scanned into
    pub target: &'static str,
}

/// A column payload exceeds what the driver can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    pub value: u64,
    pub max: u64,
}

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Is this the duplicate-key sentinel produced by
    /// `dbconnector_mysql::normalize`?
    pub fn is_optimistic_concurrency(&self) -> bool {
        matches!(self, Error::OptimisticConcurrency)
    }

    /// Did a column scan fail?
    pub fn is_scan(&self) -> bool {
        matches!(self, Error::Scan(_))
    }

    /// Did a column payload overflow the driver's carrying capacity?
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::OutOfBounds(_))
    }

    /// Get the TLS error kind, if this is a TLS error.
    pub fn tls_kind(&self) -> Option<TlsErrorKind> {
        match self {
            Error::Tls(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Get the MySQL server error number, if available.
    pub fn server_error_number(&self) -> Option<u16> {
        match self {
            Error::Server(e) => Some(e.number),
            _ => None,
        }
    }

    /// Get SQLSTATE if available (e.g., "23000" for integrity violations)
    pub fn sqlstate(&self) -> Option<&str> {
        match self {
            Error::Server(e) => e.sqlstate.as_deref(),
            _ => None,
        }
    }
}

impl ServerError {
    /// Is this a unique index violation (ER_DUP_ENTRY)?
    pub fn is_duplicate_entry(&self) -> bool {
        self.number == 1062
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection(e) => write!(f, "Connection error: {}", e.message),
            Error::Server(e) => write!(f, "Server error: {}", e),
            Error::Tls(e) => write!(f, "TLS error: {}", e),
            Error::Scan(e) => write!(f, "Scan error: {}", e),
            Error::OutOfBounds(e) => write!(f, "Out of bounds: {}", e),
            Error::OptimisticConcurrency => {
                write!(f, "another writer has modified the underlying rows")
            }
            Error::Config(e) => write!(f, "Configuration error: {}", e.message),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connection(e) => e
                .source
                .as_deref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            Error::Tls(e) => e
                .source
                .as_deref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            Error::Config(e) => e
                .source
                .as_deref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sqlstate {
            Some(state) => write!(f, "Error {} ({}): {}", self.number, state, self.message),
            None => write!(f, "Error {}: {}", self.number, self.message),
        }
    }
}

impl fmt::Display for TlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            TlsErrorKind::ReadPemFile => "unable to read PEM file",
            TlsErrorKind::MalformedPem => "malformed PEM",
        };
        if self.message.is_empty() {
            write!(f, "{}", prefix)
        } else {
            write!(f, "{}: {}", prefix, self.message)
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "converting driver value type {} ({}) to a {}",
            self.actual, self.value, self.target
        )
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} exceeds the driver maximum of {}",
            self.value, self.max
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ConnectionError> for Error {
    fn from(err: ConnectionError) -> Self {
        Error::Connection(err)
    }
}

impl From<ServerError> for Error {
    fn from(err: ServerError) -> Self {
        Error::Server(err)
    }
}

impl From<TlsError> for Error {
    fn from(err: TlsError) -> Self {
        Error::Tls(err)
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::Scan(err)
    }
}

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Self {
        Error::OutOfBounds(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

/// Result type alias for dbconnector operations.
pub type Result<T> = std::result::Result<T, Error>;
