//! dbconnector - configured MySQL database handles.
//!
//! dbconnector does the plumbing between typed configuration and a MySQL
//! driver:
//!
//! - configuration values that may be literals, `env://NAME` or
//!   `file:///path` ([`resolve`])
//! - TLS client configuration from system roots and extra PEM trust
//!   anchors ([`assemble`])
//! - data-source descriptors with a redacted twin for logs, TLS and dialer
//!   registries, and pool sizing ([`MySqlConnector`])
//! - a nullable `BIGINT UNSIGNED` column ([`NullUint64`])
//! - duplicate-key errors surfaced as [`Error::OptimisticConcurrency`]
//!   ([`normalize`])
//!
//! # Quick Start
//!
//! ```ignore
//! use dbconnector::prelude::*;
//!
//! async fn open_orders<D: Driver>(cx: &Cx, driver: &D) -> Outcome<D::Handle, Error> {
//!     let tls = match assemble(&TlsSettings::new().server_name("db.internal")) {
//!         Ok(tls) => tls,
//!         Err(e) => return Outcome::Err(e),
//!     };
//!
//!     let settings = MySqlSettings::new()
//!         .name("orders")
//!         .username("env://ORDERS_DB_USER")
//!         .password("file:///run/secrets/orders-db")
//!         .address("db.internal:3306")
//!         .schema("orders")
//!         .isolation(IsolationLevel::RepeatableRead)
//!         .tls(tls);
//!
//!     connect(cx, driver, settings).await
//! }
//! ```

pub use dbconnector_core::{
    // asupersync re-exports
    Cx,
    Outcome,
    // Core types
    BoundsError,
    ConfigError,
    ConnectionError,
    ConnectionErrorKind,
    Error,
    IsolationLevel,
    NullUint64,
    Result,
    ScanError,
    ServerError,
    TlsError,
    TlsErrorKind,
    Value,
    resolve,
};
pub use dbconnector_mysql::{
    DialFuture, Dialer, Driver, MySqlConnector, MySqlSettings, Network, REDACTED, connect, dialer,
    normalize, normalize_result, register_dialer, register_tls_config, render, tls_config,
};
pub use dbconnector_pool::{PoolConfig, PoolHandle};
pub use dbconnector_tls::{TlsConfig, TlsSettings, TlsVersion, assemble};

/// Convenient imports for the common case.
pub mod prelude {
    pub use crate::{
        Cx, Dialer, Driver, Error, IsolationLevel, MySqlConnector, MySqlSettings, Network,
        NullUint64, Outcome, PoolConfig, PoolHandle, Result, TlsConfig, TlsSettings, TlsVersion,
        Value, assemble, connect, normalize, resolve,
    };
}
