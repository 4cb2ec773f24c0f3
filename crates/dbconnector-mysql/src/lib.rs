//! MySQL connector factory for dbconnector.
//!
//! Turns typed [`MySqlSettings`] into the data-source descriptor a MySQL
//! driver understands, keeps a redacted copy for logs, registers TLS
//! configurations and custom dialers under process-unique names, and opens
//! a pooled handle through a [`Driver`].
//!
//! # Example
//!
//! ```rust,ignore
//! use dbconnector_mysql::{MySqlConnector, MySqlSettings};
//! use dbconnector_tls::{TlsSettings, assemble};
//!
//! let tls = assemble(&TlsSettings::new().server_name("db.internal"))?;
//! let connector = MySqlConnector::new(
//!     MySqlSettings::new()
//!         .name("orders")
//!         .username("app")
//!         .password("file:///run/secrets/orders-db")
//!         .address("db.internal:3306")
//!         .schema("orders")
//!         .tls(tls),
//! );
//! let handle = connector.open(&cx, &driver).await;
//! ```

pub mod connector;
pub mod dialer;
pub mod dsn;
pub mod normalize;
pub mod registry;
pub mod settings;

pub use connector::{Driver, MySqlConnector, connect};
pub use dialer::{DialFuture, Dialer};
pub use dsn::{REDACTED, RESERVED_PARAMS, format_duration, render};
pub use normalize::{normalize, normalize_result};
pub use registry::{dialer, register_dialer, register_tls_config, tls_config};
pub use settings::{DEFAULT_COLLATION, DEFAULT_NAME, MySqlSettings, Network};
