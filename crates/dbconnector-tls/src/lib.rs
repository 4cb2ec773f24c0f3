//! TLS client configuration for dbconnector.
//!
//! Builds an immutable rustls client configuration from declared options:
//! whether TLS is enabled, whether to start from the host trust store,
//! additional trust anchors (inline PEM, `env://`, `file://` or a plain
//! file path), the server name and the minimum protocol version.
//!
//! # Example
//!
//! ```rust,ignore
//! use dbconnector_tls::{TlsSettings, TlsVersion, assemble};
//!
//! let tls = assemble(
//!     &TlsSettings::new()
//!         .server_name("db.example.com")
//!         .min_version(TlsVersion::Tls13)
//!         .trusted_cas_pem_file("/etc/ssl/private-ca.pem"),
//! )?;
//! ```
//!
//! Client certificates and encrypted private keys are not supported.

pub mod config;
pub mod settings;

pub use config::{TlsConfig, assemble};
pub use settings::{TlsSettings, TlsVersion};
