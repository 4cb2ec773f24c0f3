//! Assembly of immutable TLS client configurations.

use std::sync::Arc;

use dbconnector_core::error::{ConfigError, TlsError, TlsErrorKind};
use dbconnector_core::{Error, Result, resolve};
use rustls::client::Resumption;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, RootCertStore};

use crate::settings::{TlsSettings, TlsVersion};

/// An assembled, immutable TLS client configuration.
///
/// Cloning is cheap; the rustls configuration is shared.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    client: Arc<ClientConfig>,
    server_name: Option<String>,
    min_version: TlsVersion,
    system_roots: usize,
    trust_anchors: usize,
}

impl TlsConfig {
    /// The rustls configuration to hand to a TLS connector.
    pub fn client_config(&self) -> Arc<ClientConfig> {
        Arc::clone(&self.client)
    }

    /// The configured server name, if any.
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    /// The server name to present: the configured one, else `host`.
    pub fn sni<'a>(&'a self, host: &'a str) -> &'a str {
        self.server_name.as_deref().unwrap_or(host)
    }

    /// Parse the SNI name for a handshake against `host`.
    pub fn server_name_for(&self, host: &str) -> Result<ServerName<'static>> {
        let name = self.sni(host).to_string();
        ServerName::try_from(name.clone()).map_err(|e| {
            Error::Config(ConfigError {
                message: format!("Invalid server name '{}': {}", name, e),
                source: Some(Box::new(e)),
            })
        })
    }

    /// The minimum protocol version.
    pub fn min_version(&self) -> TlsVersion {
        self.min_version
    }

    /// Number of roots taken from the host trust store.
    pub fn system_roots(&self) -> usize {
        self.system_roots
    }

    /// Number of additional trust anchors loaded from PEM.
    pub fn trust_anchors(&self) -> usize {
        self.trust_anchors
    }
}

/// Build a TLS configuration from declared settings.
///
/// Returns `Ok(None)` when TLS is disabled. Trust anchors come from
/// `trusted_cas_pem_file` when set, otherwise from `trusted_cas_pem`.
/// Session resumption is disabled.
///
/// # Errors
///
/// - [`TlsErrorKind::ReadPemFile`] when the PEM file cannot be read
/// - [`TlsErrorKind::MalformedPem`] when the PEM bytes hold no usable certificate
pub fn assemble(settings: &TlsSettings) -> Result<Option<TlsConfig>> {
    if !settings.enabled {
        return Ok(None);
    }

    let mut roots = if settings.trust_system_roots {
        system_root_store()
    } else {
        RootCertStore::empty()
    };
    let system_roots = roots.len();

    let trust_anchors = match resolve_pem(&settings.trusted_cas_pem, settings.sanitized_pem_file())? {
        Some(pem) => add_pem(&mut roots, &pem)?,
        None => 0,
    };

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut client = ClientConfig::builder_with_provider(provider)
        .with_protocol_versions(settings.min_version.protocol_versions())
        .map_err(|e| {
            Error::Config(ConfigError {
                message: format!("Failed to set TLS versions: {}", e),
                source: Some(Box::new(e)),
            })
        })?
        .with_root_certificates(roots)
        .with_no_client_auth();
    client.resumption = Resumption::disabled();

    tracing::debug!(
        system_roots,
        trust_anchors,
        server_name = %settings.server_name,
        min_version = ?settings.min_version,
        "Assembled TLS configuration"
    );

    Ok(Some(TlsConfig {
        client: Arc::new(client),
        server_name: (!settings.server_name.is_empty()).then(|| settings.server_name.clone()),
        min_version: settings.min_version,
        system_roots,
        trust_anchors,
    }))
}

/// Snapshot the host trust store, falling back to the bundled Mozilla roots
/// when the platform store yields nothing.
fn system_root_store() -> RootCertStore {
    let mut roots = RootCertStore::empty();

    let native = rustls_native_certs::load_native_certs();
    for e in &native.errors {
        tracing::debug!(error = %e, "Skipping unreadable platform certificate");
    }
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    if ignored > 0 {
        tracing::debug!(ignored, "Ignored unparsable platform certificates");
    }

    if added == 0 {
        tracing::warn!("Platform trust store is empty; trusting the bundled Mozilla roots instead");
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    }
    roots
}

fn resolve_pem(source: &str, filename: &str) -> Result<Option<Vec<u8>>> {
    if !filename.is_empty() {
        return std::fs::read(filename).map(Some).map_err(|e| {
            Error::Tls(TlsError {
                kind: TlsErrorKind::ReadPemFile,
                message: format!("'{}': {}", filename, e),
                source: Some(Box::new(e)),
            })
        });
    }

    if source.is_empty() {
        return Ok(None);
    }

    let resolved = resolve(source);
    if resolved.is_empty() {
        return Ok(None);
    }
    Ok(Some(resolved.into_bytes()))
}

fn add_pem(roots: &mut RootCertStore, pem: &[u8]) -> Result<usize> {
    let certs = rustls_pemfile::certs(&mut &pem[..])
        .collect::<std::result::Result<Vec<CertificateDer<'static>>, _>>()
        .map_err(|e| malformed_pem(e.to_string()))?;

    if certs.is_empty() {
        return Err(malformed_pem("no certificates found"));
    }

    let (added, _) = roots.add_parsable_certificates(certs);
    if added == 0 {
        return Err(malformed_pem("no certificate could be used as a trust anchor"));
    }
    Ok(added)
}

fn malformed_pem(message: impl Into<String>) -> Error {
    Error::Tls(TlsError {
        kind: TlsErrorKind::MalformedPem,
        message: message.into(),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_short_circuits() {
        let settings = TlsSettings::new()
            .enabled(false)
            .trusted_cas_pem_file("/does/not/exist.pem")
            .trusted_cas_pem("garbage");
        assert!(assemble(&settings).unwrap().is_none());
    }

    #[test]
    fn test_empty_pool_without_system_roots() {
        let config = assemble(&TlsSettings::new().trust_system_roots(false))
            .unwrap()
            .unwrap();
        assert_eq!(config.system_roots(), 0);
        assert_eq!(config.trust_anchors(), 0);
        assert_eq!(config.server_name(), None);
        assert_eq!(config.sni("db.internal"), "db.internal");
    }

    #[test]
    fn test_session_resumption_disabled() {
        let config = assemble(&TlsSettings::new().trust_system_roots(false))
            .unwrap()
            .unwrap();
        let client = config.client_config();
        assert_eq!(
            format!("{:?}", client.resumption),
            format!("{:?}", Resumption::disabled())
        );
    }

    #[test]
    fn test_malformed_inline_pem() {
        let settings = TlsSettings::new()
            .trust_system_roots(false)
            .trusted_cas_pem("not a certificate");
        let err = assemble(&settings).unwrap_err();
        assert_eq!(err.tls_kind(), Some(TlsErrorKind::MalformedPem));
    }

    #[test]
    fn test_unresolvable_inline_pem_is_not_an_error() {
        let settings = TlsSettings::new()
            .trust_system_roots(false)
            .trusted_cas_pem("env://DBCONNECTOR_TLS_TEST_NEVER_SET");
        let config = assemble(&settings).unwrap().unwrap();
        assert_eq!(config.trust_anchors(), 0);
    }

    #[test]
    fn test_missing_pem_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pem");
        let settings = TlsSettings::new()
            .trust_system_roots(false)
            .trusted_cas_pem_file(missing.display().to_string());
        let err = assemble(&settings).unwrap_err();
        assert_eq!(err.tls_kind(), Some(TlsErrorKind::ReadPemFile));
    }

    #[test]
    fn test_server_name() {
        let config = assemble(
            &TlsSettings::new()
                .trust_system_roots(false)
                .server_name("mysql.example.com"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.server_name(), Some("mysql.example.com"));
        assert_eq!(config.sni("10.0.0.1"), "mysql.example.com");
        assert!(config.server_name_for("10.0.0.1").is_ok());
    }
}
