//! Declared TLS options.

/// Minimum TLS protocol version accepted during the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVersion {
    /// TLS 1.2 and later
    #[default]
    Tls12,
    /// TLS 1.3 only
    Tls13,
}

static TLS12_AND_LATER: &[&rustls::SupportedProtocolVersion] =
    &[&rustls::version::TLS13, &rustls::version::TLS12];
static TLS13_ONLY: &[&rustls::SupportedProtocolVersion] = &[&rustls::version::TLS13];

impl TlsVersion {
    /// The protocol versions a client may negotiate with this floor.
    pub fn protocol_versions(self) -> &'static [&'static rustls::SupportedProtocolVersion] {
        match self {
            TlsVersion::Tls12 => TLS12_AND_LATER,
            TlsVersion::Tls13 => TLS13_ONLY,
        }
    }
}

/// TLS options used to assemble a [`TlsConfig`](crate::TlsConfig).
///
/// `trusted_cas_pem` is a configuration value (a literal PEM bundle,
/// `env://NAME` or `file:///path`). `trusted_cas_pem_file` is a plain path
/// and takes precedence when both are set. The path values `public-ca` and
/// `true` mean "no file".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsSettings {
    pub enabled: bool,
    pub trust_system_roots: bool,
    pub server_name: String,
    pub min_version: TlsVersion,
    pub trusted_cas_pem: String,
    pub trusted_cas_pem_file: String,
}

impl Default for TlsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            trust_system_roots: true,
            server_name: String::new(),
            min_version: TlsVersion::Tls12,
            trusted_cas_pem: String::new(),
            trusted_cas_pem_file: String::new(),
        }
    }
}

impl TlsSettings {
    /// Create new settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable TLS entirely.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Start from the host's trust store instead of an empty pool.
    pub fn trust_system_roots(mut self, trust: bool) -> Self {
        self.trust_system_roots = trust;
        self
    }

    /// Set the server name used for SNI and certificate verification.
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    /// Set the minimum protocol version.
    pub fn min_version(mut self, version: TlsVersion) -> Self {
        self.min_version = version;
        self
    }

    /// Set additional trust anchors as PEM (literal, `env://` or `file://`).
    pub fn trusted_cas_pem(mut self, pem: impl Into<String>) -> Self {
        self.trusted_cas_pem = pem.into();
        self
    }

    /// Set a file containing additional trust anchors as PEM.
    pub fn trusted_cas_pem_file(mut self, path: impl Into<String>) -> Self {
        self.trusted_cas_pem_file = path.into();
        self
    }

    /// The PEM file path with the "no file" sentinels removed.
    pub fn sanitized_pem_file(&self) -> &str {
        match self.trusted_cas_pem_file.as_str() {
            "public-ca" | "true" => "",
            other => other,
        }
    }
}
