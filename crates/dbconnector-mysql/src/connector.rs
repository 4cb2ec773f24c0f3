//! The MySQL connector factory.
//!
//! [`MySqlConnector::new`] turns settings into a descriptor, registering the
//! TLS configuration and custom dialer along the way. [`MySqlConnector::open`]
//! hands the descriptor to a [`Driver`] and sizes the resulting pool.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use dbconnector_core::{Cx, Error, Outcome};
use dbconnector_pool::{PoolConfig, PoolHandle};

use crate::dialer::RegisteredDialer;
use crate::dsn;
use crate::registry;
use crate::settings::MySqlSettings;

/// A MySQL driver that opens pooled handles from a descriptor.
///
/// The driver resolves `tls=<name>` through [`registry::tls_config`] and a
/// non-standard network segment through [`registry::dialer`].
pub trait Driver: Send + Sync {
    /// The pooled handle the driver produces.
    type Handle: PoolHandle;

    /// Open a handle for `descriptor`.
    fn open(
        &self,
        cx: &Cx,
        descriptor: &str,
    ) -> impl Future<Output = Outcome<Self::Handle, Error>> + Send;
}

/// A rendered, registered MySQL configuration ready to be opened.
#[derive(Clone)]
pub struct MySqlConnector {
    name: String,
    descriptor: String,
    redacted: String,
    tls_name: Option<String>,
    dialer_name: Option<String>,
    pool: PoolConfig,
}

impl MySqlConnector {
    /// Render the descriptors and perform registrations.
    ///
    /// Each call registers the TLS configuration and dialer afresh, so two
    /// connectors never share a registration name.
    pub fn new(settings: MySqlSettings) -> Self {
        let tls_name = settings
            .tls
            .as_ref()
            .map(|tls| registry::register_tls_config(tls.clone()));

        let dialer_name = settings.dialer.as_ref().map(|inner| {
            registry::register_dialer(Arc::new(RegisteredDialer::new(
                Arc::clone(inner),
                settings.network.as_str(),
                settings.name.as_str(),
                dbconnector_core::resolve(&settings.username),
                settings.schema.as_str(),
            )))
        });

        let network = dialer_name
            .as_deref()
            .unwrap_or_else(|| settings.network.as_str());

        let descriptor = dsn::render(&settings, network, tls_name.as_deref(), false);
        let redacted = dsn::render(&settings, network, tls_name.as_deref(), true);

        Self {
            name: settings.name,
            descriptor,
            redacted,
            tls_name,
            dialer_name,
            pool: settings.pool,
        }
    }

    /// The logical pool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor handed to the driver. Contains the password.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// The descriptor with the password replaced, safe to log.
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Registration name of the TLS configuration, if any.
    pub fn tls_name(&self) -> Option<&str> {
        self.tls_name.as_deref()
    }

    /// Registration name of the custom dialer, if any.
    pub fn dialer_name(&self) -> Option<&str> {
        self.dialer_name.as_deref()
    }

    /// `TLS` or `plaintext`.
    pub fn encryption(&self) -> &'static str {
        if self.tls_name.is_some() {
            "TLS"
        } else {
            "plaintext"
        }
    }

    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    /// Open a handle through `driver` and apply pool sizing.
    #[tracing::instrument(level = "debug", skip(self, cx, driver), fields(name = %self.name))]
    pub async fn open<D: Driver>(&self, cx: &Cx, driver: &D) -> Outcome<D::Handle, Error> {
        let handle = match driver.open(cx, &self.descriptor).await {
            Outcome::Ok(handle) => handle,
            Outcome::Err(e) => return Outcome::Err(e),
            Outcome::Cancelled(r) => return Outcome::Cancelled(r),
            Outcome::Panicked(p) => return Outcome::Panicked(p),
        };

        self.pool.apply(&handle);

        tracing::info!(
            name = %self.name,
            encryption = self.encryption(),
            dsn = %self.redacted,
            "Opened MySQL connection pool"
        );
        Outcome::Ok(handle)
    }
}

impl fmt::Debug for MySqlConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConnector")
            .field("name", &self.name)
            .field("descriptor", &self.redacted)
            .field("tls_name", &self.tls_name)
            .field("dialer_name", &self.dialer_name)
            .field("pool", &self.pool)
            .finish()
    }
}

/// Render, register and open in one step.
pub async fn connect<D: Driver>(
    cx: &Cx,
    driver: &D,
    settings: MySqlSettings,
) -> Outcome<D::Handle, Error> {
    MySqlConnector::new(settings).open(cx, driver).await
}
