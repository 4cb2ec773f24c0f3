//! Process-wide registries for TLS configurations and dialers.
//!
//! A descriptor can only carry strings, so TLS configurations and custom
//! dialers are deposited here under a fresh name and the descriptor embeds
//! that name. Entries live until the process exits.
//!
//! Names are a nanosecond timestamp joined to a per-process sequence
//! number, so two registrations in the same nanosecond still get distinct
//! names.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use dbconnector_tls::TlsConfig;

use crate::dialer::Dialer;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

static TLS_CONFIGS: LazyLock<Registry<TlsConfig>> = LazyLock::new(Registry::new);
static DIALERS: LazyLock<Registry<Arc<dyn Dialer>>> = LazyLock::new(Registry::new);

struct Registry<T> {
    entries: Mutex<HashMap<String, T>>,
}

impl<T: Clone> Registry<T> {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn insert(&self, value: T) -> String {
        // Entries are only ever inserted whole, so a poisoned map is intact.
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let name = fresh_name();
        entries.insert(name.clone(), value);
        name
    }

    fn get(&self, name: &str) -> Option<T> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

fn fresh_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{nanos}-{seq}")
}

/// Register a TLS configuration and return the name it is stored under.
pub fn register_tls_config(config: TlsConfig) -> String {
    let name = TLS_CONFIGS.insert(config);
    tracing::debug!(name = %name, "Registered TLS configuration");
    name
}

/// Look up a registered TLS configuration.
pub fn tls_config(name: &str) -> Option<TlsConfig> {
    TLS_CONFIGS.get(name)
}

/// Register a dialer and return the name it is stored under.
pub fn register_dialer(dialer: Arc<dyn Dialer>) -> String {
    let name = DIALERS.insert(dialer);
    tracing::debug!(name = %name, "Registered dialer");
    name
}

/// Look up a registered dialer.
pub fn dialer(name: &str) -> Option<Arc<dyn Dialer>> {
    DIALERS.get(name)
}
