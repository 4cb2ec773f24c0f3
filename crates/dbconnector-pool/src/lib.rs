//! Connection pool sizing for dbconnector database handles.
//!
//! The pool itself belongs to the driver. This crate describes how large it
//! may grow and how long connections may live, and applies that description
//! to any handle implementing [`PoolHandle`].

use std::time::Duration;

/// Connection pool configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of open connections (active + idle)
    pub max_open_connections: u16,
    /// Maximum number of idle connections retained
    pub max_idle_connections: u16,
    /// How long a connection may sit idle before it is closed
    pub max_idle_time: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_open_connections: 1024,
            max_idle_connections: 1024,
            max_idle_time: Duration::from_secs(720 * 60 * 60), // 720h
            max_lifetime: Duration::from_secs(720 * 60 * 60),  // 720h
        }
    }
}

impl PoolConfig {
    /// Create a new pool configuration with the given max open connections.
    pub fn new(max_open_connections: u16) -> Self {
        Self {
            max_open_connections,
            ..Default::default()
        }
    }

    /// Set max idle connections.
    pub fn max_idle_connections(mut self, n: u16) -> Self {
        self.max_idle_connections = n;
        self
    }

    /// Set max idle time.
    pub fn max_idle_time(mut self, timeout: Duration) -> Self {
        self.max_idle_time = timeout;
        self
    }

    /// Set max lifetime.
    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Apply this configuration to a driver handle.
    pub fn apply<H: PoolHandle + ?Sized>(&self, handle: &H) {
        tracing::trace!(
            max_open = self.max_open_connections,
            max_idle = self.max_idle_connections,
            max_idle_time = ?self.max_idle_time,
            max_lifetime = ?self.max_lifetime,
            "Applying pool sizing"
        );
        handle.set_max_idle_time(self.max_idle_time);
        handle.set_max_lifetime(self.max_lifetime);
        handle.set_max_open_connections(usize::from(self.max_open_connections));
        handle.set_max_idle_connections(usize::from(self.max_idle_connections));
    }
}

/// A pooled database handle whose sizing can be adjusted after open.
///
/// Implementations are expected to use interior mutability; handles are
/// shared across threads.
pub trait PoolHandle: Send + Sync {
    /// Limit the number of open connections.
    fn set_max_open_connections(&self, n: usize);

    /// Limit the number of idle connections retained.
    fn set_max_idle_connections(&self, n: usize);

    /// Close connections that have been idle for longer than `timeout`.
    fn set_max_idle_time(&self, timeout: Duration);

    /// Close connections older than `lifetime`.
    fn set_max_lifetime(&self, lifetime: Duration);
}
