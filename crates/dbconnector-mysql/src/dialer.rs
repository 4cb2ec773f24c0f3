//! Custom dialers.
//!
//! A dialer replaces the driver's own transport setup, for example to reach
//! a server through a proxy or a tunnel. The driver finds a dialer through
//! the registration name embedded as the network segment of the descriptor
//! and calls it with that name; the registered wrapper swaps the original
//! network kind back in before delegating.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use asupersync::net::TcpStream;
use asupersync::types::CancelReason;
use dbconnector_core::{Cx, Error, Outcome};

/// Future returned by [`Dialer::dial`].
pub type DialFuture<'a> = Pin<Box<dyn Future<Output = Outcome<TcpStream, Error>> + Send + 'a>>;

/// Establishes the transport for a MySQL connection.
///
/// Implementations must respect cancellation carried by `cx`.
pub trait Dialer: Send + Sync {
    /// Connect to `address` over `network` (`tcp` or `unix`).
    fn dial<'a>(&'a self, cx: &'a Cx, network: &'a str, address: &'a str) -> DialFuture<'a>;
}

/// The dialer deposited in the registry on behalf of a connector.
pub(crate) struct RegisteredDialer {
    inner: Arc<dyn Dialer>,
    network: String,
    pool: String,
    username: String,
    schema: String,
}

impl RegisteredDialer {
    pub(crate) fn new(
        inner: Arc<dyn Dialer>,
        network: impl Into<String>,
        pool: impl Into<String>,
        username: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            network: network.into(),
            pool: pool.into(),
            username: username.into(),
            schema: schema.into(),
        }
    }
}

impl Dialer for RegisteredDialer {
    fn dial<'a>(&'a self, cx: &'a Cx, _network: &'a str, address: &'a str) -> DialFuture<'a> {
        Box::pin(async move {
            if cx.is_cancel_requested() {
                return Outcome::Cancelled(
                    cx.cancel_reason()
                        .unwrap_or_else(|| CancelReason::user("dial cancelled")),
                );
            }

            match self.inner.dial(cx, &self.network, address).await {
                Outcome::Ok(stream) => {
                    tracing::info!(
                        name = %self.pool,
                        user = %self.username,
                        network = %self.network,
                        address = %address,
                        schema = %self.schema,
                        "Established MySQL transport through custom dialer"
                    );
                    Outcome::Ok(stream)
                }
                other => other,
            }
        })
    }
}
