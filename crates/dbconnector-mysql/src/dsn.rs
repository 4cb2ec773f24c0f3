//! Data-source descriptor rendering.
//!
//! A descriptor has the shape
//!
//! ```text
//! [user[:password]@]network(address)/schema?key=value&...
//! ```
//!
//! The standard keys are always emitted in a fixed order, followed by any
//! extra driver parameters in key order, so rendering the same settings
//! twice yields the same bytes.

use std::fmt::Write as _;
use std::time::Duration;

use dbconnector_core::resolve;
use url::form_urlencoded;

use crate::settings::MySqlSettings;

/// Replaces the password in descriptors meant for logs.
pub const REDACTED: &str = "REDACTED";

/// Keys written by [`render`] itself. Extra parameters may not override them.
pub const RESERVED_PARAMS: [&str; 11] = [
    "collation",
    "parseTime",
    "interpolateParams",
    "multiStatements",
    "rejectReadOnly",
    "clientFoundRows",
    "timeout",
    "readTimeout",
    "writeTimeout",
    "transaction_isolation",
    "tls",
];

/// Render a descriptor.
///
/// `network` is the network segment to emit; it is the settings' network
/// kind, or the registration name of a custom dialer. `tls_name` is the
/// registration name of the TLS configuration, if any.
///
/// With `redact` set, a non-empty password is replaced by [`REDACTED`].
/// Nothing else changes.
///
/// Extra parameters named like one of the [`RESERVED_PARAMS`] are dropped.
pub fn render(
    settings: &MySqlSettings,
    network: &str,
    tls_name: Option<&str>,
    redact: bool,
) -> String {
    let username = resolve(&settings.username);
    let password = resolve(&settings.password);
    let address = resolve(&settings.address);

    let mut out = String::with_capacity(256);

    if !username.is_empty() || !password.is_empty() {
        out.push_str(&username);
        if !password.is_empty() {
            out.push(':');
            out.push_str(if redact { REDACTED } else { &password });
        }
        out.push('@');
    }

    let _ = write!(out, "{network}({address})");
    out.push('/');
    out.push_str(&settings.schema);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("collation", &settings.collation)
        .append_pair("parseTime", bool_str(settings.parse_time))
        .append_pair("interpolateParams", bool_str(settings.interpolate_params))
        .append_pair("multiStatements", bool_str(settings.multi_statements))
        .append_pair("rejectReadOnly", bool_str(!settings.allow_read_only))
        .append_pair("clientFoundRows", bool_str(settings.client_found_rows))
        .append_pair("timeout", &format_duration(settings.dial_timeout))
        .append_pair("readTimeout", &format_duration(settings.read_timeout))
        .append_pair("writeTimeout", &format_duration(settings.write_timeout))
        .append_pair(
            "transaction_isolation",
            &settings.isolation.as_sql_literal(),
        );
    if let Some(name) = tls_name {
        query.append_pair("tls", name);
    }
    for (key, value) in &settings.params {
        if RESERVED_PARAMS.contains(&key.as_str()) {
            tracing::warn!(key = %key, "Ignoring driver parameter that would override a standard key");
            continue;
        }
        query.append_pair(key, value);
    }

    out.push('?');
    out.push_str(&query.finish());
    out
}

const fn bool_str(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

/// Format a duration the way the MySQL driver parses it back:
/// `15s`, `1m30s`, `720h0m0s`, `1.5s`, `250ms`.
pub fn format_duration(d: Duration) -> String {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, unit) = if nanos < 1_000 {
            (1, "ns")
        } else if nanos < 1_000_000 {
            (1_000, "µs")
        } else {
            (1_000_000, "ms")
        };
        return format!("{}{}", decimal(nanos, scale), unit);
    }

    let secs = d.as_secs();
    let hours = secs / 3600;
    let minutes = (secs / 60) % 60;
    let seconds = decimal(
        u128::from(secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos()),
        NANOS_PER_SEC,
    );

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// `value / scale` with the fraction written out and trailing zeros dropped.
fn decimal(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
