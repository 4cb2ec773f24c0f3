//! Nullable column types.

use crate::error::{Error, ScanError};
use crate::value::Value;

/// A `BIGINT UNSIGNED` column that may be NULL.
///
/// `valid` reports whether the database value was non-NULL. When `valid`
/// is false, `value` is always 0.
///
/// Scanning follows the conventions of nullable signed integers: `valid`
/// becomes false only for the null marker. A non-NULL value that cannot be
/// converted still leaves `valid` set, resets `value` to 0 and returns a
/// scan error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullUint64 {
    pub value: u64,
    pub valid: bool,
}

impl NullUint64 {
    /// A NULL column value.
    pub const fn null() -> Self {
        Self {
            value: 0,
            valid: false,
        }
    }

    /// A non-NULL column value.
    pub const fn new(value: u64) -> Self {
        Self { value, valid: true }
    }

    /// Populate from a driver value.
    pub fn scan(&mut self, source: &Value) -> Result<(), Error> {
        if source.is_null() {
            self.value = 0;
            self.valid = false;
            return Ok(());
        }

        self.valid = true;

        let converted = match source {
            Value::Bytes(b) => std::str::from_utf8(b).ok().and_then(parse_decimal),
            Value::Text(s) => parse_decimal(s),
            Value::TinyInt(v) => u64::try_from(*v).ok(),
            Value::SmallInt(v) => u64::try_from(*v).ok(),
            Value::Int(v) => u64::try_from(*v).ok(),
            Value::BigInt(v) => u64::try_from(*v).ok(),
            Value::UnsignedBigInt(v) => Some(*v),
            Value::Float(v) => exact_u64(f64::from(*v)),
            Value::Double(v) => exact_u64(*v),
            _ => None,
        };

        if let Some(value) = converted {
            self.value = value;
            return Ok(());
        }

        self.value = 0;
        Err(Error::Scan(ScanError {
            actual: source.type_name(),
            value: source.to_string(),
            target: "u64",
        }))
    }

    /// Produce the driver representation.
    ///
    /// NULL becomes the null marker. Payloads above `i64::MAX` cannot be
    /// bound as a signed BIGINT and are rejected with an out-of-bounds
    /// error instead of being truncated.
    pub fn value(&self) -> Result<Value, Error> {
        if !self.valid {
            return Ok(Value::Null);
        }
        Value::try_from(self.value)
    }

    /// The payload, or `None` when NULL.
    pub const fn get(&self) -> Option<u64> {
        if self.valid { Some(self.value) } else { None }
    }
}

/// Unsigned decimal digits only; no sign, no whitespace.
fn parse_decimal(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Accepts a float only when it holds a non-negative integer that survives
/// the round trip through `u64` unchanged.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn exact_u64(v: f64) -> Option<u64> {
    // 2^64, the first float past the end of the u64 range
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if !v.is_finite() || v < 0.0 || v >= LIMIT || v.fract() != 0.0 {
        return None;
    }
    let converted = v as u64;
    if converted as f64 == v {
        Some(converted)
    } else {
        None
    }
}

impl From<Option<u64>> for NullUint64 {
    fn from(v: Option<u64>) -> Self {
        v.map_or_else(Self::null, Self::new)
    }
}

impl From<NullUint64> for Option<u64> {
    fn from(v: NullUint64) -> Self {
        v.get()
    }
}
