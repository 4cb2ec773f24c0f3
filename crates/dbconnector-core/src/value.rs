//! Dynamic driver values.

use crate::error::{BoundsError, Error};
use std::fmt;

/// A column value as produced by the MySQL driver.
///
/// Scanners receive one of these per column and hand one back when bound
/// as a statement parameter. `Value::Null` is the null marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    TinyInt(i8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    /// BIGINT UNSIGNED, for drivers that carry the full unsigned range
    UnsignedBigInt(u64),
    Float(f32),
    Double(f64),
    Text(String),
    /// Raw column bytes; numeric columns arrive this way over the text protocol
    Bytes(Vec<u8>),
    /// DATETIME/TIMESTAMP, microseconds since the epoch (UTC)
    Timestamp(i64),
}

impl Value {
    /// Check if this value is the null marker.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The MySQL type name, as reported in scan errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::TinyInt(_) => "TINYINT",
            Value::SmallInt(_) => "SMALLINT",
            Value::Int(_) => "INT",
            Value::BigInt(_) => "BIGINT",
            Value::UnsignedBigInt(_) => "BIGINT UNSIGNED",
            Value::Float(_) => "FLOAT",
            Value::Double(_) => "DOUBLE",
            Value::Text(_) => "VARCHAR",
            Value::Bytes(_) => "BLOB",
            Value::Timestamp(_) => "TIMESTAMP",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::TinyInt(v) => write!(f, "{}", v),
            Value::SmallInt(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::BigInt(v) => write!(f, "{}", v),
            Value::UnsignedBigInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Timestamp(v) => write!(f, "timestamp:{}", v),
        }
    }
}

/// Bind a `u64` as a signed BIGINT.
///
/// The driver carries integer parameters as `i64`, so the upper half of
/// the unsigned range is rejected with [`Error::OutOfBounds`].
impl TryFrom<u64> for Value {
    type Error = Error;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Value::BigInt).map_err(|_| {
            Error::OutOfBounds(BoundsError {
                value: v,
                max: i64::MAX as u64,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_u64_bounds() {
        assert_eq!(Value::try_from(0u64).unwrap(), Value::BigInt(0));
        assert_eq!(
            Value::try_from(i64::MAX as u64).unwrap(),
            Value::BigInt(i64::MAX)
        );

        let err = Value::try_from((i64::MAX as u64) + 1).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(
            err.to_string(),
            "Out of bounds: value 9223372036854775808 exceeds the driver maximum of 9223372036854775807"
        );
        assert!(Value::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_display_in_scan_errors() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bytes(b"invalid".to_vec()).to_string(), "invalid");
        assert_eq!(Value::Double(42.1).to_string(), "42.1");
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn test_type_name() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::UnsignedBigInt(1).type_name(), "BIGINT UNSIGNED");
        assert_eq!(Value::Text(String::new()).type_name(), "VARCHAR");
        assert_eq!(Value::Timestamp(0).type_name(), "TIMESTAMP");
    }
}
