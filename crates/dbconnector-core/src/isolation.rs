//! Transaction isolation levels.

/// Transaction isolation level.
///
/// Defines the degree to which one transaction must be isolated from
/// resource or data modifications made by other concurrent transactions.
/// The level is applied per session through the `transaction_isolation`
/// system variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IsolationLevel {
    /// The driver's default level, which for MySQL handles is read committed.
    #[default]
    Default,

    /// Read uncommitted: Transactions can see uncommitted changes from others.
    /// Dirty reads, non-repeatable reads, and phantoms are possible.
    ReadUncommitted,

    /// Read committed: Transactions only see committed changes from others.
    ReadCommitted,

    /// Write committed.
    WriteCommitted,

    /// Repeatable read: Transactions see a consistent snapshot of the database.
    /// This is the server default for InnoDB.
    RepeatableRead,

    /// Snapshot isolation.
    Snapshot,

    /// Serializable: Transactions appear to execute sequentially.
    Serializable,

    /// Linearizable.
    Linearizable,
}

impl IsolationLevel {
    /// Get the value MySQL expects for the `transaction_isolation`
    /// session variable.
    #[must_use]
    pub const fn as_session_value(&self) -> &'static str {
        match self {
            IsolationLevel::Default | IsolationLevel::ReadCommitted => "READ-COMMITTED",
            IsolationLevel::ReadUncommitted => "READ-UNCOMMITTED",
            IsolationLevel::WriteCommitted => "WRITE-COMMITTED",
            IsolationLevel::RepeatableRead => "REPEATABLE-READ",
            IsolationLevel::Snapshot => "SNAPSHOT",
            IsolationLevel::Serializable => "SERIALIZABLE",
            IsolationLevel::Linearizable => "LINEARIZABLE",
        }
    }

    /// The session value as a single-quoted SQL string literal,
    /// e.g. `'READ-COMMITTED'`.
    #[must_use]
    pub fn as_sql_literal(&self) -> String {
        format!("'{}'", self.as_session_value())
    }
}
