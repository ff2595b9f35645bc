//! In-memory [`Database`] implementation.
//!
//! Rows live in ordered tables keyed by their IDs, so iteration order is the
//! insertion order. Transactions stage their writes aside and hold exclusive
//! per-row locks until committed or dropped.

pub mod client;
mod impls;
mod storage;
mod table;

use derive_more::{Deref, Display, Error as StdError};

#[cfg(doc)]
use crate::infra::Database;

use self::storage::{LockKey, Locks, Storage};

pub use self::{
    client::{Client, NonTx, Tx},
    table::{Sequenced, Table, Tables},
};

/// In-memory [`Database`] client.
#[derive(Clone, Debug, Default, Deref)]
pub struct Memory<T = NonTx>(T);

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// In-memory database [`Error`].
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// ID sequence of the named entity ran out of values.
    #[display("`{_0}` ID sequence is exhausted")]
    IdOverflow(#[error(not(source))] &'static str),
}
