//! [`Storage`] definitions.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

use super::Tables;

/// Committed state of a [`Memory`] database.
///
/// [`Memory`]: super::Memory
#[derive(Debug, Default)]
pub(crate) struct Storage {
    /// Committed rows.
    pub(crate) tables: Tables,

    /// Last allocated values of ID sequences.
    sequences: HashMap<&'static str, u32>,
}

impl Storage {
    /// Allocates the next value of the named ID sequence, starting from `1`.
    ///
    /// [`None`] is returned once the sequence is exhausted.
    pub(crate) fn next_id(&mut self, sequence: &'static str) -> Option<u32> {
        let last = self.sequences.entry(sequence).or_default();
        *last = last.checked_add(1)?;
        Some(*last)
    }
}

/// Key of a row lock: table name and row ID.
pub(crate) type LockKey = (&'static str, u32);

/// Table of exclusive row locks.
#[derive(Debug, Default)]
pub(crate) struct Locks(Mutex<HashMap<LockKey, Arc<Mutex<()>>>>);

impl Locks {
    /// Waits until the row identified by the provided [`LockKey`] is free and
    /// locks it.
    ///
    /// The lock is held until the returned guard is dropped.
    pub(crate) async fn acquire(&self, key: LockKey) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(self.0.lock().await.entry(key).or_default());
        lock.lock_owned().await
    }
}
