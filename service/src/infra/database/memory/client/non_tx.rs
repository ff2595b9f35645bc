//! [`NonTx`] client definitions.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::infra::database::memory::{Client, LockKey, Locks, Storage, Table};

/// Non-transactional in-memory database client.
///
/// Every write is visible immediately.
#[derive(Clone, Debug, Default)]
pub struct NonTx {
    /// Committed state shared by all the clients.
    storage: Arc<Mutex<Storage>>,

    /// Row locks shared by all the clients.
    locks: Arc<Locks>,
}

impl NonTx {
    /// Returns the shared [`Storage`] of this [`NonTx`] client.
    pub(crate) fn storage(&self) -> &Mutex<Storage> {
        &self.storage
    }

    /// Waits for the row identified by the provided [`LockKey`] to be free
    /// and locks it.
    pub(crate) async fn lock(&self, key: LockKey) -> OwnedMutexGuard<()> {
        self.locks.acquire(key).await
    }
}

impl Client for NonTx {
    async fn select<T: Table>(&self, id: T::Id) -> Option<T> {
        T::rows(&self.storage.lock().await.tables).get(&id).cloned()
    }

    async fn select_all<T: Table>(&self) -> Vec<T> {
        T::rows(&self.storage.lock().await.tables)
            .values()
            .cloned()
            .collect()
    }

    async fn store<T: Table>(&self, row: T) {
        _ = T::rows_mut(&mut self.storage.lock().await.tables)
            .insert(row.id(), row);
    }

    async fn next_id(&self, sequence: &'static str) -> Option<u32> {
        self.storage.lock().await.next_id(sequence)
    }
}
