//! [`Tx`] client definitions.

use std::{
    collections::{BTreeMap, HashMap},
    mem,
    sync::Arc,
};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::infra::database::memory::{Client, LockKey, Table, Tables};

use super::NonTx;

/// Transactional in-memory database client.
///
/// Writes are staged until [`Tx::commit()`] and discarded if the last clone
/// of this client is dropped before that. Row locks are held until then too.
#[derive(Clone, Debug)]
pub struct Tx {
    /// [`NonTx`] client this transaction was started from.
    non_tx: NonTx,

    /// Inner state of this transaction.
    inner: Arc<Mutex<Inner>>,
}

/// Inner state of a [`Tx`] client.
#[derive(Debug, Default)]
struct Inner {
    /// Writes not committed yet.
    staged: Tables,

    /// Row locks held by this transaction.
    held: HashMap<LockKey, OwnedMutexGuard<()>>,
}

impl Tx {
    /// Starts a new [`Tx`] from the provided [`NonTx`] client.
    #[must_use]
    pub fn from_non_tx(client: NonTx) -> Self {
        Self {
            non_tx: client,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Locks the row identified by the provided [`LockKey`] until this [`Tx`]
    /// is committed or dropped.
    ///
    /// Locking an already held row is a no-op.
    pub(crate) async fn lock(&self, key: LockKey) {
        if self.inner.lock().await.held.contains_key(&key) {
            return;
        }
        let guard = self.non_tx.lock(key).await;
        _ = self.inner.lock().await.held.insert(key, guard);
    }

    /// Commits all the staged writes of this [`Tx`] at once and releases its
    /// row locks.
    pub async fn commit(&self) {
        let mut inner = self.inner.lock().await;
        let staged = mem::take(&mut inner.staged);
        self.non_tx.storage().lock().await.tables.merge(staged);
        inner.held.clear();
    }
}

impl Client for Tx {
    async fn select<T: Table>(&self, id: T::Id) -> Option<T> {
        {
            let inner = self.inner.lock().await;
            if let Some(row) = T::rows(&inner.staged).get(&id) {
                return Some(row.clone());
            }
        }
        self.non_tx.select(id).await
    }

    async fn select_all<T: Table>(&self) -> Vec<T> {
        let mut rows = self
            .non_tx
            .select_all::<T>()
            .await
            .into_iter()
            .map(|row| (row.id(), row))
            .collect::<BTreeMap<_, _>>();
        rows.extend(
            T::rows(&self.inner.lock().await.staged)
                .iter()
                .map(|(id, row)| (*id, row.clone())),
        );
        rows.into_values().collect()
    }

    async fn store<T: Table>(&self, row: T) {
        _ = T::rows_mut(&mut self.inner.lock().await.staged)
            .insert(row.id(), row);
    }

    async fn next_id(&self, sequence: &'static str) -> Option<u32> {
        self.non_tx.next_id(sequence).await
    }
}
