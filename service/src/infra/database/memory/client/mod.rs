//! In-memory database client definitions.

pub mod non_tx;
pub mod tx;

use std::future::Future;

use super::Table;

pub use self::{non_tx::NonTx, tx::Tx};

/// Generic in-memory database client.
pub trait Client {
    /// Returns the row of a [`Table`] with the provided ID, if any.
    fn select<T: Table>(&self, id: T::Id) -> impl Future<Output = Option<T>>;

    /// Returns all the rows of a [`Table`] ordered by their IDs.
    fn select_all<T: Table>(&self) -> impl Future<Output = Vec<T>>;

    /// Stores the provided row, overwriting the one with the same ID.
    fn store<T: Table>(&self, row: T) -> impl Future<Output = ()>;

    /// Allocates the next value of the named ID sequence.
    ///
    /// [`None`] is returned once the sequence is exhausted.
    fn next_id(
        &self,
        sequence: &'static str,
    ) -> impl Future<Output = Option<u32>>;
}
