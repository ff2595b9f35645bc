//! [`Database`] implementations.

mod booking;
mod cancellation;
mod customer;
mod package;
mod payment;

use common::operations::{
    Allocate, By, Commit, Insert, Lock, Transact, Update,
};
use tracerr::Traced;

use crate::infra::{database, memory, Database};

use super::{Client, Memory, NonTx, Sequenced, Table, Tx};

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Memory(Tx::from_non_tx(self.0.clone())))
    }
}

impl Database<Transact> for Memory<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.commit().await;
        Ok(())
    }
}

impl<T: Table> Database<Lock<By<T, T::Id>>> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<T, T::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.lock((T::NAME, by.into_inner().into())).await;
        Ok(())
    }
}

impl<C, T> Database<Insert<T>> for Memory<C>
where
    C: Client,
    T: Table,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(row): Insert<T>,
    ) -> Result<Self::Ok, Self::Err> {
        self.store(row).await;
        Ok(())
    }
}

impl<C, T> Database<Update<T>> for Memory<C>
where
    C: Client,
    T: Table,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(row): Update<T>,
    ) -> Result<Self::Ok, Self::Err> {
        self.store(row).await;
        Ok(())
    }
}

impl<C, Id> Database<Allocate<Id>> for Memory<C>
where
    C: Client,
    Id: Sequenced,
{
    type Ok = Id;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Allocate<Id>) -> Result<Self::Ok, Self::Err> {
        self.next_id(Id::SEQUENCE)
            .await
            .map(Id::from)
            .ok_or(memory::Error::IdOverflow(Id::SEQUENCE))
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{Allocate, By, Commit, Insert, Select, Transact},
        Handler as _,
    };

    use crate::{
        domain::{customer, Customer},
        infra::Memory,
    };

    fn customer(id: customer::Id, name: &str) -> Customer {
        Customer {
            id,
            name: name.parse().unwrap(),
            email: "ann@example.com".parse().unwrap(),
            phone: "+1 555-123-4567".parse().unwrap(),
        }
    }

    async fn select(db: &Memory, id: customer::Id) -> Option<Customer> {
        db.execute(Select(By::<Option<Customer>, _>::new(id)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn allocates_monotonic_ids() {
        let db = Memory::new();

        let a = db
            .execute(Allocate::<customer::Id>::new())
            .await
            .unwrap();
        let b = db
            .execute(Allocate::<customer::Id>::new())
            .await
            .unwrap();

        assert_eq!(a, customer::Id::from(1));
        assert_eq!(b, customer::Id::from(2));
    }

    #[tokio::test]
    async fn commits_staged_writes() {
        let db = Memory::new();
        let id = customer::Id::from(1);

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(customer(id, "Ann"))).await.unwrap();

        assert!(select(&db, id).await.is_none());
        assert!(tx
            .execute(Select(By::<Option<Customer>, _>::new(id)))
            .await
            .unwrap()
            .is_some());

        tx.execute(Commit).await.unwrap();

        assert_eq!(select(&db, id).await.unwrap().name.as_ref(), "Ann");
    }

    #[tokio::test]
    async fn discards_dropped_transaction() {
        let db = Memory::new();
        let id = customer::Id::from(1);
        db.execute(Insert(customer(id, "Ann"))).await.unwrap();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(customer(id, "Bob"))).await.unwrap();
        drop(tx);

        assert_eq!(select(&db, id).await.unwrap().name.as_ref(), "Ann");
    }
}
