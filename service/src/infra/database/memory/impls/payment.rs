//! [`Payment`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking, payment, Payment},
    infra::{
        database::{self, memory::Client, Memory},
        Database,
    },
};

impl<C: Client> Database<Select<By<Option<Payment>, payment::Id>>>
    for Memory<C>
{
    type Ok = Option<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Payment>, payment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select(by.into_inner()).await)
    }
}

impl<C: Client> Database<Select<By<Vec<Payment>, booking::Id>>> for Memory<C> {
    type Ok = Vec<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Payment>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let booking_id = by.into_inner();
        Ok(self
            .select_all::<Payment>()
            .await
            .into_iter()
            .filter(|p| p.booking_id == booking_id)
            .collect())
    }
}
