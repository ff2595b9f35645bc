//! [`Booking`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking, Booking},
    infra::{
        database::{self, memory::Client, Memory},
        Database,
    },
};

impl<C: Client> Database<Select<By<Option<Booking>, booking::Id>>>
    for Memory<C>
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select(by.into_inner()).await)
    }
}
