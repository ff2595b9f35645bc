//! [`Cancellation`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking, Cancellation},
    infra::{
        database::{self, memory::Client, Memory},
        Database,
    },
};

impl<C: Client> Database<Select<By<Option<Cancellation>, booking::Id>>>
    for Memory<C>
{
    type Ok = Option<Cancellation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Cancellation>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let booking_id = by.into_inner();
        // A `Booking` can be cancelled only once.
        Ok(self
            .select_all::<Cancellation>()
            .await
            .into_iter()
            .find(|c| c.booking_id == booking_id))
    }
}
