//! [`Customer`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{customer, Customer},
    infra::{
        database::{self, memory::Client, Memory},
        Database,
    },
};

impl<C: Client> Database<Select<By<Option<Customer>, customer::Id>>>
    for Memory<C>
{
    type Ok = Option<Customer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Customer>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select(by.into_inner()).await)
    }
}
