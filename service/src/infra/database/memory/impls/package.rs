//! [`TourPackage`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{package, TourPackage},
    infra::{
        database::{self, memory::Client, Memory},
        Database,
    },
};

impl<C: Client> Database<Select<By<Option<TourPackage>, package::Id>>>
    for Memory<C>
{
    type Ok = Option<TourPackage>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<TourPackage>, package::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select(by.into_inner()).await)
    }
}

impl<C: Client> Database<Select<By<Vec<TourPackage>, ()>>> for Memory<C> {
    type Ok = Vec<TourPackage>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<TourPackage>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select_all().await)
    }
}
