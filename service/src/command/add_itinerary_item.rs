//! [`Command`] for adding an [`ItineraryItem`] to a [`TourPackage`].

use common::operations::{
    Allocate, By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{package, package::itinerary, ItineraryItem, TourPackage},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding an [`ItineraryItem`] to a [`TourPackage`].
#[derive(Clone, Debug)]
pub struct AddItineraryItem {
    /// ID of the [`TourPackage`] to add an [`ItineraryItem`] to.
    pub package_id: package::Id,

    /// Day of the tour a new [`ItineraryItem`] takes place on.
    pub day: itinerary::Day,

    /// Title of a new [`ItineraryItem`].
    pub title: itinerary::Title,

    /// Details of a new [`ItineraryItem`].
    pub details: itinerary::Details,
}

impl<Db> Command<AddItineraryItem> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<TourPackage>, package::Id>>,
            Ok = Option<TourPackage>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<TourPackage, package::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<TourPackage>, package::Id>>,
            Ok = Option<TourPackage>,
            Err = Traced<database::Error>,
        > + Database<
            Allocate<itinerary::Id>,
            Ok = itinerary::Id,
            Err = Traced<database::Error>,
        > + Database<Update<TourPackage>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ItineraryItem;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddItineraryItem,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddItineraryItem {
            package_id,
            day,
            title,
            details,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<TourPackage>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotFound(package_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid losing concurrent changes of the same `TourPackage`.
        tx.execute(Lock(By::<TourPackage, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut package = tx
            .execute(Select(By::<Option<TourPackage>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotFound(package_id))
            .map_err(tracerr::wrap!())?;

        let item = ItineraryItem {
            id: tx
                .execute(Allocate::new())
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            day,
            title,
            details,
            package_id,
        };
        package.push_itinerary_item(item.clone());

        tx.execute(Update(package))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(item)
    }
}

/// Error of [`AddItineraryItem`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`TourPackage`] with the provided ID does not exist.
    #[display("`TourPackage(id: {_0})` does not exist")]
    PackageNotFound(#[error(not(source))] package::Id),
}
