//! [`Command`] for creating a new [`TourPackage`].

use common::{
    operations::{Allocate, Insert},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{package, TourPackage},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`TourPackage`].
#[derive(Clone, Debug)]
pub struct CreateTourPackage {
    /// Name of a new [`TourPackage`].
    pub name: package::Name,

    /// Description of a new [`TourPackage`].
    pub description: package::Description,

    /// Date when a new [`TourPackage`] starts.
    pub starts_on: package::StartDate,

    /// Date when a new [`TourPackage`] ends.
    pub ends_on: package::EndDate,

    /// Price of a single seat.
    pub price: Money,

    /// Number of seats in a new [`TourPackage`].
    pub total_seats: package::NumSeats,
}

impl<Db> Command<CreateTourPackage> for Service<Db>
where
    Db: Database<
            Allocate<package::Id>,
            Ok = package::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<TourPackage>, Err = Traced<database::Error>>,
{
    type Ok = TourPackage;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateTourPackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateTourPackage {
            name,
            description,
            starts_on,
            ends_on,
            price,
            total_seats,
        } = cmd;

        if ends_on < starts_on.coerce() {
            return Err(tracerr::new!(E::InvalidDates {
                starts_on,
                ends_on
            }));
        }
        if !price.is_positive() {
            return Err(tracerr::new!(E::InvalidPrice(price)));
        }
        if total_seats == 0 {
            return Err(tracerr::new!(E::InvalidSeatCount));
        }

        let id = self
            .database()
            .execute(Allocate::new())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let package = TourPackage::new(
            id,
            name,
            description,
            starts_on,
            ends_on,
            price,
            total_seats,
        );

        self.database()
            .execute(Insert(package.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(package)
    }
}

/// Error of [`CreateTourPackage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`TourPackage`] ends before it starts.
    #[display("`TourPackage` cannot end on {ends_on} before starting on \
               {starts_on}")]
    InvalidDates {
        /// Requested start date.
        starts_on: package::StartDate,

        /// Requested end date.
        ends_on: package::EndDate,
    },

    /// Price of a seat is not positive.
    #[display("`TourPackage` seat price must be positive, got {_0}")]
    InvalidPrice(#[error(not(source))] Money),

    /// [`TourPackage`] has no seats.
    #[display("`TourPackage` must have at least one seat")]
    InvalidSeatCount,
}

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{
        domain::package, infra::Memory, query, Command as _, Config, Service,
    };

    use super::{CreateTourPackage, ExecutionError};

    fn cmd(
        start: &str,
        end: &str,
        price: &str,
        seats: u16,
    ) -> CreateTourPackage {
        CreateTourPackage {
            name: package::Name::new("Alps").unwrap(),
            description: package::Description::new("Hiking week").unwrap(),
            starts_on: Date::parse(start).unwrap().coerce(),
            ends_on: Date::parse(end).unwrap().coerce(),
            price: price.parse().unwrap(),
            total_seats: seats,
        }
    }

    #[tokio::test]
    async fn creates_fully_available_package() {
        let svc = Service::new(Config::default(), Memory::new());

        let p = svc
            .execute(cmd("2024-07-01", "2024-07-08", "100", 10))
            .await
            .unwrap();
        assert_eq!(p.id, package::Id::from(1));
        assert_eq!(p.available_seats(), 10);

        let stored = svc
            .execute(query::tour_package::ById::by(p.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.total_seats(), 10);

        let next = svc
            .execute(cmd("2024-07-01", "2024-07-01", "1", 1))
            .await
            .unwrap();
        assert_eq!(next.id, package::Id::from(2));
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let svc = Service::new(Config::default(), Memory::new());

        let err = svc
            .execute(cmd("2024-07-08", "2024-07-01", "100", 10))
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::InvalidDates { .. }));

        let err = svc
            .execute(cmd("2024-07-01", "2024-07-08", "0", 10))
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::InvalidPrice(_)));

        let err = svc
            .execute(cmd("2024-07-01", "2024-07-08", "100", 0))
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::InvalidSeatCount));

        let all = svc
            .execute(query::tour_packages::All::by(()))
            .await
            .unwrap();
        assert!(all.is_empty());
    }
}
