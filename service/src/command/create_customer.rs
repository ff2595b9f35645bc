//! [`Command`] for creating a new [`Customer`].

use common::operations::{Allocate, Insert};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{customer, Customer},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Customer`].
#[derive(Clone, Debug)]
pub struct CreateCustomer {
    /// Name of a new [`Customer`].
    pub name: customer::Name,

    /// Email of a new [`Customer`].
    pub email: customer::Email,

    /// Phone of a new [`Customer`].
    pub phone: customer::Phone,
}

impl<Db> Command<CreateCustomer> for Service<Db>
where
    Db: Database<
            Allocate<customer::Id>,
            Ok = customer::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<Customer>, Err = Traced<database::Error>>,
{
    type Ok = Customer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateCustomer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateCustomer { name, email, phone } = cmd;

        let customer = Customer {
            id: self
                .database()
                .execute(Allocate::new())
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            name,
            email,
            phone,
        };

        self.database()
            .execute(Insert(customer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(customer)
    }
}

/// Error of [`CreateCustomer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
