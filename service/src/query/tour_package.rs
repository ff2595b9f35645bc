//! [`Query`] collection related to a single [`TourPackage`].

use common::operations::By;

use crate::domain::{package, TourPackage};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`TourPackage`] by its [`package::Id`].
pub type ById = DatabaseQuery<By<Option<TourPackage>, package::Id>>;
