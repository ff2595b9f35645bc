//! [`Query`] collection related to multiple [`TourPackage`]s.

use common::operations::By;

use crate::domain::TourPackage;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`TourPackage`]s in the order they were created.
pub type All = DatabaseQuery<By<Vec<TourPackage>, ()>>;
