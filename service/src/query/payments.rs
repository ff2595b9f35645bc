//! [`Query`] collection related to multiple [`Payment`]s.

use common::operations::By;

use crate::domain::{booking, Payment};
#[cfg(doc)]
use crate::{domain::Booking, Query};

use super::DatabaseQuery;

/// Queries all the [`Payment`]s of a [`Booking`] in the order they were
/// recorded.
pub type ByBooking = DatabaseQuery<By<Vec<Payment>, booking::Id>>;
