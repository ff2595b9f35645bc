//! [`Query`] collection related to a single [`Cancellation`].

use common::operations::By;

use crate::domain::{booking, Cancellation};
#[cfg(doc)]
use crate::{domain::Booking, Query};

use super::DatabaseQuery;

/// Queries the [`Cancellation`] of a [`Booking`], if it was cancelled.
pub type ByBooking = DatabaseQuery<By<Option<Cancellation>, booking::Id>>;
