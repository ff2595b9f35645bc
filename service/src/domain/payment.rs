//! [`Payment`] definitions.

use common::{define_text, unit, DateOf, Money};
use derive_more::{Display, From, FromStr, Into};

use crate::domain::booking;
#[cfg(doc)]
use crate::domain::Booking;

/// Money received towards a [`Booking`].
#[derive(Clone, Debug)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// ID of the [`Booking`] this [`Payment`] is made for.
    pub booking_id: booking::Id,

    /// Received amount. Always positive.
    pub amount: Money,

    /// [`Date`] when this [`Payment`] was received.
    ///
    /// [`Date`]: common::Date
    pub paid_on: CreationDate,

    /// [`Method`] this [`Payment`] was made with.
    pub method: Method,
}

/// ID of a [`Payment`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

define_text! {
    #[doc = "Free-form label of a [`Payment`] method (e.g. `card`, `cash`)."]
    struct Method(max_len = 64);
}

/// [`Date`] when a [`Payment`] was received.
///
/// [`Date`]: common::Date
pub type CreationDate = DateOf<(Payment, unit::Creation)>;
