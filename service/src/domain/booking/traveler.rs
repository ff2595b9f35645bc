//! [`Traveler`] definitions.

use common::define_text;

#[cfg(doc)]
use super::Booking;

/// Person traveling on a seat of a [`Booking`].
#[derive(Clone, Debug)]
pub struct Traveler {
    /// [`Name`] of this [`Traveler`].
    pub name: Name,

    /// [`Age`] of this [`Traveler`] in full years.
    pub age: Age,

    /// Passport number of this [`Traveler`], if provided.
    pub passport: Option<Passport>,
}

define_text! {
    #[doc = "Name of a [`Traveler`]."]
    struct Name(max_len = 512);
}

define_text! {
    #[doc = "Passport number of a [`Traveler`]."]
    struct Passport(max_len = 64);
}

/// Age of a [`Traveler`] in full years.
pub type Age = u8;
