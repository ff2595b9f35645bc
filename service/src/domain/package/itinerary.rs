//! [`ItineraryItem`] definitions.

use common::define_text;
use derive_more::{Display, From, FromStr, Into};

#[cfg(doc)]
use super::TourPackage;
use super::Id as PackageId;

/// Single entry of a [`TourPackage`] program.
#[derive(Clone, Debug)]
pub struct ItineraryItem {
    /// ID of this [`ItineraryItem`].
    pub id: Id,

    /// Day of the tour this [`ItineraryItem`] takes place on.
    ///
    /// Not required to be unique or ordered within a [`TourPackage`].
    pub day: Day,

    /// [`Title`] of this [`ItineraryItem`].
    pub title: Title,

    /// [`Details`] of this [`ItineraryItem`].
    pub details: Details,

    /// ID of the [`TourPackage`] owning this [`ItineraryItem`].
    pub package_id: PackageId,
}

/// ID of an [`ItineraryItem`].
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

/// Day number of an [`ItineraryItem`].
pub type Day = u16;

define_text! {
    #[doc = "Title of an [`ItineraryItem`]."]
    struct Title(max_len = 256);
}

define_text! {
    #[doc = "Details of an [`ItineraryItem`]."]
    struct Details(max_len = 4096);
}
