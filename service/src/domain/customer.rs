//! [`Customer`] definitions.

use std::sync::LazyLock;

use common::define_text;
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;

/// Customer of the travel agency.
#[derive(Clone, Debug)]
pub struct Customer {
    /// ID of this [`Customer`].
    pub id: Id,

    /// [`Name`] of this [`Customer`].
    pub name: Name,

    /// [`Email`] of this [`Customer`].
    pub email: Email,

    /// [`Phone`] of this [`Customer`].
    pub phone: Phone,
}

/// ID of a [`Customer`].
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
    #[doc = "Name of a [`Customer`]."]
    struct Name(max_len = 512);
}

/// Email address of a [`Customer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 254 && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`Customer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[+]?\d[\d\s-]{5,18}\d$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Phone};

    #[test]
    fn email() {
        assert!(Email::new("ann@example.com").is_some());
        assert!(Email::new("a.b+c@mail.example.org").is_some());

        assert!(Email::new("").is_none());
        assert!(Email::new("ann").is_none());
        assert!(Email::new("ann@example").is_none());
        assert!(Email::new("ann @example.com").is_none());
    }

    #[test]
    fn phone() {
        assert!(Phone::new("+1 555-123-4567").is_some());
        assert!(Phone::new("5551234567").is_some());
        assert!(Phone::new("+91 98765 43210").is_some());

        assert!(Phone::new("").is_none());
        assert!(Phone::new("12345").is_none());
        assert!(Phone::new("call me").is_none());
        assert!(Phone::new("555-123-4567 ").is_none());
    }

    #[test]
    fn parses_from_str() {
        let email: Email = "ann@example.com".parse().unwrap();
        assert_eq!(email.to_string(), "ann@example.com");
        assert!("ann".parse::<Email>().is_err());

        assert!("+1 555-123-4567".parse::<Phone>().is_ok());
        assert!("call me".parse::<Phone>().is_err());
    }
}
