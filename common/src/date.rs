//! Calendar date utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData, ops, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Format of a [`Date`] in its textual representation (`YYYY-MM-DD`).
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without a time of day.
///
/// The `Of` type parameter describes what this date is of (e.g. a start of a
/// tour or a creation of a booking), so dates of different meaning cannot be
/// mixed up accidentally.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Returns the current [`Date`] in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self::from(time::OffsetDateTime::now_utc().date())
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self::from)
    }

    /// Parses a [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input.trim(), FORMAT)
            .map(Self::from)
            .map_err(ParseError)
    }

    /// Returns the number of whole days from this [`Date`] until the `other`
    /// one.
    ///
    /// The result is negative if the `other` [`Date`] is in the past relative
    /// to this one.
    #[must_use]
    pub fn days_until<O: ?Sized>(&self, other: DateOf<O>) -> i64 {
        (other.inner - self.inner).whole_days()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid date, expected `YYYY-MM-DD`: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.inner.format(FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> ops::Add<time::Duration> for DateOf<Of> {
    type Output = Self;

    fn add(self, rhs: time::Duration) -> Self::Output {
        Self::from(self.inner + rhs)
    }
}

impl<Of: ?Sized> ops::Sub<time::Duration> for DateOf<Of> {
    type Output = Self;

    fn sub(self, rhs: time::Duration) -> Self::Output {
        Self::from(self.inner - rhs)
    }
}

#[cfg(test)]
mod spec {
    use time::Duration;

    use super::Date;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            Date::parse("2024-06-15").unwrap(),
            Date::from_calendar_date(2024, 6, 15).unwrap(),
        );
        assert_eq!(
            Date::parse(" 2024-06-15 ").unwrap(),
            Date::from_calendar_date(2024, 6, 15).unwrap(),
        );

        assert!(Date::parse("2024-13-01").is_err());
        assert!(Date::parse("2024-02-30").is_err());
        assert!(Date::parse("15.06.2024").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn displays_as_iso() {
        assert_eq!(date("2024-06-05").to_string(), "2024-06-05");
    }

    #[test]
    fn counts_days_until() {
        let start = date("2024-06-15");

        assert_eq!(date("2024-06-05").days_until(start), 10);
        assert_eq!(date("2024-06-15").days_until(start), 0);
        assert_eq!(date("2024-06-20").days_until(start), -5);
        assert_eq!(date("2023-06-15").days_until(start), 366);
    }

    #[test]
    fn shifts_by_duration() {
        assert_eq!(date("2024-02-28") + Duration::days(1), date("2024-02-29"));
        assert_eq!(date("2024-03-01") - Duration::days(1), date("2024-02-29"));
    }

    #[test]
    fn orders_chronologically() {
        assert!(date("2024-06-14") < date("2024-06-15"));
        assert!(date("2025-01-01") > date("2024-12-31"));
    }
}
