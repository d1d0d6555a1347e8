//! Calendar date utilities.

use std::{fmt, ops, str::FromStr};

use derive_more::{Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Format of an [ISO 8601] calendar date (`YYYY-MM-DD`).
///
/// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
const ISO8601_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar day without a time-of-day component.
///
/// Identity, equality and ordering are defined by the year/month/day triple
/// only, regardless of how the [`Date`] was constructed. All arithmetic is in
/// whole calendar days.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] representing the current day in [UTC].
    ///
    /// [UTC]: https://wikipedia.org/wiki/Coordinated_Universal_Time
    #[must_use]
    pub fn today() -> Self {
        Self(time::OffsetDateTime::now_utc().date())
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid calendar
    /// date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Creates a new [`Date`] from the provided [ISO 8601] `YYYY-MM-DD`
    /// string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] calendar
    /// date.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, ISO8601_DATE)
            .map(Self)
            .map_err(ParseError::Parse)
    }

    /// Returns the [`Date`] as an [ISO 8601] `YYYY-MM-DD` string.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_iso8601(self) -> String {
        self.0.format(ISO8601_DATE).unwrap_or_else(|e| {
            panic!("cannot format `Date` as ISO 8601: {e}")
        })
    }

    /// Returns the [`Date`] following this one.
    #[must_use]
    pub fn next(self) -> Self {
        self + 1
    }

    /// Returns the [`Date`] preceding this one.
    #[must_use]
    pub fn previous(self) -> Self {
        self - 1
    }
}

/// Whole-day span between two [`Date`]s.
pub type Days = i64;

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into a [`Date`].
    Parse(time::error::Parse),
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl ops::Add<Days> for Date {
    type Output = Self;

    fn add(self, rhs: Days) -> Self::Output {
        Self(
            self.0
                .checked_add(time::Duration::days(rhs))
                .expect("`Date` overflow"),
        )
    }
}

impl ops::Sub<Days> for Date {
    type Output = Self;

    fn sub(self, rhs: Days) -> Self::Output {
        Self(
            self.0
                .checked_sub(time::Duration::days(rhs))
                .expect("`Date` overflow"),
        )
    }
}

impl ops::Sub for Date {
    type Output = Days;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.0 - rhs.0).whole_days()
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::Date;

    pub mod iso8601 {
        //! Module providing serialization and deserialization of a [`Date`]
        //! as an [ISO 8601] `YYYY-MM-DD` string.
        //!
        //! [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::Date;

        /// Serializes the [`Date`] as an [ISO 8601] string.
        ///
        /// # Errors
        ///
        /// Never errors by itself, only if the underlying [`Serializer`]
        /// does.
        ///
        /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
        pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&date.to_iso8601())
        }

        /// Deserializes an [ISO 8601] string into a [`Date`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid [ISO 8601] calendar
        /// date.
        ///
        /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
        where
            D: Deserializer<'de>,
        {
            Date::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(Error::custom)
        }
    }
}
