//! Booking definitions.

use std::str::FromStr;

use common::{Date, Money};
use derive_more::{AsRef, Display, From, Into};

use crate::domain::{guest::Guest, property, selection::Nights};

/// Half-open interval `[start, end_exclusive)` of nights already reserved
/// for a property.
///
/// The `start` night is occupied; the `end_exclusive` night is not (it is
/// the checkout day), so back-to-back stays sharing a checkout/check-in day
/// never overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookedRange {
    /// First occupied night of this [`BookedRange`].
    start: Date,

    /// Checkout day of this [`BookedRange`], not occupied itself.
    end_exclusive: Date,
}

impl BookedRange {
    /// Creates a new [`BookedRange`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that `start` is strictly before
    /// `end_exclusive`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(start: Date, end_exclusive: Date) -> Self {
        Self {
            start,
            end_exclusive,
        }
    }

    /// Creates a new [`BookedRange`] if `start` is strictly before
    /// `end_exclusive`.
    #[must_use]
    pub fn new(start: Date, end_exclusive: Date) -> Option<Self> {
        if start < end_exclusive {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariant checked already")]
            Some(unsafe { Self::new_unchecked(start, end_exclusive) })
        } else {
            None
        }
    }

    /// Returns the first occupied night of this [`BookedRange`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the checkout day of this [`BookedRange`].
    #[must_use]
    pub fn end_exclusive(&self) -> Date {
        self.end_exclusive
    }

    /// Indicates whether the provided `day` is an occupied night of this
    /// [`BookedRange`].
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day < self.end_exclusive
    }

    /// Indicates whether the provided half-open candidate interval
    /// intersects this [`BookedRange`].
    ///
    /// Partial overlap, full containment either way and exact coincidence
    /// all reduce to this single inequality pair; abutting intervals don't
    /// intersect.
    #[must_use]
    pub fn overlaps(&self, start: Date, end_exclusive: Date) -> bool {
        start < self.end_exclusive && end_exclusive > self.start
    }
}

/// Booking submission handed to the remote collaborator.
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of the property being booked.
    pub property_id: property::Id,

    /// First night of the stay.
    pub check_in: Date,

    /// Checkout day of the stay, not occupied itself.
    pub check_out_exclusive: Date,

    /// Number of nights actually selected.
    pub nights: Nights,

    /// Total amount due for the stay.
    pub total: Money,

    /// [`Guest`] the booking is made for.
    pub guest: Guest,
}

/// Confirmation returned by the remote collaborator for a submitted
/// [`Booking`].
#[derive(Clone, Debug)]
pub struct Receipt {
    /// [`Reference`] of the created booking.
    pub reference: Reference,

    /// URL to redirect the guest to for paying, if a payment session was
    /// initiated.
    pub authorization_url: Option<AuthorizationUrl>,
}

/// Reference of a [`Booking`] assigned by the remote collaborator.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Reference(String);

impl Reference {
    /// Creates a new [`Reference`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `reference` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Creates a new [`Reference`] if the given `reference` is valid.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Option<Self> {
        let reference = reference.into();
        Self::check(&reference).then_some(Self(reference))
    }

    /// Checks whether the given `reference` is a valid [`Reference`].
    fn check(reference: impl AsRef<str>) -> bool {
        let reference = reference.as_ref();
        reference.trim() == reference
            && !reference.is_empty()
            && reference.len() <= 512
    }
}

impl FromStr for Reference {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Reference`")
    }
}

/// URL of a payment authorization page for a [`Booking`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct AuthorizationUrl(String);

#[cfg(test)]
mod spec {
    use common::Date;

    use super::BookedRange;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> BookedRange {
        BookedRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn requires_nonempty_interval() {
        assert!(BookedRange::new(date("2025-01-10"), date("2025-01-12"))
            .is_some());
        assert!(BookedRange::new(date("2025-01-10"), date("2025-01-10"))
            .is_none());
        assert!(BookedRange::new(date("2025-01-12"), date("2025-01-10"))
            .is_none());
    }

    #[test]
    fn contains_is_half_open() {
        let booked = range("2025-01-10", "2025-01-12");

        assert!(!booked.contains(date("2025-01-09")));
        assert!(booked.contains(date("2025-01-10")));
        assert!(booked.contains(date("2025-01-11")));
        assert!(!booked.contains(date("2025-01-12")));
    }

    #[test]
    fn overlaps_is_half_open() {
        let booked = range("2025-01-10", "2025-01-12");

        // Abuts on either side, doesn't overlap.
        assert!(!booked.overlaps(date("2025-01-09"), date("2025-01-10")));
        assert!(!booked.overlaps(date("2025-01-12"), date("2025-01-14")));

        // One shared night overlaps.
        assert!(booked.overlaps(date("2025-01-11"), date("2025-01-13")));
        assert!(booked.overlaps(date("2025-01-09"), date("2025-01-11")));

        // Containment either way.
        assert!(booked.overlaps(date("2025-01-09"), date("2025-01-14")));
        assert!(booked.overlaps(date("2025-01-10"), date("2025-01-11")));

        // Exact coincidence.
        assert!(booked.overlaps(date("2025-01-10"), date("2025-01-12")));
    }
}
