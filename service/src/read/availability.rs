//! Availability snapshot read model.

use common::{define_kind, Date};

use crate::domain::booking::BookedRange;
#[cfg(doc)]
use crate::domain::Dialog;

/// Immutable snapshot of the [`BookedRange`]s of one property, taken when a
/// [`Dialog`] opens.
///
/// Only the fetch completing a [`Dialog`] opening ever produces an
/// [`Availability`]; toggles and submissions only read it. Reopening a
/// [`Dialog`] always takes a fresh snapshot.
#[derive(Clone, Debug, Default)]
pub struct Availability {
    /// [`BookedRange`]s known to be reserved.
    booked: Vec<BookedRange>,

    /// Indicator whether fetching the [`BookedRange`]s failed and this
    /// snapshot fell open to an empty list.
    degraded: bool,
}

impl Availability {
    /// Creates a new [`Availability`] from the fetched [`BookedRange`]s.
    #[must_use]
    pub fn new(booked: Vec<BookedRange>) -> Self {
        Self {
            booked,
            degraded: false,
        }
    }

    /// Creates a degraded [`Availability`] knowing no [`BookedRange`]s.
    ///
    /// Used when the fetch failed under [`FetchPolicy::FailOpen`]: nothing
    /// is considered booked, and [`is_degraded()`] reports the condition so
    /// the caller can surface a non-blocking warning.
    ///
    /// [`is_degraded()`]: Availability::is_degraded
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            booked: Vec::new(),
            degraded: true,
        }
    }

    /// Indicates whether the provided `day` falls within any known
    /// [`BookedRange`].
    #[must_use]
    pub fn is_booked(&self, day: Date) -> bool {
        self.booked.iter().any(|range| range.contains(day))
    }

    /// Indicates whether the provided half-open candidate interval
    /// intersects any known [`BookedRange`].
    #[must_use]
    pub fn conflicts(
        &self,
        check_in: Date,
        check_out_exclusive: Date,
    ) -> bool {
        self.booked
            .iter()
            .any(|range| range.overlaps(check_in, check_out_exclusive))
    }

    /// Indicates whether this snapshot fell open to an empty list because
    /// its fetch failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Returns the known [`BookedRange`]s.
    #[must_use]
    pub fn booked(&self) -> &[BookedRange] {
        &self.booked
    }
}

define_kind! {
    #[doc = "Policy applied when fetching [`BookedRange`]s fails."]
    enum FetchPolicy {
        #[doc = "Proceed with a degraded empty snapshot and a warning, \
                 leaving the final overlap check to the remote side."]
        FailOpen = 1,

        #[doc = "Propagate the fetch error and refuse to open the dialog."]
        FailClosed = 2,
    }
}
