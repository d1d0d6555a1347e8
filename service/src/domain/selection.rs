//! Day-selection definitions.

use std::{collections::BTreeSet, fmt};

use common::{Date, Days, Money};

/// Number of nights of a stay.
///
/// Always the count of selected days, not the length of the selection's
/// envelope (see [`StayRange`]).
pub type Nights = u32;

/// Ordered set of unique calendar days the user has toggled on.
///
/// A day present in the set means "the user wants to occupy that calendar
/// night". The set is always strictly ascending and duplicate-free by
/// construction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection(BTreeSet<Date>);

impl Selection {
    /// Creates a new empty [`Selection`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the provided `day`: removes it if present, inserts it
    /// otherwise.
    ///
    /// Returns whether the `day` is selected after the toggle. Toggling is
    /// total and self-inverse; whether a toggle is allowed at all (booked or
    /// past days) is decided by the caller before committing it.
    pub fn toggle(&mut self, day: Date) -> bool {
        if self.0.remove(&day) {
            false
        } else {
            _ = self.0.insert(day);
            true
        }
    }

    /// Removes every selected day.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Indicates whether the provided `day` is selected.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.0.contains(&day)
    }

    /// Returns the number of selected days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether no days are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the selected days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    /// Merges the selected days into maximal [`Block`]s of
    /// calendar-adjacent days.
    ///
    /// Two selected days belong to the same [`Block`] iff they're
    /// consecutive calendar days; non-adjacent picks produce separate
    /// single-day blocks.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::<Block>::new();
        for day in self.days() {
            if let Some(block) = blocks.last_mut() {
                if block.last.next() == day {
                    block.last = day;
                    continue;
                }
            }
            blocks.push(Block {
                first: day,
                last: day,
            });
        }
        blocks
    }

    /// Indicates whether the selected days form a single contiguous run.
    ///
    /// An empty [`Selection`] is trivially contiguous.
    #[must_use]
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn is_contiguous(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => {
                let span = *last - *first + 1;
                span == i64::try_from(self.len()).expect("fits in `i64`")
            }
            (Some(_), None) | (None, Some(_)) | (None, None) => true,
        }
    }

    /// Derives the [`StayRange`] envelope of this [`Selection`], or [`None`]
    /// if nothing is selected.
    #[must_use]
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn stay(&self) -> Option<StayRange> {
        let check_in = *self.0.first()?;
        let last = *self.0.last()?;
        Some(StayRange {
            check_in,
            check_out_exclusive: last.next(),
            nights: Nights::try_from(self.len()).expect("fits in `Nights`"),
        })
    }

    /// Derives the [`Quote`] for this [`Selection`] at the provided nightly
    /// `rate`, or [`None`] if nothing is selected.
    #[must_use]
    pub fn quote(&self, rate: Money) -> Option<Quote> {
        self.stay().map(|stay| Quote::new(stay.nights, rate))
    }
}

/// Maximal run of calendar-adjacent selected days, both ends inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block {
    /// First day of this [`Block`].
    pub first: Date,

    /// Last day of this [`Block`], equal to [`first`] for a single-day
    /// block.
    ///
    /// [`first`]: Block::first
    pub last: Date,
}

impl Block {
    /// Returns the number of days in this [`Block`].
    #[must_use]
    pub fn days(&self) -> Days {
        self.last - self.first + 1
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { first, last } = self;
        if first == last {
            write!(f, "{first}")
        } else {
            write!(f, "{first} – {last}")
        }
    }
}

/// Envelope of a [`Selection`]: the check-in/check-out boundary pair along
/// with the night count.
///
/// `check_out_exclusive` is the day after the latest selected day, while
/// `nights` is the count of selected days. For a fragmented [`Selection`]
/// the envelope spans unselected days the night count doesn't include; that
/// discrepancy is reproduced from the observed product behavior on purpose
/// and is only flagged, never corrected (see
/// [`Selection::is_contiguous()`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StayRange {
    /// First night of the stay.
    pub check_in: Date,

    /// Checkout day of the stay, not occupied itself.
    pub check_out_exclusive: Date,

    /// Count of selected days.
    pub nights: Nights,
}

/// Price quote for a [`Selection`].
///
/// Never stored; recomputed on every [`Selection`] change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights being paid for.
    pub nights: Nights,

    /// Price of a single night.
    pub rate: Money,

    /// Total amount due: `rate × nights`.
    pub total: Money,
}

impl Quote {
    /// Creates a new [`Quote`] for the provided number of `nights` at the
    /// provided nightly `rate`.
    #[must_use]
    pub fn new(nights: Nights, rate: Money) -> Self {
        Self {
            nights,
            rate,
            total: rate * nights,
        }
    }
}
