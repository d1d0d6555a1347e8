//! Booking [`Dialog`] definitions.

pub mod session;

use common::Date;

use crate::{
    domain::{
        property,
        selection::{Block, Quote, Selection, StayRange},
    },
    read::availability::Availability,
};

pub use self::session::Session;

/// One open booking dialog for a property.
///
/// Owns the [`Selection`] exclusively and gates every toggle against the
/// [`Availability`] snapshot taken when the dialog opened and against the
/// `today` boundary captured at the same moment.
#[derive(Clone, Debug)]
pub struct Dialog {
    /// ID of the property this [`Dialog`] is booking.
    property_id: property::Id,

    /// Nightly rate the [`Dialog`] quotes against.
    rate: property::NightlyRate,

    /// Reference "today" captured when this [`Dialog`] was opened.
    today: Date,

    /// [`Availability`] snapshot of the property.
    availability: Availability,

    /// Days toggled on by the user.
    selection: Selection,
}

impl Dialog {
    /// Creates a new [`Dialog`] with an empty [`Selection`].
    #[must_use]
    pub fn new(
        property_id: property::Id,
        rate: property::NightlyRate,
        today: Date,
        availability: Availability,
    ) -> Self {
        Self {
            property_id,
            rate,
            today,
            availability,
            selection: Selection::new(),
        }
    }

    /// Returns the ID of the property this [`Dialog`] is booking.
    #[must_use]
    pub fn property_id(&self) -> property::Id {
        self.property_id
    }

    /// Returns the nightly rate this [`Dialog`] quotes against.
    #[must_use]
    pub fn rate(&self) -> property::NightlyRate {
        self.rate
    }

    /// Returns the reference "today" captured when this [`Dialog`] was
    /// opened.
    #[must_use]
    pub fn today(&self) -> Date {
        self.today
    }

    /// Returns the [`Availability`] snapshot of this [`Dialog`].
    #[must_use]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Returns the current [`Selection`] of this [`Dialog`].
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles the provided `day`, refusing days in the past and days
    /// falling into a booked range.
    ///
    /// Refusals are expected policy outcomes, not errors: the day simply
    /// stays unselected and the UI renders the cell as disabled.
    pub fn toggle(&mut self, day: Date) -> Toggle {
        if day < self.today {
            return Toggle::RefusedPast;
        }
        if !self.selection.contains(day) && self.availability.is_booked(day) {
            return Toggle::RefusedBooked;
        }
        if self.selection.toggle(day) {
            Toggle::Selected
        } else {
            Toggle::Unselected
        }
    }

    /// Returns the rendering state of the provided `day`'s calendar cell.
    #[must_use]
    pub fn cell(&self, day: Date) -> Cell {
        Cell {
            selected: self.selection.contains(day),
            booked: self.availability.is_booked(day),
            today: day == self.today,
            past: day < self.today,
        }
    }

    /// Merges the current [`Selection`] into display [`Block`]s.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        self.selection.blocks()
    }

    /// Derives the [`StayRange`] envelope of the current [`Selection`].
    #[must_use]
    pub fn stay(&self) -> Option<StayRange> {
        self.selection.stay()
    }

    /// Derives the [`Quote`] for the current [`Selection`].
    #[must_use]
    pub fn quote(&self) -> Option<Quote> {
        self.selection.quote(self.rate.money())
    }

    /// Empties the current [`Selection`].
    ///
    /// Called on a successful submission; closing the dialog drops the
    /// whole [`Dialog`] instead.
    pub fn clear(&mut self) {
        self.selection.clear();
    }
}

/// Outcome of a [`Dialog::toggle()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Toggle {
    /// Day became selected.
    Selected,

    /// Day became unselected.
    Unselected,

    /// Day falls into a booked range and stays unselected.
    RefusedBooked,

    /// Day is before the dialog's "today" and stays unselected.
    RefusedPast,
}

impl Toggle {
    /// Indicates whether the toggle was refused.
    #[must_use]
    pub fn is_refused(self) -> bool {
        match self {
            Self::RefusedBooked | Self::RefusedPast => true,
            Self::Selected | Self::Unselected => false,
        }
    }
}

/// Rendering state of a single calendar day cell.
///
/// This is the only contract the engine exposes to a calendar renderer:
/// booked cells render disabled, selected cells highlighted, the today cell
/// carries a badge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    /// Day is currently selected.
    pub selected: bool,

    /// Day falls into a booked range.
    pub booked: bool,

    /// Day is the dialog's reference "today".
    pub today: bool,

    /// Day lies before the dialog's reference "today".
    pub past: bool,
}

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{
        domain::{booking::BookedRange, property},
        read::availability::Availability,
    };

    use super::{Dialog, Toggle};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn dialog() -> Dialog {
        let booked = vec![
            BookedRange::new(date("2025-01-10"), date("2025-01-12")).unwrap(),
        ];
        Dialog::new(
            property::Id::new(),
            "20000NGN".parse::<common::Money>().unwrap().into(),
            date("2025-01-01"),
            Availability::new(booked),
        )
    }

    #[test]
    fn gates_booked_and_past_days() {
        let mut dialog = dialog();

        assert_eq!(dialog.toggle(date("2024-12-31")), Toggle::RefusedPast);
        assert_eq!(dialog.toggle(date("2025-01-10")), Toggle::RefusedBooked);
        assert_eq!(dialog.toggle(date("2025-01-11")), Toggle::RefusedBooked);
        assert!(dialog.selection().is_empty());

        // Checkout day of a booked range is free.
        assert_eq!(dialog.toggle(date("2025-01-12")), Toggle::Selected);
        // "Today" itself is selectable.
        assert_eq!(dialog.toggle(date("2025-01-01")), Toggle::Selected);
        assert_eq!(dialog.toggle(date("2025-01-01")), Toggle::Unselected);
    }

    #[test]
    fn renders_cell_states() {
        let mut dialog = dialog();
        _ = dialog.toggle(date("2025-01-05"));

        let selected = dialog.cell(date("2025-01-05"));
        assert!(selected.selected && !selected.booked && !selected.past);

        let booked = dialog.cell(date("2025-01-10"));
        assert!(booked.booked && !booked.selected);

        let today = dialog.cell(date("2025-01-01"));
        assert!(today.today && !today.past);

        let past = dialog.cell(date("2024-12-25"));
        assert!(past.past && !past.today);
    }

    #[test]
    fn quotes_against_the_dialog_rate() {
        let mut dialog = dialog();
        assert_eq!(dialog.quote(), None);

        for day in ["2025-01-02", "2025-01-03", "2025-01-04"] {
            assert_eq!(dialog.toggle(date(day)), Toggle::Selected);
        }

        let quote = dialog.quote().unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total.to_string(), "60000NGN");

        dialog.clear();
        assert!(dialog.selection().is_empty());
        assert_eq!(dialog.stay(), None);
    }
}
