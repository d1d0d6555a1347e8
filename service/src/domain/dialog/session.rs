//! Lifecycle of a booking [`Dialog`] session.

use crate::domain::property;

use super::Dialog;

/// Per-property booking session driving one [`Dialog`] at a time through
/// `Idle → Loading → Ready → Idle`.
///
/// Every [`open()`] and [`close()`] bumps a generation counter, so the
/// result of a fetch or submission that was in flight when the session
/// moved on carries a stale [`Ticket`] and is discarded on arrival instead
/// of mutating a dialog the user no longer sees.
///
/// [`close()`]: Session::close
/// [`open()`]: Session::open
#[derive(Debug, Default)]
pub struct Session {
    /// Current [`Phase`] of this [`Session`].
    phase: Phase,

    /// Generation the outstanding [`Ticket`]s are checked against.
    generation: u64,
}

impl Session {
    /// Creates a new idle [`Session`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current [`Phase`] of this [`Session`].
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Indicates whether the calendar may be interacted with.
    ///
    /// Until the booked-dates fetch resolves, no toggle can be gated, so
    /// the calendar stays non-interactive and submission stays disabled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        match &self.phase {
            Phase::Ready(_) => true,
            Phase::Idle | Phase::Loading { .. } => false,
        }
    }

    /// Starts opening a [`Dialog`] for the provided property.
    ///
    /// Moves this [`Session`] into [`Phase::Loading`] and returns the
    /// [`Ticket`] the eventual fetch result must present to [`ready()`].
    /// Any previously outstanding [`Ticket`] is invalidated, including the
    /// one of a still-loading previous open.
    ///
    /// [`ready()`]: Session::ready
    pub fn open(&mut self, property_id: property::Id) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Loading { property_id };
        Ticket(self.generation)
    }

    /// Completes an [`open()`] with the assembled [`Dialog`].
    ///
    /// Returns whether the [`Dialog`] was accepted: a stale `ticket` (the
    /// session was closed or reopened meanwhile) leaves the session
    /// untouched.
    ///
    /// [`open()`]: Session::open
    pub fn ready(&mut self, ticket: Ticket, dialog: Dialog) -> bool {
        if !self.accepts(ticket) || !matches!(self.phase, Phase::Loading { .. })
        {
            return false;
        }
        self.phase = Phase::Ready(dialog);
        true
    }

    /// Returns a [`Ticket`] bound to the current generation.
    ///
    /// Taken before awaiting a submission, so its outcome can be dropped
    /// with [`accepts()`] if the session moved on meanwhile.
    ///
    /// [`accepts()`]: Session::accepts
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    /// Indicates whether the provided [`Ticket`] is still current.
    #[must_use]
    pub fn accepts(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Closes this [`Session`], discarding the [`Dialog`] (if any) and
    /// invalidating every outstanding [`Ticket`].
    pub fn close(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }

    /// Returns the open [`Dialog`], if this [`Session`] is in
    /// [`Phase::Ready`].
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        match &self.phase {
            Phase::Ready(dialog) => Some(dialog),
            Phase::Idle | Phase::Loading { .. } => None,
        }
    }

    /// Returns the open [`Dialog`] mutably, if this [`Session`] is in
    /// [`Phase::Ready`].
    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        match &mut self.phase {
            Phase::Ready(dialog) => Some(dialog),
            Phase::Idle | Phase::Loading { .. } => None,
        }
    }
}

/// Phase of a [`Session`].
#[derive(Debug, Default)]
pub enum Phase {
    /// No dialog is open.
    #[default]
    Idle,

    /// A dialog is opening: the booked-dates fetch is in flight.
    Loading {
        /// ID of the property the dialog is opening for.
        property_id: property::Id,
    },

    /// A dialog is open and interactive.
    Ready(Dialog),
}

/// Proof that an asynchronous result belongs to the current [`Session`]
/// generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ticket(u64);

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{domain::property, read::availability::Availability};

    use super::{Dialog, Phase, Session};

    fn dialog(property_id: property::Id) -> Dialog {
        Dialog::new(
            property_id,
            "20000NGN".parse::<common::Money>().unwrap().into(),
            Date::from_calendar(2025, 1, 1).unwrap(),
            Availability::default(),
        )
    }

    #[test]
    fn walks_idle_loading_ready_idle() {
        let mut session = Session::new();
        assert!(matches!(session.phase(), Phase::Idle));
        assert!(!session.is_interactive());

        let property_id = property::Id::new();
        let ticket = session.open(property_id);
        assert!(matches!(session.phase(), Phase::Loading { .. }));
        assert!(!session.is_interactive());

        assert!(session.ready(ticket, dialog(property_id)));
        assert!(session.is_interactive());
        assert_eq!(session.dialog().unwrap().property_id(), property_id);

        session.close();
        assert!(matches!(session.phase(), Phase::Idle));
        assert!(session.dialog().is_none());
    }

    #[test]
    fn discards_fetch_completing_after_close() {
        let mut session = Session::new();

        let property_id = property::Id::new();
        let ticket = session.open(property_id);
        session.close();

        // The in-flight fetch resolves now; its result must not resurrect
        // the dialog.
        assert!(!session.ready(ticket, dialog(property_id)));
        assert!(matches!(session.phase(), Phase::Idle));
    }

    #[test]
    fn discards_fetch_of_a_superseded_open() {
        let mut session = Session::new();

        let first_property = property::Id::new();
        let first = session.open(first_property);

        let second_property = property::Id::new();
        let second = session.open(second_property);

        assert!(!session.ready(first, dialog(first_property)));
        assert!(session.ready(second, dialog(second_property)));
        assert_eq!(
            session.dialog().unwrap().property_id(),
            second_property,
        );
    }

    #[test]
    fn invalidates_submission_tickets_on_close() {
        let mut session = Session::new();

        let property_id = property::Id::new();
        let open_ticket = session.open(property_id);
        assert!(session.ready(open_ticket, dialog(property_id)));

        let submit_ticket = session.ticket();
        assert!(session.accepts(submit_ticket));

        session.close();
        assert!(!session.accepts(submit_ticket));
    }
}
