//! [`Command`] for submitting a [`Booking`].

use common::{operations::Insert, Date};
use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{Booking, Receipt},
        dialog::Dialog,
        guest::Guest,
        selection::Quote,
    },
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for submitting the current selection of a [`Dialog`] as a
/// [`Booking`].
///
/// Runs the submit gates first: an empty selection and an envelope
/// conflicting with a booked range abort the submission before anything
/// reaches the [`Gateway`]. The command consumes a clone of the [`Dialog`],
/// so on failure the caller's selection is untouched and the user may retry
/// without re-picking dates.
#[derive(Clone, Debug)]
pub struct SubmitBooking {
    /// [`Dialog`] whose selection is being submitted.
    pub dialog: Dialog,

    /// [`Guest`] the booking is made for.
    pub guest: Guest,
}

impl<Gw> Command<SubmitBooking> for Service<Gw>
where
    Gw: Gateway<Insert<Booking>, Ok = Receipt, Err = Traced<gateway::Error>>,
{
    type Ok = Receipt;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitBooking { dialog, guest } = cmd;

        let Some(stay) = dialog.stay() else {
            return Err(tracerr::new!(E::NothingSelected));
        };

        if dialog
            .availability()
            .conflicts(stay.check_in, stay.check_out_exclusive)
        {
            return Err(tracerr::new!(E::DatesConflict {
                check_in: stay.check_in,
                check_out_exclusive: stay.check_out_exclusive,
            }));
        }

        if !dialog.selection().is_contiguous() {
            // The envelope spans unselected days the total doesn't cover.
            log::warn!(
                "fragmented selection for `Property(id: {})` \
                 submitted as its envelope: {}",
                dialog.property_id(),
                dialog.blocks().iter().format(", "),
            );
        }

        let quote = Quote::new(stay.nights, dialog.rate().money());
        let booking = Booking {
            property_id: dialog.property_id(),
            check_in: stay.check_in,
            check_out_exclusive: stay.check_out_exclusive,
            nights: stay.nights,
            total: quote.total,
            guest,
        };

        self.gateway()
            .execute(Insert(booking))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SubmitBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),

    /// No dates are selected.
    #[display("no dates are selected")]
    NothingSelected,

    /// Selected dates conflict with an existing booking.
    #[display(
        "selected dates [{check_in}, {check_out_exclusive}) conflict with \
         an existing booking"
    )]
    DatesConflict {
        /// First night of the refused stay.
        check_in: Date,

        /// Exclusive checkout day of the refused stay.
        check_out_exclusive: Date,
    },
}

#[cfg(test)]
mod spec {
    use std::cell::{Cell, RefCell};

    use common::{operations::Insert, Handler, Money};
    use tracerr::Traced;

    use crate::{
        domain::{
            booking::{BookedRange, Booking, Receipt, Reference},
            dialog::{Dialog, Toggle},
            guest::{self, Guest},
            property,
        },
        infra::gateway::{self, http},
        read::availability::Availability,
        Config, Service,
    };

    use super::{ExecutionError, SubmitBooking};

    /// In-memory [`gateway::Gateway`] stub recording submissions.
    struct MockGateway {
        /// Whether submissions should fail.
        failing: bool,

        /// Submitted [`Booking`]s.
        submitted: RefCell<Vec<Booking>>,

        /// Number of submissions performed.
        submissions: Cell<u32>,
    }

    impl MockGateway {
        fn accepting() -> Self {
            Self {
                failing: false,
                submitted: RefCell::new(Vec::new()),
                submissions: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                failing: true,
                ..Self::accepting()
            }
        }
    }

    impl Handler<Insert<Booking>> for MockGateway {
        type Ok = Receipt;
        type Err = Traced<gateway::Error>;

        async fn execute(
            &self,
            Insert(booking): Insert<Booking>,
        ) -> Result<Self::Ok, Self::Err> {
            self.submissions.set(self.submissions.get() + 1);
            if self.failing {
                return Err(tracerr::new!(gateway::Error::Http(
                    http::Error::BadStatus { status: 502 },
                )));
            }
            self.submitted.borrow_mut().push(booking);
            Ok(Receipt {
                reference: "BK-1042".parse::<Reference>().unwrap(),
                authorization_url: None,
            })
        }
    }

    fn guest() -> Guest {
        Guest {
            name: guest::Name::new("Adaeze Obi").unwrap(),
            email: guest::Email::new("adaeze@example.com").unwrap(),
            phone: guest::Phone::new("+234 803 555 0147"),
        }
    }

    fn dialog(booked: Vec<BookedRange>) -> Dialog {
        Dialog::new(
            property::Id::new(),
            "20000NGN".parse::<Money>().unwrap().into(),
            "2025-01-01".parse().unwrap(),
            Availability::new(booked),
        )
    }

    #[tokio::test]
    async fn submits_envelope_and_quote_exactly_once() {
        let booked = vec![BookedRange::new(
            "2025-01-10".parse().unwrap(),
            "2025-01-12".parse().unwrap(),
        )
        .unwrap()];
        let mut dialog = dialog(booked);
        for day in ["2025-01-01", "2025-01-02", "2025-01-03"] {
            assert_eq!(dialog.toggle(day.parse().unwrap()), Toggle::Selected);
        }

        let service = Service::new(Config::default(), MockGateway::accepting());
        let receipt = service
            .execute(SubmitBooking {
                dialog: dialog.clone(),
                guest: guest(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.reference.to_string(), "BK-1042");
        assert_eq!(service.gateway().submissions.get(), 1);

        let submitted = service.gateway().submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].property_id, dialog.property_id());
        assert_eq!(submitted[0].check_in, "2025-01-01".parse().unwrap());
        assert_eq!(
            submitted[0].check_out_exclusive,
            "2025-01-04".parse().unwrap(),
        );
        assert_eq!(submitted[0].nights, 3);
        assert_eq!(
            submitted[0].total,
            "60000NGN".parse::<Money>().unwrap(),
        );
    }

    #[tokio::test]
    async fn refuses_empty_selection() {
        let service = Service::new(Config::default(), MockGateway::accepting());

        let result = service
            .execute(SubmitBooking {
                dialog: dialog(Vec::new()),
                guest: guest(),
            })
            .await;

        assert!(matches!(
            *result.unwrap_err().as_ref(),
            ExecutionError::NothingSelected,
        ));
        assert_eq!(service.gateway().submissions.get(), 0);
    }

    #[tokio::test]
    async fn refuses_envelope_conflicting_with_a_booked_range() {
        // Both toggled days are free, but the envelope they span swallows
        // the booked range, so the submit gate must fire.
        let booked = vec![BookedRange::new(
            "2025-01-10".parse().unwrap(),
            "2025-01-12".parse().unwrap(),
        )
        .unwrap()];
        let mut dialog = dialog(booked);
        assert_eq!(
            dialog.toggle("2025-01-09".parse().unwrap()),
            Toggle::Selected,
        );
        assert_eq!(
            dialog.toggle("2025-01-13".parse().unwrap()),
            Toggle::Selected,
        );

        let service = Service::new(Config::default(), MockGateway::accepting());
        let result = service
            .execute(SubmitBooking {
                dialog,
                guest: guest(),
            })
            .await;

        assert!(matches!(
            *result.unwrap_err().as_ref(),
            ExecutionError::DatesConflict { .. },
        ));
        assert_eq!(service.gateway().submissions.get(), 0);
    }

    #[tokio::test]
    async fn surfaces_gateway_failure_and_preserves_selection() {
        let mut dialog = dialog(Vec::new());
        assert_eq!(
            dialog.toggle("2025-01-02".parse().unwrap()),
            Toggle::Selected,
        );

        let service = Service::new(Config::default(), MockGateway::failing());
        let result = service
            .execute(SubmitBooking {
                dialog: dialog.clone(),
                guest: guest(),
            })
            .await;

        assert!(matches!(
            *result.unwrap_err().as_ref(),
            ExecutionError::Gateway(_),
        ));
        // The caller's dialog still holds the picked dates for a retry.
        assert!(dialog
            .selection()
            .contains("2025-01-02".parse().unwrap()));
    }
}
