//! [`Command`] for opening a booking [`Dialog`].

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking::BookedRange, dialog::Dialog, property},
    infra::{gateway, Gateway},
    read::availability::{Availability, FetchPolicy},
    Service,
};

use super::Command;

/// [`Command`] for opening a booking [`Dialog`] for a property.
///
/// Fetches the property's [`BookedRange`]s through the [`Gateway`] and
/// assembles a fresh [`Dialog`] around the snapshot. A previously opened
/// [`Dialog`] for the same property is never reused: every opening
/// re-fetches, so bookings made by other users since the last opening are
/// picked up.
#[derive(Clone, Copy, Debug)]
pub struct OpenDialog {
    /// ID of the property to open a [`Dialog`] for.
    pub property_id: property::Id,

    /// Nightly rate the [`Dialog`] will quote against.
    pub rate: property::NightlyRate,
}

impl<Gw> Command<OpenDialog> for Service<Gw>
where
    Gw: Gateway<
        Select<By<Vec<BookedRange>, property::Id>>,
        Ok = Vec<BookedRange>,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Dialog;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: OpenDialog) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let OpenDialog { property_id, rate } = cmd;

        let availability = match self
            .gateway()
            .execute(Select(By::<Vec<BookedRange>, _>::new(property_id)))
            .await
        {
            Ok(booked) => Availability::new(booked),
            Err(e) => match self.config().fetch_policy {
                FetchPolicy::FailOpen => {
                    log::warn!(
                        "failed to fetch booked dates of \
                         `Property(id: {property_id})`, \
                         proceeding without them: {e}",
                    );
                    Availability::degraded()
                }
                FetchPolicy::FailClosed => {
                    return Err(e)
                        .map_err(tracerr::map_from_and_wrap!(=> E));
                }
            },
        };

        Ok(Dialog::new(property_id, rate, Date::today(), availability))
    }
}

/// Error of [`OpenDialog`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
