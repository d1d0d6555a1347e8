//! [`Gateway`] operations of the [`Http`] client.

use common::operations::{By, Insert, Select};
use secrecy::ExposeSecret as _;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{BookedRange, Booking, Receipt},
        property,
    },
    infra::gateway::{self, Gateway},
};

use super::{dto, Error, Http};

impl Gateway<Select<By<Vec<BookedRange>, property::Id>>> for Http {
    type Ok = Vec<BookedRange>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        op: Select<By<Vec<BookedRange>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Select(by) = op;
        let property_id = by.into_inner();

        let url =
            self.endpoint(format!("properties/{property_id}/booked-dates"));
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.secret_key.expose_secret())
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(Error::BadStatus {
                status: status.as_u16(),
            }))
            .map_err(tracerr::map_from);
        }

        let body = response
            .text()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let dtos: Vec<dto::BookedRangeDto> = serde_json::from_str(&body)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        dtos.into_iter()
            .map(BookedRange::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| tracerr::new!(Error::Malformed(e)))
            .map_err(tracerr::map_from)
    }
}

impl Gateway<Insert<Booking>> for Http {
    type Ok = Receipt;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        op: Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let Insert(booking) = op;

        let url = self.endpoint("bookings");
        log::debug!(
            "POST {url} for `Property(id: {})`",
            booking.property_id,
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.secret_key.expose_secret())
            .json(&dto::BookingDto::from(&booking))
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(Error::BadStatus {
                status: status.as_u16(),
            }))
            .map_err(tracerr::map_from);
        }

        let body = response
            .text()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let receipt: dto::ReceiptDto = serde_json::from_str(&body)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let receipt = Receipt::try_from(receipt)
            .map_err(|e| tracerr::new!(Error::Malformed(e)))
            .map_err(tracerr::map_from)?;

        log::info!("booking submitted: reference `{}`", receipt.reference);
        Ok(receipt)
    }
}
