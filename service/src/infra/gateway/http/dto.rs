//! Wire representations of the remote booking API payloads.
//!
//! Every inbound payload is validated here, at the collaborator boundary,
//! before anything reaches the engine: malformed dates or empty ranges are
//! rejected instead of being guessed at.

use common::{date, Date};
use derive_more::{Display, Error as StdError};
use serde::{Deserialize, Serialize};

use crate::domain::booking::{
    AuthorizationUrl, BookedRange, Booking, Receipt, Reference,
};

/// Booked date range, as listed by `GET /properties/{id}/booked-dates`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRangeDto {
    /// First occupied night, as an ISO 8601 date.
    pub start_date: String,

    /// Checkout day (exclusive), as an ISO 8601 date.
    pub end_date: String,
}

impl TryFrom<BookedRangeDto> for BookedRange {
    type Error = Error;

    fn try_from(dto: BookedRangeDto) -> Result<Self, Self::Error> {
        let start = Date::from_iso8601(&dto.start_date).map_err(Error::Date)?;
        let end = Date::from_iso8601(&dto.end_date).map_err(Error::Date)?;
        Self::new(start, end).ok_or(Error::EmptyRange { start, end })
    }
}

/// Booking submission, as accepted by `POST /bookings`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    /// ID of the property being booked.
    pub property_id: String,

    /// First night of the stay, as an ISO 8601 date.
    pub check_in: String,

    /// Checkout day (exclusive), as an ISO 8601 date.
    pub check_out_exclusive: String,

    /// Number of selected nights.
    pub nights: u32,

    /// Total amount due, as `{amount}{currency}`.
    pub total_amount: String,

    /// Name of the guest.
    pub guest_name: String,

    /// Email of the guest.
    pub guest_email: String,

    /// Phone of the guest, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            property_id: booking.property_id.to_string(),
            check_in: booking.check_in.to_iso8601(),
            check_out_exclusive: booking.check_out_exclusive.to_iso8601(),
            nights: booking.nights,
            total_amount: booking.total.to_string(),
            guest_name: booking.guest.name.to_string(),
            guest_email: booking.guest.email.to_string(),
            guest_phone: booking.guest.phone.as_ref().map(ToString::to_string),
        }
    }
}

/// Booking confirmation, as returned by `POST /bookings`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    /// Reference assigned to the created booking.
    pub reference: String,

    /// URL of the payment authorization page, if a payment session was
    /// initiated.
    #[serde(default)]
    pub authorization_url: Option<String>,
}

impl TryFrom<ReceiptDto> for Receipt {
    type Error = Error;

    fn try_from(dto: ReceiptDto) -> Result<Self, Self::Error> {
        let reference = Reference::new(dto.reference.clone())
            .ok_or(Error::InvalidReference {
                reference: dto.reference,
            })?;
        Ok(Self {
            reference,
            authorization_url: dto
                .authorization_url
                .map(AuthorizationUrl::from),
        })
    }
}

/// Error of converting a wire payload into its domain representation.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// Payload contains an invalid ISO 8601 date.
    #[display("invalid ISO 8601 date: {_0}")]
    Date(date::ParseError),

    /// Payload contains a booked range not covering a single night.
    #[display("empty booked range: [{start}, {end})")]
    EmptyRange {
        /// Start of the range.
        #[error(not(source))]
        start: Date,

        /// Exclusive end of the range.
        #[error(not(source))]
        end: Date,
    },

    /// Payload contains an invalid booking reference.
    #[display("invalid booking reference: `{reference}`")]
    InvalidReference {
        /// The offending reference.
        #[error(not(source))]
        reference: String,
    },
}
