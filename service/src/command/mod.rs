//! [`Command`] definition.

pub mod open_dialog;
pub mod submit_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{open_dialog::OpenDialog, submit_booking::SubmitBooking};
