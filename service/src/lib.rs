//! Service contains the booking engine logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use crate::read::availability::FetchPolicy;
#[cfg(doc)]
use crate::{domain::Dialog, infra::Gateway};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Policy applied when fetching booked dates fails on a [`Dialog`]
    /// opening.
    pub fetch_policy: FetchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_policy: FetchPolicy::FailOpen,
        }
    }
}

/// Booking engine service.
#[derive(Clone, Debug)]
pub struct Service<Gw> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Gateway`] of this [`Service`].
    gateway: Gw,
}

impl<Gw> Service<Gw> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, gateway: Gw) -> Self {
        Self { config, gateway }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Gateway`] of this [`Service`].
    #[must_use]
    pub fn gateway(&self) -> &Gw {
        &self.gateway
    }
}
