//! Property definitions.

use common::Money;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Property listed for booking.
///
/// The listing itself (address, photos, amenities) lives entirely on the
/// remote side; the engine only ever refers to a property by its [`Id`] and
/// quotes against its [`NightlyRate`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Price of one night's stay at a property.
#[derive(Clone, Copy, Debug, Display, Eq, From, Into, PartialEq)]
pub struct NightlyRate(Money);

impl NightlyRate {
    /// Returns the [`Money`] amount of this [`NightlyRate`].
    #[must_use]
    pub fn money(self) -> Money {
        self.0
    }
}
