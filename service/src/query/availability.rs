//! [`Query`] collection related to property availability.

use common::operations::By;

use crate::domain::{booking::BookedRange, property};

use super::GatewayQuery;

/// Queries the [`BookedRange`]s of a property.
///
/// Used whenever a fresh availability snapshot is needed outside of a
/// dialog opening, e.g. refreshing a calendar that stayed on screen.
pub type BookedRanges = GatewayQuery<By<Vec<BookedRange>, property::Id>>;
