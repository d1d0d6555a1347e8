//! [`Gateway`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Remote booking collaborator operation.
pub use common::Handler as Gateway;

/// [`Gateway`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    Http(http::Error),
}
