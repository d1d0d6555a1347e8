//! Infrastructure layer.

pub mod gateway;

pub use self::gateway::Gateway;
#[cfg(feature = "http")]
pub use self::gateway::{http, Http};
