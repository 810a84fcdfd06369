pub(crate) mod client;
pub(crate) mod error;

pub use client::{ConnectPayload, ConnectedAccount, ProviderClient};
pub use error::{GatewayError, GatewayErrorKind, Result as GatewayResult};
