pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::connect_method::ConnectMethod;
pub use models::linked_account::LinkedAccount;
pub use models::user::User;

pub use error_location::ErrorLocation;

/// Provider tag stored alongside every linked account.
pub const PROVIDER_LINKEDIN: &str = "linkedin";
