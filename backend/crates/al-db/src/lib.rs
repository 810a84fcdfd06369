pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::linked_account_repository::LinkedAccountRepository;
pub use repositories::user_repository::UserRepository;
