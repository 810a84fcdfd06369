pub mod accounts;
pub mod connect;
pub mod error;
