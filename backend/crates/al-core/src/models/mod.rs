pub mod connect_method;
pub mod linked_account;
pub mod user;
