pub mod linked_account_repository;
pub mod user_repository;
