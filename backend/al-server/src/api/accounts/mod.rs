pub mod account_dto;
pub mod account_list_response;
pub mod accounts;
