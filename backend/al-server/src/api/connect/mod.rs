pub mod connect;
pub mod connect_request;
pub mod connect_response;
