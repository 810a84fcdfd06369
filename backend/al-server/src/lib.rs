pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    accounts::{
        account_dto::LinkedAccountDto, account_list_response::AccountListResponse,
        accounts::list_accounts,
    },
    connect::{
        connect::connect_linkedin, connect_request::ConnectRequest,
        connect_response::ConnectResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
