use al_gateway::ProviderClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-process state, injected into every handler.
///
/// The store handle and the gateway are explicit dependencies so tests can
/// substitute an in-memory pool and a mock provider endpoint.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub provider: Arc<ProviderClient>,
}
