use sqlx::PgPool;

use crate::config::{ApiConfig, Environment};

/// Shared application state, cloned into every handler.
///
/// The pool is created at startup and closed by the binary on shutdown;
/// handlers never hold state of their own.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            environment: config.env,
        }
    }
}
