use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is a handle and the config sits behind an
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: cinema_db::DbPool,
    pub config: Arc<ServerConfig>,
}
