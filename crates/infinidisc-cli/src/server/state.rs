use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<ServerConfig>,
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
