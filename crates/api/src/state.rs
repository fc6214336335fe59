use std::sync::Arc;

use playhub_cache::CacheStore;
use playhub_db::store::{Stores, UserStore};
use playhub_events::EventBus;

use crate::config::ServerConfig;
use crate::notifications::FanoutEngine;
use crate::services::{CommandService, QueryService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The cache, store,
/// and bus handles are injected here once and passed down to each service
/// constructor -- no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cache-aside read service.
    pub queries: Arc<QueryService>,
    /// Write service (invalidate-on-write + event publish).
    pub commands: Arc<CommandService>,
    /// User collection handle for the auth handlers.
    pub users: Arc<dyn UserStore>,
    /// Event bus for live WebSocket subscriptions.
    pub bus: Arc<EventBus>,
}

impl AppState {
    /// Wire the services from the injected collaborator handles.
    pub fn new(
        config: ServerConfig,
        stores: Stores,
        cache: Arc<dyn CacheStore>,
        bus: Arc<EventBus>,
    ) -> Self {
        let queries = Arc::new(QueryService::new(&stores, cache.clone()));
        let fanout = FanoutEngine::new(
            stores.users.clone(),
            stores.notifications.clone(),
            cache.clone(),
            bus.clone(),
        );
        let commands = Arc::new(CommandService::new(&stores, cache, bus.clone(), fanout));

        Self {
            config: Arc::new(config),
            queries,
            commands,
            users: stores.users,
            bus,
        }
    }
}
