use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{EventService, GroupService, UserService};
use persistence::memory::InMemoryStore;
use persistence::repositories::{EventRepository, GroupRepository, UserRepository};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{events, groups, health, users};

/// Backing storage for the gateways.
pub enum Storage {
    Postgres(PgPool),
    Memory(Arc<InMemoryStore>),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present only for the Postgres backend; used by health probes.
    pub pool: Option<PgPool>,
    pub users: UserService,
    pub groups: GroupService,
    pub events: EventService,
}

impl AppState {
    /// Wire services to their storage gateways.
    pub fn new(config: Config, storage: Storage) -> Self {
        let config = Arc::new(config);

        match storage {
            Storage::Postgres(pool) => {
                let groups = Arc::new(GroupRepository::new(pool.clone()));
                Self {
                    config,
                    users: UserService::new(Arc::new(UserRepository::new(pool.clone()))),
                    groups: GroupService::new(groups.clone()),
                    events: EventService::new(Arc::new(EventRepository::new(pool.clone())), groups),
                    pool: Some(pool),
                }
            }
            Storage::Memory(store) => Self {
                config,
                pool: None,
                users: UserService::new(store.clone()),
                groups: GroupService::new(store.clone()),
                events: EventService::new(store.clone(), store),
            },
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn create_app(config: Config, storage: Storage) -> Router {
    let state = AppState::new(config, storage);
    let config = state.config.clone();

    let resource_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/groups", get(groups::list_groups).post(groups::create_group))
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/group/:group_id",
            post(events::create_event_for_group),
        );

    let operational_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(resource_routes)
        .merge(operational_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security.cors_origins))
        .with_state(state)
}
