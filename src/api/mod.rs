mod handlers;
pub mod middleware;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::session::SessionRegistry;
use crate::store::StoreOptions;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub options: StoreOptions,
}

impl AppState {
    pub fn new(sessions: SessionRegistry, options: StoreOptions) -> Self {
        Self { sessions, options }
    }
}

pub fn create_router(state: AppState) -> Router {
    let lists = Router::new()
        // Lists
        .route("/lists", get(handlers::list_lists))
        .route("/lists", post(handlers::create_list))
        .route("/lists/{list}", get(handlers::get_list))
        .route("/lists/{list}/rename", post(handlers::rename_list))
        .route("/lists/{list}/delete", post(handlers::delete_list))
        .route("/lists/{list}/complete_all", post(handlers::complete_all))
        // Tasks
        .route("/lists/{list}/todo", post(handlers::create_task))
        .route("/lists/{list}/todo/{todo}", post(handlers::toggle_task))
        .route("/lists/{list}/todo/{todo}/delete", post(handlers::delete_task))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .merge(lists)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
