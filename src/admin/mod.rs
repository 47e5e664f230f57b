//! Admin API for inspecting and pushing switches.
//!
//! # Routes
//! ```text
//! GET  /admin/status            version, generation, switch count
//! GET  /admin/switches          full listing + snapshot string
//! GET  /admin/switches/{key}    one raw value
//! POST /admin/switches          body = raw switch blob, reloads the store
//! POST /admin/reload            reload from the configured switch file
//! ```
//!
//! Every route requires `Authorization: Bearer <api_key>`.

pub mod auth;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::switch::SwitchStore;
use self::auth::admin_auth_middleware;
use self::handlers::*;

/// State shared by admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub store: Arc<SwitchStore>,
    pub api_key: Arc<str>,
    /// Switch file used by `POST /admin/reload`.
    pub source_path: Option<Arc<PathBuf>>,
}

impl AdminState {
    pub fn new(store: Arc<SwitchStore>, api_key: &str, source_path: Option<PathBuf>) -> Self {
        Self {
            store,
            api_key: Arc::from(api_key),
            source_path: source_path.map(Arc::new),
        }
    }
}

pub fn setup_admin_router(state: AdminState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/switches", get(list_switches).post(push_switches))
        .route("/admin/switches/{key}", get(get_switch))
        .route("/admin/reload", post(reload_from_source))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
