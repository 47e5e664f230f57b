use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::admin::AdminState;
use crate::source::reload_from_file;
use crate::switch::ReloadOutcome;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub generation: u64,
    pub switches: usize,
}

#[derive(Serialize)]
pub struct SwitchEntry {
    pub key: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct SwitchListing {
    pub generation: u64,
    pub snapshot: String,
    pub switches: Vec<SwitchEntry>,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    let table = state.store.table();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        generation: table.generation(),
        switches: table.len(),
    })
}

pub async fn list_switches(State(state): State<AdminState>) -> Json<SwitchListing> {
    // One load so the listing and the snapshot describe the same generation.
    let table = state.store.table();
    Json(SwitchListing {
        generation: table.generation(),
        snapshot: table.render(),
        switches: table
            .iter()
            .map(|(key, value)| SwitchEntry {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect(),
    })
}

pub async fn get_switch(
    State(state): State<AdminState>,
    Path(key): Path<String>,
) -> Result<Json<SwitchEntry>, StatusCode> {
    let table = state.store.table();
    let value = table.get(&key).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(SwitchEntry {
        key,
        value: value.to_string(),
    }))
}

pub async fn push_switches(State(state): State<AdminState>, body: String) -> Json<ReloadOutcome> {
    tracing::info!(bytes = body.len(), "Switch blob pushed through admin API");
    Json(state.store.reload(&body))
}

pub async fn reload_from_source(
    State(state): State<AdminState>,
) -> Result<Json<ReloadOutcome>, StatusCode> {
    let path = state.source_path.clone().ok_or(StatusCode::NOT_FOUND)?;
    let store = state.store.clone();

    let outcome = tokio::task::spawn_blocking(move || reload_from_file(&store, &path))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Switch reload task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(outcome))
}
