use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    error::AppResult,
    handlers::extract::{IdParam, JsonBody},
    models::{UpdateWhisky, Whisky},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_whiskies(State(state): State<AppState>) -> Json<Vec<Whisky>> {
    let start = Instant::now();
    let whiskies = state.store.read().await.list();

    info!(
        count = whiskies.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Listed whiskies"
    );

    Json(whiskies)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_whisky(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Whisky>,
) -> (StatusCode, Json<Whisky>) {
    let whisky = state.store.write().await.create(payload);

    info!(id = whisky.id, name = ?whisky.name, "Created whisky");

    (StatusCode::CREATED, Json(whisky))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_whisky(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<Whisky>> {
    let whisky = state.store.read().await.read(id)?;

    info!(id, "Fetched whisky");

    Ok(Json(whisky))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_whisky(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(payload): JsonBody<UpdateWhisky>,
) -> AppResult<Json<Whisky>> {
    let whisky = state.store.write().await.update(id, payload)?;

    info!(id, "Updated whisky");

    Ok(Json(whisky))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_whisky(State(state): State<AppState>, IdParam(id): IdParam) -> StatusCode {
    let removed = state.store.write().await.delete(id);

    info!(id, existed = removed.is_some(), "Deleted whisky");

    StatusCode::NO_CONTENT
}
