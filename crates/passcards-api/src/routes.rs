use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use passcards_core::{CardDraft, CardId, PasswordCard};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cards::CardRepository;
use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    cards: CardRepository,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            cards: CardRepository::default(),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/password-cards", get(list_cards).post(create_card))
        .route("/password-cards/{id}", put(update_card).delete(delete_card))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    cards: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
        cards: state.cards.len().await,
    })
}

async fn list_cards(State(state): State<AppState>) -> Json<Vec<PasswordCard>> {
    Json(state.cards.list().await)
}

async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CardDraft>, JsonRejection>,
) -> Result<Json<PasswordCard>, AppError> {
    let Json(draft) = payload?;
    let card = state.cards.create(draft).await;
    tracing::info!(endpoint = "create_card", card = %card.id, "Created password card");
    Ok(Json(card))
}

// Any ID in the body is ignored; the path decides which card changes.
async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CardDraft>, JsonRejection>,
) -> Result<Json<PasswordCard>, AppError> {
    let Json(draft) = payload?;
    let id = CardId::new(id);
    let card = state.cards.update(&id, draft).await.ok_or_else(|| {
        tracing::warn!(endpoint = "update_card", card = %id, "Update for unknown card");
        AppError::NotFound
    })?;
    tracing::info!(endpoint = "update_card", card = %card.id, "Updated password card");
    Ok(Json(card))
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: bool,
}

async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    let id = CardId::new(id);
    let deleted = state.cards.delete(&id).await;
    tracing::info!(endpoint = "delete_card", card = %id, deleted, "Deleted password card");
    Json(DeleteResponse { deleted })
}
