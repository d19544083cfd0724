/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /auth, /notes を merge
 * - ApiKey が必要な範囲をここで決める (health 以外は保護)
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::get_api_key,
    health::health,
    notes::{create_note, delete_note, get_note, list_notes},
};

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = Router::new()
        .route("/auth/key", get(get_api_key))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{note_id}", get(get_note).delete(delete_note));

    public.merge(middleware::auth::api_key::apply(protected))
}
