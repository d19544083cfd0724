/*
 * Responsibility
 * - /notes 系 CRUD handler
 * - ApiKeyExtractor で提示キーを受け、キーごとの namespace に対して操作する
 * - Json/Path を extractor で受け、DTO validation → repo 呼び出し
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::dto::notes::{CreateNoteRequest, NoteResponse},
    api::v1::extractors::ApiKeyExtractor,
    error::AppError,
    state::AppState,
};

pub async fn list_notes(
    State(state): State<AppState>,
    ApiKeyExtractor(ctx): ApiKeyExtractor,
) -> Json<Vec<NoteResponse>> {
    let rows = state.notes.list(&ctx.api_key);
    Json(rows.into_iter().map(NoteResponse::from).collect())
}

pub async fn create_note(
    State(state): State<AppState>,
    ApiKeyExtractor(ctx): ApiKeyExtractor,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_NOTE", msg))?;

    let row = state.notes.create(&ctx.api_key, &req.note);
    Ok((StatusCode::CREATED, Json(NoteResponse::from(row))))
}

pub async fn get_note(
    State(state): State<AppState>,
    ApiKeyExtractor(ctx): ApiKeyExtractor,
    Path(note_id): Path<Uuid>,
) -> Result<Json<NoteResponse>, AppError> {
    let row = state
        .notes
        .get(&ctx.api_key, note_id)
        .ok_or_else(|| AppError::not_found("note"))?;

    Ok(Json(NoteResponse::from(row)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    ApiKeyExtractor(ctx): ApiKeyExtractor,
    Path(note_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.notes.delete(&ctx.api_key, note_id) {
        return Err(AppError::not_found("note"));
    }
    Ok(StatusCode::NO_CONTENT)
}
