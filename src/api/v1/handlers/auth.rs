/*
 * Responsibility
 * - GET /auth/key (抽出された API キーをそのまま返す)
 * - extractor → handler の配線確認と、クライアント側のデバッグ用
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::ApiKeyExtractor;

pub async fn get_api_key(ApiKeyExtractor(ctx): ApiKeyExtractor) -> Json<Value> {
    Json(json!({"api_key": ctx.api_key}))
}
