/*
 * Responsibility
 * - Authorization ヘッダから API キーを抽出する (`ApiKey <token>` 形式のみ)
 * - ヘッダの有無・形式だけを判定し、キーが実在するかの検証はしない
 * - middleware / extractor からはこの service を使う (形式変更の影響を局所化)
 *
 * Notes
 * - 純粋関数として定義する (ヘッダを読むだけ、I/O なし、状態なし)
 * - エラーは値で返す。ログは呼び出し側 (middleware) の責務
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization 値のスキーム。大文字小文字を区別して比較する
const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// `Authorization: ApiKey <token>` から `<token>` を取り出す。
///
/// - ヘッダ自体が無い → `NoAuthHeader`
/// - ヘッダはあるが `ApiKey <token>` の 2 フィールドちょうどでない → `MalformedHeader`
/// - スキーム不一致 (`Bearer` など) も `MalformedHeader` に畳む
///   (この API は ApiKey スキームしか受けないため、区別しない)
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;

    // UTF-8 でないヘッダ値は「あるが解釈できない」扱い
    let value = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ApiKeyError::MalformedHeader);
    }
    if fields[0] != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(fields[1])
}
