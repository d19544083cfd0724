//! `Authorization: ApiKey <key>` の抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 形式チェックのみ。キーが登録済みかどうかの検証は別コンポーネントの責務
//! - 失敗は 401 (code は NO_AUTH_HEADER / MALFORMED_AUTH_HEADER で区別)

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::api_key::extract_api_key;
use crate::state::AppState;

/// 保護対象の Router に API キー認証 middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let api_key = match extract_api_key(req.headers()) {
        Ok(key) => key.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "api key extraction failed");
            return Err(AppError::from(err));
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ApiKeyCtx::new(api_key));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::api::v1::extractors::ApiKeyExtractor;
    use crate::state::AppState;

    async fn whoami(ApiKeyExtractor(ctx): ApiKeyExtractor) -> String {
        ctx.api_key
    }

    fn app() -> Router {
        let router = Router::new().route("/whoami", get(whoami));
        super::apply(router).with_state(AppState::new())
    }

    async fn body_string(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let res = app()
            .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(res).await.contains("NO_AUTH_HEADER"));
    }

    #[tokio::test]
    async fn bearer_header_is_401() {
        let res = app()
            .oneshot(
                Request::get("/whoami")
                    .header(header::AUTHORIZATION, "Bearer some-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(res).await.contains("MALFORMED_AUTH_HEADER"));
    }

    #[tokio::test]
    async fn valid_key_reaches_handler() {
        let res = app()
            .oneshot(
                Request::get("/whoami")
                    .header(header::AUTHORIZATION, "ApiKey my-api-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "my-api-key");
    }
}
