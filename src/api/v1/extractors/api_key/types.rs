/*
 * Responsibility
 * - Handler から見える「API キー提示済みコンテキスト」の型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - ここにあるのは「形式上正しいキーが提示された」ことまで。
 *   キーの実在検証 (lookup) は別コンポーネントの責務
 */

/// API キー提示済みのリクエストに付与されるコンテキスト
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub api_key: String,
}

impl ApiKeyCtx {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}
