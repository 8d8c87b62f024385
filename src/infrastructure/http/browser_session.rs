//! Browser Session
//!
//! cookie 与会话记录由 tower-sessions 管理，记录中只保存页面会话 ID；
//! 页面状态本身在 SessionStorePort 中

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use super::error::ApiError;

pub const SESSION_COOKIE_NAME: &str = "memegen_session";

/// 浏览器会话
///
/// 只有调用 `remember` 写入新 ID 后，响应才会下发 cookie
pub struct BrowserSession {
    session: Session,
    workspace_id: Option<String>,
}

impl BrowserSession {
    const WORKSPACE_ID_KEY: &'static str = "workspace_id";

    /// 当前浏览器绑定的页面会话 ID
    pub fn workspace_id(&self) -> Option<String> {
        self.workspace_id.clone()
    }

    /// 绑定页面会话 ID；与已有 ID 相同时不写入
    pub async fn remember(&self, workspace_id: &str) -> Result<(), ApiError> {
        if self.workspace_id.as_deref() == Some(workspace_id) {
            return Ok(());
        }

        self.session
            .insert(Self::WORKSPACE_ID_KEY, workspace_id)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to store session: {}", e)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BrowserSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(msg.to_string()))?;

        let workspace_id = session
            .get::<String>(Self::WORKSPACE_ID_KEY)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to load session: {}", e)))?;

        Ok(Self {
            session,
            workspace_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        routing::{get, post},
        Router,
    };
    use tower::util::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    async fn current(browser: BrowserSession) -> String {
        browser.workspace_id().unwrap_or_default()
    }

    async fn bind(browser: BrowserSession) -> Result<(), ApiError> {
        browser.remember("workspace-1").await
    }

    fn router() -> Router {
        Router::new()
            .route("/current", get(current))
            .route("/bind", post(bind))
            .layer(
                SessionManagerLayer::new(MemoryStore::default())
                    .with_name(SESSION_COOKIE_NAME)
                    .with_secure(false),
            )
    }

    fn cookie_pair(value: &header::HeaderValue) -> String {
        value.to_str().unwrap().split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_no_cookie_until_bound() {
        let router = router();

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/current").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bind")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        let pair = cookie_pair(set_cookie);
        assert!(pair.starts_with("memegen_session="));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/current")
                    .header(header::COOKIE, pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"workspace-1");
    }

    #[tokio::test]
    async fn test_rebinding_same_id_keeps_cookie() {
        let router = router();
        let request = || {
            Request::builder()
                .method("POST")
                .uri("/bind")
                .body(Body::empty())
                .unwrap()
        };

        let response = router.clone().oneshot(request()).await.unwrap();
        let pair = cookie_pair(response.headers().get(header::SET_COOKIE).unwrap());

        let mut again = request();
        again
            .headers_mut()
            .insert(header::COOKIE, pair.parse().unwrap());
        let response = router.clone().oneshot(again).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
