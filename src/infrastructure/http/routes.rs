//! HTTP Routes
//!
//! Endpoints:
//! - /           GET   渲染当前会话页面
//! - /generate   POST  随机获取新模板
//! - /caption    POST  提交文本框内容
//! - /api/ping   GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/caption", post(handlers::caption))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    use crate::application::{MemeSessionController, RandomPicker, SessionStorePort};
    use crate::domain::meme::{Template, TemplateId};
    use crate::infrastructure::adapters::FakeImgflipClient;
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::memory::InMemorySessionStore;

    struct TestApp {
        router: Router,
        api: Arc<FakeImgflipClient>,
        store: Arc<InMemorySessionStore>,
    }

    fn app() -> TestApp {
        let api = Arc::new(FakeImgflipClient::new(vec![Template::new(
            TemplateId::new("1"),
            "Drake",
            "http://x/1.png",
            2,
        )]));
        let store = Arc::new(InMemorySessionStore::new());
        let controller = Arc::new(MemeSessionController::new(
            api.clone(),
            Arc::new(RandomPicker),
        ));
        let state = AppState::new(store.clone(), controller);
        TestApp {
            router: build_router(Arc::new(state), false),
            api,
            store,
        }
    }

    /// 取出 Set-Cookie 中的 `name=value`，可直接作为 Cookie 请求头
    fn cookie_from(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("set-cookie header")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    impl TestApp {
        async fn get_page(&self, cookie: &str) -> String {
            let request = Request::builder()
                .uri("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap();
            let response = self.router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            body_text(response).await
        }

        async fn post(&self, uri: &str, cookie: Option<&str>, body: &str) -> Response {
            let mut request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            if let Some(cookie) = cookie {
                request = request.header(header::COOKIE, cookie);
            }
            let request = request.body(Body::from(body.to_string())).unwrap();
            self.router.clone().oneshot(request).await.unwrap()
        }

        /// 首次生成图片，返回浏览器 cookie
        async fn first_generate(&self) -> String {
            let response = self.post("/generate", None, "").await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            cookie_from(&response)
        }
    }

    #[tokio::test]
    async fn test_first_visit_creates_no_session() {
        let app = app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(app.store.count(), 0);

        let body = body_text(response).await;
        assert!(body.contains("Generate image!"));
        assert!(!body.contains("<img"));
    }

    #[tokio::test]
    async fn test_known_cookie_not_reissued() {
        let app = app();
        let cookie = app.first_generate().await;

        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let response = app.post("/generate", Some(&cookie), "").await;
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(app.store.count(), 1);
    }

    #[tokio::test]
    async fn test_generate_renders_template_and_inputs() {
        let app = app();
        let cookie = app.first_generate().await;
        assert_eq!(app.store.count(), 1);

        let response = app.post("/generate", Some(&cookie), "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        let body = app.get_page(&cookie).await;
        assert!(body.contains("<img"));
        assert!(body.contains("1.png"));
        assert!(body.contains("alt=\"Drake\""));
        assert_eq!(body.matches("maxlength=\"45\"").count(), 2);
    }

    #[tokio::test]
    async fn test_generate_failure_shows_message_without_image() {
        let app = app();
        let cookie = app.first_generate().await;
        app.api.set_fail_templates(true);

        app.post("/generate", Some(&cookie), "").await;

        let body = app.get_page(&cookie).await;
        assert!(body.contains("be generated! Please try again"));
        assert!(!body.contains("<img"));
    }

    #[tokio::test]
    async fn test_incomplete_caption_sends_nothing() {
        let app = app();
        let cookie = app.first_generate().await;

        let response = app
            .post("/caption", Some(&cookie), "caption=top+text&caption=")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(app.api.caption_requests().is_empty());

        let body = app.get_page(&cookie).await;
        assert!(body.contains("value=\"top text\""));
        assert!(!body.contains("Please try again"));
    }

    #[tokio::test]
    async fn test_caption_submission() {
        let app = app();
        let cookie = app.first_generate().await;

        app.post(
            "/caption",
            Some(&cookie),
            "caption=top+text&caption=bottom+text",
        )
        .await;

        let requests = app.api.caption_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].template_id.as_str(), "1");
        assert_eq!(
            requests[0].captions.as_slice(),
            &["top text".to_string(), "bottom text".to_string()]
        );

        let body = app.get_page(&cookie).await;
        assert!(body.contains("<img"));
        assert!(body.contains("value=\"bottom text\""));
    }

    #[tokio::test]
    async fn test_caption_without_session_is_noop() {
        let app = app();

        let response = app
            .post("/caption", None, "caption=top+text&caption=bottom+text")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(app.api.caption_requests().is_empty());
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app();
        app.first_generate().await;

        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessions"], 1);
    }
}
