//! Meme Handlers
//!
//! 页面渲染 + 两个表单提交入口；提交后重定向回首页（PRG）

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::application::{GetPageQuery, RequestNewTemplateCommand, SubmitCaptionsCommand};
use crate::infrastructure::http::browser_session::BrowserSession;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::page::render_page;
use crate::infrastructure::http::state::AppState;

/// 文本框字段名（每个区域一个，按顺序重复出现）
const CAPTION_FIELD: &str = "caption";

// ============================================================================
// Page
// ============================================================================

pub async fn index(
    State(state): State<Arc<AppState>>,
    browser: BrowserSession,
) -> Result<Html<String>, ApiError> {
    let page = state
        .get_page_handler
        .handle(GetPageQuery {
            session_id: browser.workspace_id(),
        })
        .await;

    tracing::debug!(
        session_id = ?page.session_id,
        state = %page.state,
        "Rendering page"
    );

    Ok(Html(render_page(&page.view)?))
}

// ============================================================================
// Generate
// ============================================================================

pub async fn generate(
    State(state): State<Arc<AppState>>,
    browser: BrowserSession,
) -> Result<Redirect, ApiError> {
    let result = state
        .request_new_template_handler
        .handle(RequestNewTemplateCommand {
            session_id: browser.workspace_id(),
        })
        .await;

    browser.remember(&result.session_id).await?;
    Ok(Redirect::to("/"))
}

// ============================================================================
// Caption
// ============================================================================

pub async fn caption(
    State(state): State<Arc<AppState>>,
    browser: BrowserSession,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, ApiError> {
    let captions: Vec<String> = fields
        .into_iter()
        .filter(|(name, _)| name == CAPTION_FIELD)
        .map(|(_, value)| value)
        .collect();

    let result = state
        .submit_captions_handler
        .handle(SubmitCaptionsCommand {
            session_id: browser.workspace_id(),
            captions,
        })
        .await;

    browser.remember(&result.session_id).await?;
    Ok(Redirect::to("/"))
}
