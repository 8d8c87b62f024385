//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    RequestNewTemplateHandler, SubmitCaptionsHandler,
    // Query handlers
    GetPageHandler,
    // Controller & ports
    MemeSessionController, SessionStorePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_store: Arc<dyn SessionStorePort>,

    // ========== Command Handlers ==========
    pub request_new_template_handler: RequestNewTemplateHandler,
    pub submit_captions_handler: SubmitCaptionsHandler,

    // ========== Query Handlers ==========
    pub get_page_handler: GetPageHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        controller: Arc<MemeSessionController>,
    ) -> Self {
        Self {
            session_store: session_store.clone(),

            request_new_template_handler: RequestNewTemplateHandler::new(
                session_store.clone(),
                controller.clone(),
            ),
            submit_captions_handler: SubmitCaptionsHandler::new(
                session_store.clone(),
                controller,
            ),

            get_page_handler: GetPageHandler::new(session_store),
        }
    }
}
