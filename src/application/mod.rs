//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MemeApi、Renderer、SessionStore、IndexPicker）
//! - controller: Meme Session Controller
//! - view: 页面内存模型
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod controller;
pub mod error;
pub mod ports;
pub mod queries;
pub mod view;

// Re-exports
pub use commands::{
    handlers::{RequestNewTemplateHandler, SubmitCaptionsHandler},
    RequestNewTemplateCommand, RequestNewTemplateResponse, SubmitCaptionsCommand,
    SubmitCaptionsResponse,
};

pub use controller::{
    MemeSessionController, SkipReason, SubmitOutcome, TemplateOutcome, GENERATION_FAILED_MESSAGE,
};

pub use error::ApplicationError;

pub use ports::{
    // Meme api
    CaptionRequest,
    MemeApiError,
    MemeApiPort,
    // Index picker
    IndexPicker,
    RandomPicker,
    // Renderer
    RendererPort,
    // Session store
    OpenedSession,
    SessionSlot,
    SessionStorePort,
    SessionWorkspace,
};

pub use queries::{handlers::GetPageHandler, GetPageQuery, GetPageResponse};

pub use view::{CaptionForm, CaptionInput, ImageView, PageView};
