//! Meme Api Port - 外部配图服务抽象
//!
//! 定义模板列表与配图接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::meme::{CaptionSet, CaptionedImage, Template, TemplateId};

/// 配图服务错误
#[derive(Debug, Error)]
pub enum MemeApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    StatusError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// 配图请求
#[derive(Debug, Clone)]
pub struct CaptionRequest {
    pub template_id: TemplateId,
    pub captions: CaptionSet,
}

/// Meme Api Port
#[async_trait]
pub trait MemeApiPort: Send + Sync {
    /// 获取所有可用模板
    async fn list_templates(&self) -> Result<Vec<Template>, MemeApiError>;

    /// 为模板配上文字，返回生成的图片
    async fn caption_image(&self, request: CaptionRequest) -> Result<CaptionedImage, MemeApiError>;
}
