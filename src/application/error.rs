//! 应用层错误定义
//!
//! 控制器内部使用的统一错误类型，不会直接暴露给用户

use thiserror::Error;

use crate::application::ports::MemeApiError;
use crate::domain::meme::MemeError;
use crate::domain::session::TransitionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<MemeApiError> for ApplicationError {
    fn from(err: MemeApiError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<MemeError> for ApplicationError {
    fn from(err: MemeError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<TransitionError> for ApplicationError {
    fn from(err: TransitionError) -> Self {
        Self::InvalidState(err.to_string())
    }
}
