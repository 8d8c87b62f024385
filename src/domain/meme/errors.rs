//! Meme Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemeError {
    #[error("模板列表为空")]
    NoTemplates,

    #[error("第 {0} 个文本框为空")]
    EmptyCaption(usize),

    #[error("文本框数量不匹配: 期望 {expected}, 实际 {actual}")]
    RegionMismatch { expected: usize, actual: usize },
}
