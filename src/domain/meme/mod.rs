//! Meme Context - 模板与配图限界上下文
//!
//! 职责:
//! - 模板元数据
//! - 文本框内容校验与截断
//! - 外部服务协议常量

mod entities;
mod errors;
mod value_objects;

pub use entities::{CaptionedImage, Template};
pub use errors::MemeError;
pub use value_objects::{CaptionSet, TemplateId, MAX_CAPTION_BOXES, MAX_CAPTION_LENGTH};
