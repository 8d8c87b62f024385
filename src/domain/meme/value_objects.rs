//! Meme Context - Value Objects

use serde::{Deserialize, Serialize};

use super::MemeError;

/// 单个文本框允许的最大字符数
pub const MAX_CAPTION_LENGTH: usize = 45;

/// 配图接口一次最多接受的文本框数量（外部服务协议限制）
pub const MAX_CAPTION_BOXES: usize = 20;

/// 模板唯一标识（由外部服务分配）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文本框内容集合
///
/// 不变量:
/// - 条目数与模板的文本框数量一致，按区域顺序排列
/// - 每条内容非空，且不超过 `MAX_CAPTION_LENGTH` 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionSet(Vec<String>);

impl CaptionSet {
    /// 从用户输入构建
    ///
    /// 超长内容截断到前 `MAX_CAPTION_LENGTH` 个字符；
    /// 输入数量不足或任一输入为空时返回错误（调用方应静默跳过提交）
    pub fn from_inputs(inputs: Vec<String>, region_count: usize) -> Result<Self, MemeError> {
        if inputs.len() != region_count {
            return Err(MemeError::RegionMismatch {
                expected: region_count,
                actual: inputs.len(),
            });
        }

        if let Some(index) = inputs.iter().position(|text| text.is_empty()) {
            return Err(MemeError::EmptyCaption(index));
        }

        let captions = inputs
            .into_iter()
            .map(|text| {
                if text.chars().count() > MAX_CAPTION_LENGTH {
                    text.chars().take(MAX_CAPTION_LENGTH).collect()
                } else {
                    text
                }
            })
            .collect();

        Ok(Self(captions))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 实际发送给外部服务的文本框（第 20 个之后的内容被丢弃）
    pub fn boxes(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0
            .iter()
            .take(MAX_CAPTION_BOXES)
            .map(String::as_str)
            .enumerate()
    }
}
