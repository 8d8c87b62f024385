//! Meme Context - Entities

use serde::{Deserialize, Serialize};

use super::TemplateId;

/// 模板 - 一张可配文字的底图
///
/// 获取后不可修改，整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    name: String,
    url: String,
    box_count: usize,
}

impl Template {
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        url: impl Into<String>,
        box_count: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            box_count,
        }
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 文本框区域数量
    pub fn box_count(&self) -> usize {
        self.box_count
    }
}

/// 配图结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionedImage {
    pub url: String,
    pub page_url: Option<String>,
}
