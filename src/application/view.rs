//! Page View - 页面内存模型
//!
//! `RendererPort` 的纯数据实现，HTTP 层把它渲染成 HTML

use serde::Serialize;

use crate::application::ports::RendererPort;
use crate::domain::meme::MAX_CAPTION_LENGTH;

/// 页面上的图片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// 单个文本框
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptionInput {
    pub value: String,
}

/// 文本框表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionForm {
    pub inputs: Vec<CaptionInput>,
    pub max_length: usize,
}

/// 页面状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    image: Option<ImageView>,
    caption_form: Option<CaptionForm>,
    error: Option<String>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保留用户已输入的内容（与浏览器中文本框的行为一致）
    pub fn fill_captions(&mut self, values: &[String]) {
        if let Some(form) = self.caption_form.as_mut() {
            for (input, value) in form.inputs.iter_mut().zip(values) {
                input.value = value.chars().take(form.max_length).collect();
            }
        }
    }

    pub fn image(&self) -> Option<&ImageView> {
        self.image.as_ref()
    }

    pub fn caption_form(&self) -> Option<&CaptionForm> {
        self.caption_form.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl RendererPort for PageView {
    fn show_image(&mut self, url: &str, alt: &str) {
        self.image = Some(ImageView {
            url: url.to_string(),
            alt: alt.to_string(),
        });
    }

    fn clear_image(&mut self) {
        self.image = None;
    }

    fn show_caption_form(&mut self, count: usize) {
        self.caption_form = Some(CaptionForm {
            inputs: vec![CaptionInput::default(); count],
            max_length: MAX_CAPTION_LENGTH,
        });
    }

    fn clear_caption_form(&mut self) {
        self.caption_form = None;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}
