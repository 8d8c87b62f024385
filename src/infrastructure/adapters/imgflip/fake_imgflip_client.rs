//! Fake Imgflip Client - 离线配图客户端
//!
//! 不访问网络，从内置模板列表中返回数据；配图结果直接返回模板原图

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{CaptionRequest, MemeApiError, MemeApiPort};
use crate::domain::meme::{CaptionedImage, Template, TemplateId};

/// Fake Imgflip Client
///
/// 用于离线演示和测试，可切换为失败模式
pub struct FakeImgflipClient {
    templates: Vec<Template>,
    fail_templates: AtomicBool,
    fail_captions: AtomicBool,
    /// 收到的配图请求（包括失败的）
    requests: Mutex<Vec<CaptionRequest>>,
}

impl FakeImgflipClient {
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            templates,
            fail_templates: AtomicBool::new(false),
            fail_captions: AtomicBool::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 使用内置模板创建
    pub fn with_defaults() -> Self {
        let templates = vec![
            Template::new(
                TemplateId::new("181913649"),
                "Drake Hotline Bling",
                "https://i.imgflip.com/30b1gx.jpg",
                2,
            ),
            Template::new(
                TemplateId::new("112126428"),
                "Distracted Boyfriend",
                "https://i.imgflip.com/1ur9b0.jpg",
                3,
            ),
            Template::new(
                TemplateId::new("87743020"),
                "Two Buttons",
                "https://i.imgflip.com/1g8my4.jpg",
                3,
            ),
        ];
        tracing::info!(count = templates.len(), "FakeImgflipClient initialized");
        Self::new(templates)
    }

    pub fn set_fail_templates(&self, fail: bool) {
        self.fail_templates.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_captions(&self, fail: bool) {
        self.fail_captions.store(fail, Ordering::SeqCst);
    }

    /// 已收到的配图请求
    pub fn caption_requests(&self) -> Vec<CaptionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MemeApiPort for FakeImgflipClient {
    async fn list_templates(&self) -> Result<Vec<Template>, MemeApiError> {
        if self.fail_templates.load(Ordering::SeqCst) {
            return Err(MemeApiError::StatusError {
                status: 500,
                body: "fake failure".to_string(),
            });
        }

        tracing::debug!(count = self.templates.len(), "FakeImgflipClient: returning templates");
        Ok(self.templates.clone())
    }

    async fn caption_image(&self, request: CaptionRequest) -> Result<CaptionedImage, MemeApiError> {
        let template_id = request.template_id.clone();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        if self.fail_captions.load(Ordering::SeqCst) {
            return Err(MemeApiError::StatusError {
                status: 500,
                body: "fake failure".to_string(),
            });
        }

        let template = self
            .templates
            .iter()
            .find(|t| t.id() == &template_id)
            .ok_or_else(|| MemeApiError::Rejected(format!("Unknown template: {}", template_id)))?;

        tracing::debug!(template_id = %template_id, "FakeImgflipClient: returning template image");

        Ok(CaptionedImage {
            url: template.url().to_string(),
            page_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meme::CaptionSet;

    #[tokio::test]
    async fn test_defaults_are_listed() {
        let client = FakeImgflipClient::with_defaults();
        let templates = client.list_templates().await.unwrap();
        assert_eq!(templates.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_template_rejected() {
        let client = FakeImgflipClient::with_defaults();
        let request = CaptionRequest {
            template_id: TemplateId::new("nope"),
            captions: CaptionSet::from_inputs(Vec::new(), 0).unwrap(),
        };
        let err = client.caption_image(request).await.unwrap_err();
        assert!(matches!(err, MemeApiError::Rejected(_)));
        assert_eq!(client.caption_requests().len(), 1);
    }
}
