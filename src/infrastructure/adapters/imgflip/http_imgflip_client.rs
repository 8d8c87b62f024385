//! HTTP Imgflip Client - 调用 imgflip 配图服务
//!
//! 实现 MemeApiPort trait
//!
//! 外部 API:
//! GET  {base_url}/get_memes
//! Response: {"success": true, "data": {"memes": [{"id", "name", "url", "box_count", ...}]}}
//!
//! POST {base_url}/caption_image  (form-encoded)
//! Request: username, password, template_id, boxes[i][text]
//! Response: {"success": true, "data": {"url", "page_url"}}
//!           {"success": false, "error_message": "..."}

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{CaptionRequest, MemeApiError, MemeApiPort};
use crate::domain::meme::{CaptionedImage, Template, TemplateId};

/// 外部服务统一响应外壳
#[derive(Debug, Deserialize)]
struct ImgflipEnvelope<T> {
    success: bool,
    data: Option<T>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MemesData {
    memes: Vec<MemeDto>,
}

#[derive(Debug, Deserialize)]
struct MemeDto {
    id: String,
    name: String,
    url: String,
    box_count: usize,
}

#[derive(Debug, Deserialize)]
struct CaptionData {
    url: String,
    page_url: Option<String>,
}

/// HTTP Imgflip 客户端配置
#[derive(Clone)]
pub struct HttpImgflipClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 服务账号
    pub username: String,
    /// 服务密码
    pub password: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpImgflipClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.imgflip.com".to_string(),
            username: String::new(),
            password: String::new(),
            timeout_secs: 30,
        }
    }
}

impl HttpImgflipClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// 密码不进日志
impl std::fmt::Debug for HttpImgflipClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImgflipClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP Imgflip 客户端
pub struct HttpImgflipClient {
    client: Client,
    config: HttpImgflipClientConfig,
}

impl HttpImgflipClient {
    /// 创建新的客户端
    pub fn new(config: HttpImgflipClientConfig) -> Result<Self, MemeApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MemeApiError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn templates_url(&self) -> String {
        format!("{}/get_memes", self.config.base_url.trim_end_matches('/'))
    }

    fn caption_url(&self) -> String {
        format!("{}/caption_image", self.config.base_url.trim_end_matches('/'))
    }

    /// 构建配图请求表单
    ///
    /// 文本框最多 20 个，多余的被丢弃
    fn form_fields(&self, request: &CaptionRequest) -> Vec<(String, String)> {
        let mut fields = vec![
            ("username".to_string(), self.config.username.clone()),
            ("password".to_string(), self.config.password.clone()),
            (
                "template_id".to_string(),
                request.template_id.as_str().to_string(),
            ),
        ];
        fields.extend(
            request
                .captions
                .boxes()
                .map(|(i, text)| (format!("boxes[{}][text]", i), text.to_string())),
        );
        fields
    }

    /// 检查状态码并解析响应外壳
    async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, MemeApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemeApiError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ImgflipEnvelope<T> = response
            .json()
            .await
            .map_err(|e| MemeApiError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            return Err(MemeApiError::Rejected(
                envelope
                    .error_message
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| MemeApiError::InvalidResponse("missing data".to_string()))
    }
}

fn map_send_error(e: reqwest::Error) -> MemeApiError {
    if e.is_timeout() {
        MemeApiError::Timeout
    } else if e.is_connect() {
        MemeApiError::NetworkError(format!("Cannot connect to imgflip: {}", e))
    } else {
        MemeApiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl MemeApiPort for HttpImgflipClient {
    async fn list_templates(&self) -> Result<Vec<Template>, MemeApiError> {
        tracing::debug!(url = %self.templates_url(), "Fetching template list");

        let response = self
            .client
            .get(self.templates_url())
            .send()
            .await
            .map_err(map_send_error)?;

        let data: MemesData = Self::read_envelope(response).await?;

        tracing::debug!(count = data.memes.len(), "Template list received");

        Ok(data
            .memes
            .into_iter()
            .map(|m| Template::new(TemplateId::new(m.id), m.name, m.url, m.box_count))
            .collect())
    }

    async fn caption_image(&self, request: CaptionRequest) -> Result<CaptionedImage, MemeApiError> {
        let fields = self.form_fields(&request);

        tracing::debug!(
            url = %self.caption_url(),
            template_id = %request.template_id,
            box_count = fields.len() - 3,
            "Sending caption request"
        );

        let response = self
            .client
            .post(self.caption_url())
            .form(&fields)
            .send()
            .await
            .map_err(map_send_error)?;

        let data: CaptionData = Self::read_envelope(response).await?;

        Ok(CaptionedImage {
            url: data.url,
            page_url: data.page_url,
        })
    }
}
