//! Meme Session Controller
//!
//! 编排 "获取模板列表 -> 随机选择 -> 展示文本框 -> 提交文字 -> 展示配图"，
//! 所有失败都在这里被吸收并转换为同一条用户可见提示

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CaptionRequest, IndexPicker, MemeApiPort, RendererPort};
use crate::domain::meme::{CaptionSet, CaptionedImage, MemeError, Template};
use crate::domain::session::MemeSession;

/// 唯一的用户可见错误提示
pub const GENERATION_FAILED_MESSAGE: &str = "Image couldn't be generated! Please try again";

/// 获取模板的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    Shown(Template),
    Failed,
}

/// 跳过提交的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 当前没有可提交的模板
    NoTemplate,
    /// 有文本框为空
    Incomplete,
}

/// 提交文字的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Captioned(CaptionedImage),
    Skipped(SkipReason),
    Failed,
}

/// Meme Session Controller
///
/// 不持有会话状态；会话与页面由调用方传入
pub struct MemeSessionController {
    api: Arc<dyn MemeApiPort>,
    picker: Arc<dyn IndexPicker>,
}

impl MemeSessionController {
    pub fn new(api: Arc<dyn MemeApiPort>, picker: Arc<dyn IndexPicker>) -> Self {
        Self { api, picker }
    }

    /// 获取模板列表并随机展示一个模板
    pub async fn request_new_template<R>(
        &self,
        session: &mut MemeSession,
        renderer: &mut R,
    ) -> TemplateOutcome
    where
        R: RendererPort + Send,
    {
        renderer.clear_error();
        session.begin_template_load();

        let result = match self.fetch_random_template().await {
            Ok(template) => session
                .template_loaded(template.clone())
                .map(|_| template)
                .map_err(ApplicationError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(template) => {
                tracing::info!(
                    template_id = %template.id(),
                    name = %template.name(),
                    box_count = template.box_count(),
                    "Template selected"
                );
                self.render_template_preview(&template, renderer);
                renderer.show_caption_form(template.box_count());
                TemplateOutcome::Shown(template)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Template request failed");
                self.render_failure(session, renderer);
                TemplateOutcome::Failed
            }
        }
    }

    /// 提交文本框内容，生成配图
    ///
    /// 任一文本框为空时不发送请求，也不展示错误
    pub async fn submit_captions<R>(
        &self,
        session: &mut MemeSession,
        inputs: Vec<String>,
        renderer: &mut R,
    ) -> SubmitOutcome
    where
        R: RendererPort + Send,
    {
        let region_count = match session.selected() {
            Some(template) if session.can_submit() => template.box_count(),
            _ => {
                tracing::debug!(state = %session.state(), "No template to caption, skipping");
                return SubmitOutcome::Skipped(SkipReason::NoTemplate);
            }
        };

        let captions = match CaptionSet::from_inputs(inputs, region_count) {
            Ok(captions) => captions,
            Err(e) => {
                tracing::debug!(reason = %e, "Captions incomplete, skipping");
                return SubmitOutcome::Skipped(SkipReason::Incomplete);
            }
        };

        renderer.clear_error();
        let template = match session.begin_captions() {
            Ok(template) => template,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot start caption request");
                return SubmitOutcome::Skipped(SkipReason::NoTemplate);
            }
        };

        // 请求发出前先移除当前图片；请求失败时页面上不再有图片
        renderer.clear_image();

        tracing::debug!(
            template_id = %template.id(),
            caption_count = captions.len(),
            "Sending caption request"
        );

        let request = CaptionRequest {
            template_id: template.id().clone(),
            captions,
        };

        let result = match self.api.caption_image(request).await {
            Ok(image) => session
                .captions_rendered()
                .map(|_| image)
                .map_err(ApplicationError::from),
            Err(e) => Err(ApplicationError::from(e)),
        };

        match result {
            Ok(image) => {
                tracing::info!(
                    template_id = %template.id(),
                    url = %image.url,
                    "Captioned image rendered"
                );
                self.render_captioned_result(&template, &image, renderer);
                SubmitOutcome::Captioned(image)
            }
            Err(e) => {
                tracing::warn!(template_id = %template.id(), error = %e, "Caption request failed");
                self.render_failure(session, renderer);
                SubmitOutcome::Failed
            }
        }
    }

    async fn fetch_random_template(&self) -> Result<Template, ApplicationError> {
        let mut templates = self.api.list_templates().await?;
        if templates.is_empty() {
            return Err(MemeError::NoTemplates.into());
        }

        let index = self.picker.pick(templates.len());
        if index >= templates.len() {
            return Err(ApplicationError::internal(format!(
                "Picked index {} out of range (len {})",
                index,
                templates.len()
            )));
        }

        tracing::debug!(count = templates.len(), index = index, "Template list fetched");
        Ok(templates.swap_remove(index))
    }

    fn render_template_preview<R: RendererPort>(&self, template: &Template, renderer: &mut R) {
        renderer.show_image(template.url(), template.name());
    }

    fn render_captioned_result<R: RendererPort>(
        &self,
        template: &Template,
        image: &CaptionedImage,
        renderer: &mut R,
    ) {
        renderer.show_image(&image.url, template.name());
    }

    fn render_failure<R: RendererPort>(&self, session: &mut MemeSession, renderer: &mut R) {
        if let Err(e) = session.fail() {
            tracing::error!(error = %e, "Session state out of sync");
        }
        renderer.clear_image();
        renderer.clear_caption_form();
        renderer.show_error(GENERATION_FAILED_MESSAGE);
    }
}
