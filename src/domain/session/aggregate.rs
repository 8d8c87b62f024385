//! Session Context - Aggregate Root

use serde::Serialize;

use super::TransitionError;
use crate::domain::meme::Template;

/// 会话状态
///
/// ```text
/// Idle -> TemplateLoading -> TemplateShown -> CaptionsLoading -> ResultShown
///               |                                   |
///               +-------------> Error <-------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    TemplateLoading,
    TemplateShown,
    CaptionsLoading,
    ResultShown,
    Error,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TemplateLoading => "template_loading",
            Self::TemplateShown => "template_shown",
            Self::CaptionsLoading => "captions_loading",
            Self::ResultShown => "result_shown",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MemeSession 聚合根
///
/// 不变量:
/// - TemplateShown / CaptionsLoading / ResultShown 状态下必有选中模板
/// - Error 状态下没有选中模板，只能通过重新获取模板离开
/// - 选中模板只会被整体替换
#[derive(Debug, Clone)]
pub struct MemeSession {
    state: SessionState,
    selected: Option<Template>,
}

impl MemeSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            selected: None,
        }
    }

    /// 开始获取模板列表，任何状态下都允许
    pub fn begin_template_load(&mut self) {
        self.state = SessionState::TemplateLoading;
    }

    /// 模板已选中并展示
    pub fn template_loaded(&mut self, template: Template) -> Result<(), TransitionError> {
        self.expect(&[SessionState::TemplateLoading], "template_loaded")?;
        self.selected = Some(template);
        self.state = SessionState::TemplateShown;
        Ok(())
    }

    /// 是否可以提交文本框内容
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            SessionState::TemplateShown | SessionState::ResultShown
        ) && self.selected.is_some()
    }

    /// 开始提交文本框内容，返回当前选中模板
    pub fn begin_captions(&mut self) -> Result<Template, TransitionError> {
        self.expect(
            &[SessionState::TemplateShown, SessionState::ResultShown],
            "begin_captions",
        )?;
        let template = self
            .selected
            .clone()
            .ok_or(TransitionError::NoTemplateSelected)?;
        self.state = SessionState::CaptionsLoading;
        Ok(template)
    }

    /// 配图结果已展示
    pub fn captions_rendered(&mut self) -> Result<(), TransitionError> {
        self.expect(&[SessionState::CaptionsLoading], "captions_rendered")?;
        self.state = SessionState::ResultShown;
        Ok(())
    }

    /// 请求失败，清空选中模板
    pub fn fail(&mut self) -> Result<(), TransitionError> {
        self.expect(
            &[SessionState::TemplateLoading, SessionState::CaptionsLoading],
            "fail",
        )?;
        self.selected = None;
        self.state = SessionState::Error;
        Ok(())
    }

    fn expect(&self, allowed: &[SessionState], action: &'static str) -> Result<(), TransitionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(TransitionError::Invalid {
                from: self.state,
                action,
            })
        }
    }

    // Getters
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected(&self) -> Option<&Template> {
        self.selected.as_ref()
    }
}

impl Default for MemeSession {
    fn default() -> Self {
        Self::new()
    }
}
