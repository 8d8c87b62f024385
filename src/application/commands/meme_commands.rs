//! Meme Commands - 模板与配图命令

use crate::application::controller::{SubmitOutcome, TemplateOutcome};

/// 获取新模板命令
#[derive(Debug, Clone, Default)]
pub struct RequestNewTemplateCommand {
    /// 浏览器携带的会话 ID，缺失或未知时新建会话
    pub session_id: Option<String>,
}

/// 获取新模板响应
#[derive(Debug, Clone)]
pub struct RequestNewTemplateResponse {
    pub session_id: String,
    pub outcome: TemplateOutcome,
}

/// 提交文本框内容命令
#[derive(Debug, Clone, Default)]
pub struct SubmitCaptionsCommand {
    pub session_id: Option<String>,
    /// 按区域顺序排列的输入内容
    pub captions: Vec<String>,
}

/// 提交文本框内容响应
#[derive(Debug, Clone)]
pub struct SubmitCaptionsResponse {
    pub session_id: String,
    pub outcome: SubmitOutcome,
}
