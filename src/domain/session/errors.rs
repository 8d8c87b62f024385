//! Session Context - Errors

use thiserror::Error;

use super::SessionState;

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("状态 {from} 下不允许 {action}")]
    Invalid {
        from: SessionState,
        action: &'static str,
    },

    #[error("尚未选中模板")]
    NoTemplateSelected,
}
