//! Meme Command Handlers
//!
//! 打开会话、持有会话锁并调用控制器。锁覆盖整个操作（包括外部请求），
//! 同一会话的请求按到达顺序串行执行

use std::sync::Arc;

use crate::application::commands::meme_commands::*;
use crate::application::controller::MemeSessionController;
use crate::application::ports::{SessionStorePort, SessionWorkspace};

/// RequestNewTemplate Handler
pub struct RequestNewTemplateHandler {
    session_store: Arc<dyn SessionStorePort>,
    controller: Arc<MemeSessionController>,
}

impl RequestNewTemplateHandler {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        controller: Arc<MemeSessionController>,
    ) -> Self {
        Self {
            session_store,
            controller,
        }
    }

    pub async fn handle(&self, cmd: RequestNewTemplateCommand) -> RequestNewTemplateResponse {
        let opened = self.session_store.open(cmd.session_id.as_deref());
        let mut workspace = opened.slot.lock().await;
        let SessionWorkspace { session, view } = &mut *workspace;

        let outcome = self.controller.request_new_template(session, view).await;

        tracing::debug!(
            session_id = %opened.id,
            created = opened.created,
            state = %session.state(),
            "RequestNewTemplate handled"
        );

        RequestNewTemplateResponse {
            session_id: opened.id,
            outcome,
        }
    }
}

/// SubmitCaptions Handler
pub struct SubmitCaptionsHandler {
    session_store: Arc<dyn SessionStorePort>,
    controller: Arc<MemeSessionController>,
}

impl SubmitCaptionsHandler {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        controller: Arc<MemeSessionController>,
    ) -> Self {
        Self {
            session_store,
            controller,
        }
    }

    pub async fn handle(&self, cmd: SubmitCaptionsCommand) -> SubmitCaptionsResponse {
        let opened = self.session_store.open(cmd.session_id.as_deref());
        let mut workspace = opened.slot.lock().await;
        let SessionWorkspace { session, view } = &mut *workspace;

        let outcome = self
            .controller
            .submit_captions(session, cmd.captions.clone(), view)
            .await;

        // 文本框保留用户输入
        view.fill_captions(&cmd.captions);

        tracing::debug!(
            session_id = %opened.id,
            created = opened.created,
            state = %session.state(),
            "SubmitCaptions handled"
        );

        SubmitCaptionsResponse {
            session_id: opened.id,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::application::controller::{SkipReason, SubmitOutcome, TemplateOutcome};
    use crate::application::ports::RandomPicker;
    use crate::domain::meme::{Template, TemplateId};
    use crate::domain::session::SessionState;
    use crate::infrastructure::adapters::FakeImgflipClient;
    use crate::infrastructure::memory::InMemorySessionStore;

    struct Fixture {
        store: Arc<InMemorySessionStore>,
        api: Arc<FakeImgflipClient>,
        new_template: RequestNewTemplateHandler,
        submit: Arc<SubmitCaptionsHandler>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemorySessionStore::new());
        let api = Arc::new(FakeImgflipClient::new(vec![Template::new(
            TemplateId::new("1"),
            "Drake",
            "http://x/1.png",
            2,
        )]));
        let controller = Arc::new(MemeSessionController::new(
            api.clone(),
            Arc::new(RandomPicker),
        ));
        Fixture {
            new_template: RequestNewTemplateHandler::new(store.clone(), controller.clone()),
            submit: Arc::new(SubmitCaptionsHandler::new(store.clone(), controller)),
            store,
            api,
        }
    }

    #[tokio::test]
    async fn test_request_creates_session() {
        let fx = fixture();
        let response = fx
            .new_template
            .handle(RequestNewTemplateCommand::default())
            .await;

        assert!(matches!(response.outcome, TemplateOutcome::Shown(_)));
        let slot = fx.store.find(&response.session_id).unwrap();
        let workspace = slot.lock().await;
        assert_eq!(workspace.session.state(), SessionState::TemplateShown);
        assert_eq!(workspace.view.caption_form().unwrap().inputs.len(), 2);
    }

    #[tokio::test]
    async fn test_submit_keeps_inputs_when_incomplete() {
        let fx = fixture();
        let session_id = fx
            .new_template
            .handle(RequestNewTemplateCommand::default())
            .await
            .session_id;

        let response = fx
            .submit
            .handle(SubmitCaptionsCommand {
                session_id: Some(session_id.clone()),
                captions: vec!["top text".to_string(), String::new()],
            })
            .await;

        assert_eq!(response.session_id, session_id);
        assert_eq!(response.outcome, SubmitOutcome::Skipped(SkipReason::Incomplete));
        assert!(fx.api.caption_requests().is_empty());

        let slot = fx.store.find(&session_id).unwrap();
        let workspace = slot.lock().await;
        assert_eq!(workspace.view.caption_form().unwrap().inputs[0].value, "top text");
    }

    #[tokio::test]
    async fn test_submit_on_fresh_session_is_noop() {
        let fx = fixture();
        let response = fx
            .submit
            .handle(SubmitCaptionsCommand {
                session_id: None,
                captions: vec!["a".to_string()],
            })
            .await;

        assert_eq!(response.outcome, SubmitOutcome::Skipped(SkipReason::NoTemplate));
        assert!(fx.api.caption_requests().is_empty());
    }

    #[tokio::test]
    async fn test_operations_on_same_session_are_serialized() {
        let fx = fixture();
        let session_id = fx
            .new_template
            .handle(RequestNewTemplateCommand::default())
            .await
            .session_id;

        let slot = fx.store.find(&session_id).unwrap();
        let guard = slot.lock().await;

        let submit = fx.submit.clone();
        let cmd = SubmitCaptionsCommand {
            session_id: Some(session_id.clone()),
            captions: vec!["top text".to_string(), "bottom text".to_string()],
        };
        let task = tokio::spawn(async move { submit.handle(cmd).await });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!task.is_finished());
        assert!(fx.api.caption_requests().is_empty());

        drop(guard);
        let response = task.await.unwrap();
        assert!(matches!(response.outcome, SubmitOutcome::Captioned(_)));
        assert_eq!(fx.api.caption_requests().len(), 1);
    }
}
