//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod index_picker;
mod meme_api;
mod renderer;
mod session_store;

pub use index_picker::{IndexPicker, RandomPicker};
pub use meme_api::{CaptionRequest, MemeApiError, MemeApiPort};
pub use renderer::RendererPort;
pub use session_store::{OpenedSession, SessionSlot, SessionStorePort, SessionWorkspace};
