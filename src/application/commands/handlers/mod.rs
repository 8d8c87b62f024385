//! Command Handlers

mod meme_command_handlers;

pub use meme_command_handlers::{RequestNewTemplateHandler, SubmitCaptionsHandler};
