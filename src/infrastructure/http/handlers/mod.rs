//! HTTP Handlers

mod meme;
mod ping;

pub use meme::*;
pub use ping::*;
