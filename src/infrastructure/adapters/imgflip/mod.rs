//! Imgflip Adapter - 配图服务客户端实现

mod fake_imgflip_client;
mod http_imgflip_client;

pub use fake_imgflip_client::FakeImgflipClient;
pub use http_imgflip_client::*;
