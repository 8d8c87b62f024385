//! Renderer Port - 页面渲染抽象
//!
//! 控制器只通过该接口修改页面，与具体 UI 技术无关

/// Renderer Port
///
/// 页面上同一时刻最多展示一张图片
pub trait RendererPort {
    /// 展示图片（替换已有图片）
    fn show_image(&mut self, url: &str, alt: &str);

    /// 移除当前图片
    fn clear_image(&mut self);

    /// 展示文本框表单，每个文本框对应一个区域
    fn show_caption_form(&mut self, count: usize);

    /// 移除文本框表单
    fn clear_caption_form(&mut self);

    /// 展示错误信息
    fn show_error(&mut self, message: &str);

    /// 清空错误信息
    fn clear_error(&mut self);
}
