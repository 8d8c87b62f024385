//! Page Rendering
//!
//! 把 PageView 渲染成 HTML（tinytemplate 默认对所有值做 HTML 转义）

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::application::view::{ImageView, PageView};

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");

#[derive(Serialize)]
struct InputContext<'a> {
    value: &'a str,
    max_length: usize,
}

#[derive(Serialize)]
struct CaptionFormContext<'a> {
    inputs: Vec<InputContext<'a>>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    image: Option<&'a ImageView>,
    caption_form: Option<CaptionFormContext<'a>>,
    error: Option<&'a str>,
}

impl<'a> From<&'a PageView> for PageContext<'a> {
    fn from(view: &'a PageView) -> Self {
        let caption_form = view.caption_form().map(|form| CaptionFormContext {
            inputs: form
                .inputs
                .iter()
                .map(|input| InputContext {
                    value: &input.value,
                    max_length: form.max_length,
                })
                .collect(),
        });

        Self {
            image: view.image(),
            caption_form,
            error: view.error(),
        }
    }
}

/// 渲染首页
pub fn render_page(view: &PageView) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("index.html", INDEX_TEMPLATE)?;
    tt.render("index.html", &PageContext::from(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RendererPort;

    #[test]
    fn test_empty_page() {
        let html = render_page(&PageView::new()).unwrap();
        assert!(html.contains("action=\"/generate\""));
        assert!(!html.contains("<img"));
        assert!(!html.contains("add caption text"));
    }

    #[test]
    fn test_page_with_template() {
        let mut view = PageView::new();
        view.show_image("http://x/1.png", "Drake");
        view.show_caption_form(2);

        let html = render_page(&view).unwrap();
        assert!(html.contains("<img"));
        assert!(html.contains("alt=\"Drake\""));
        assert!(html.contains("add caption text"));
        assert_eq!(html.matches("name=\"caption\"").count(), 2);
        assert_eq!(html.matches("maxlength=\"45\"").count(), 2);
        assert!(html.contains("Add text!"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut view = PageView::new();
        view.show_caption_form(1);
        view.fill_captions(&["<script>".to_string()]);
        view.show_error("a < b");

        let html = render_page(&view).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &lt; b"));
    }
}
