//! HTML page rendering.

use crate::markup;
use crate::model::{ContentItem, DocumentMeta};

use super::footer::{render_footer_links, FooterLink};
use super::kind::display_date;
use super::RenderOptions;

const PAGE_CSS: &str = include_str!("assets/page.css");
const PAGE_JS: &str = include_str!("assets/page.js");

/// Indentation of content lines inside the article element.
const CONTENT_INDENT: &str = "        ";

/// Render a complete page.
pub fn to_html(
    items: &[ContentItem],
    meta: &DocumentMeta,
    footer: &[FooterLink],
    options: &RenderOptions,
) -> String {
    HtmlRenderer::new(options.clone()).render(items, meta, footer)
}

/// HTML page renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render items, header and footer into a self-contained page.
    pub fn render(&self, items: &[ContentItem], meta: &DocumentMeta, footer: &[FooterLink]) -> String {
        let title = markup::text(&meta.title);
        let date = markup::text(&display_date(
            meta.effective_date.as_deref(),
            self.options.today(),
        ));

        let mut output = String::with_capacity(PAGE_CSS.len() + 4096);
        self.render_head(&mut output, &title);
        render_header(&mut output, &title, &date);

        output.push_str("    <main class=\"main-content\">\n");
        output.push_str("      <article class=\"content-card\">\n");
        output.push_str(&render_items(items));
        output.push_str("      </article>\n");
        output.push_str("    </main>\n\n");

        self.render_footer(&mut output, footer);
        render_script(&mut output);
        output
    }

    fn render_head(&self, output: &mut String, title: &str) {
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\">\n",
            markup::attribute(&self.options.lang)
        ));
        output.push_str("<head>\n");
        output.push_str("  <meta charset=\"UTF-8\">\n");
        output.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no, viewport-fit=cover\">\n");
        output.push_str("  <meta name=\"format-detection\" content=\"telephone=no, email=no\">\n");
        output.push_str("  <meta name=\"apple-mobile-web-app-capable\" content=\"yes\">\n");
        output.push_str("  <meta name=\"apple-mobile-web-app-status-bar-style\" content=\"black-translucent\">\n");
        output.push_str(&format!("  <title>{}</title>\n", title));
        output.push_str("  <style>\n");
        output.push_str(PAGE_CSS);
        output.push_str("  </style>\n");
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str("  <div class=\"page-wrapper\">\n");
    }

    fn render_footer(&self, output: &mut String, links: &[FooterLink]) {
        output.push_str("    <footer class=\"footer\">\n");
        output.push_str("      <div class=\"footer-content\">\n");
        output.push_str("        <nav class=\"footer-links\">\n");
        output.push_str(&render_footer_links(links));
        output.push_str("        </nav>\n");
        output.push_str(&format!(
            "        <p class=\"footer-copyright\">{}</p>\n",
            markup::text(&self.options.copyright)
        ));
        output.push_str("      </div>\n");
        output.push_str("    </footer>\n\n");
        output.push_str(
            "    <button class=\"back-top\" id=\"backTop\" aria-label=\"返回顶部\">▲</button>\n",
        );
        output.push_str("  </div>\n\n");
    }
}

fn render_header(output: &mut String, title: &str, date: &str) {
    output.push_str("    <header class=\"header\">\n");
    output.push_str("      <div class=\"header-content\">\n");
    output.push_str(&format!("        <h1 class=\"header-title\">{}</h1>\n", title));
    output.push_str(&format!(
        "        <p class=\"header-subtitle\">生效日期：{}</p>\n",
        date
    ));
    output.push_str("      </div>\n");
    output.push_str("    </header>\n\n");
}

fn render_script(output: &mut String) {
    output.push_str("  <script>\n");
    for line in PAGE_JS.lines() {
        if line.is_empty() {
            output.push('\n');
        } else {
            output.push_str("    ");
            output.push_str(line);
            output.push('\n');
        }
    }
    output.push_str("  </script>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");
}

/// Serialize content items, one element per line.
///
/// Levels 1..=6 become `<h1>`..`<h6>`, anything else `<p>`; tables are
/// inserted verbatim.
pub fn render_items(items: &[ContentItem]) -> String {
    let mut output = String::new();
    for item in items {
        output.push_str(CONTENT_INDENT);
        match item {
            ContentItem::Table { rendered_markup } => output.push_str(rendered_markup),
            ContentItem::Paragraph {
                formatted_text,
                heading_level,
                ..
            } => {
                let tag = match heading_level {
                    1..=6 => format!("h{}", heading_level),
                    _ => "p".to_string(),
                };
                output.push_str(&format!("<{tag}>{formatted_text}</{tag}>"));
            }
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::kind::DocumentKind;
    use chrono::NaiveDate;

    fn options() -> RenderOptions {
        RenderOptions::new().with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_render_items_tags() {
        let items = vec![
            ContentItem::paragraph("大标题", "大标题", "Heading 1", 1),
            ContentItem::paragraph("一、总则", "一、总则", "Normal", 2),
            ContentItem::paragraph("1、注册", "1、注册", "Normal", 3),
            ContentItem::paragraph("<strong>正文</strong>。", "正文。", "Normal", 0),
            ContentItem::paragraph("六级", "六级", "Heading 6", 6),
            ContentItem::table("<div class=\"table-wrapper\">\n  <table>\n  </table>\n</div>"),
        ];
        let html = render_items(&items);
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines[0], "        <h1>大标题</h1>");
        assert_eq!(lines[1], "        <h2>一、总则</h2>");
        assert_eq!(lines[2], "        <h3>1、注册</h3>");
        assert_eq!(lines[3], "        <p><strong>正文</strong>。</p>");
        assert_eq!(lines[4], "        <h6>六级</h6>");
        assert_eq!(lines[5], "        <div class=\"table-wrapper\">");
    }

    #[test]
    fn test_page_header_and_footer() {
        let meta = DocumentMeta {
            title: "隐私政策 <v2>".into(),
            effective_date: Some("2026年1月1日".into()),
        };
        let footer = vec![FooterLink {
            kind: DocumentKind::UserAgreement,
            file_name: "user-agreement-20260101.html".into(),
        }];
        let html = to_html(&[], &meta, &footer, &options());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"zh-CN\">"));
        assert!(html.contains("<title>隐私政策 &lt;v2&gt;</title>"));
        assert!(html.contains("<h1 class=\"header-title\">隐私政策 &lt;v2&gt;</h1>"));
        assert!(html.contains("<p class=\"header-subtitle\">生效日期：2026年1月1日</p>"));
        assert!(html.contains("<a href=\"./user-agreement-20260101.html\">用户协议</a>"));
        assert!(html.contains("上海东桓文化科技有限公司 © 2026"));
        assert!(html.contains("id=\"backTop\""));
        assert!(html.contains("--primary-color: #E88A7A;"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_missing_date_shows_current_month() {
        let meta = DocumentMeta {
            title: "用户协议".into(),
            effective_date: None,
        };
        let html = to_html(&[], &meta, &[], &options());
        assert!(html.contains("生效日期：2026年10月1日"));
    }

    #[test]
    fn test_custom_copyright() {
        let meta = DocumentMeta::default();
        let html = to_html(&[], &meta, &[], &options().with_copyright("Acme © 2027"));
        assert!(html.contains("<p class=\"footer-copyright\">Acme © 2027</p>"));
    }
}
