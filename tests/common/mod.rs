//! Shared helpers: build small but real `.docx` archives in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builder for a minimal Word document.
pub struct DocxBuilder {
    body: String,
    styles: Vec<(&'static str, &'static str)>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            styles: vec![
                ("a", "Normal"),
                ("1", "heading 1"),
                ("2", "heading 2"),
                ("a7", "List Paragraph"),
            ],
        }
    }

    /// A paragraph with one plain run.
    pub fn paragraph(self, text: &str) -> Self {
        self.raw(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape(text)
        ))
    }

    /// A paragraph with a style id.
    pub fn styled(self, style_id: &str, text: &str) -> Self {
        self.raw(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            style_id,
            escape(text)
        ))
    }

    /// A paragraph with one bold run.
    pub fn bold(self, text: &str) -> Self {
        self.raw(&format!(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape(text)
        ))
    }

    /// An empty paragraph.
    pub fn blank(self) -> Self {
        self.raw("<w:p/>")
    }

    /// A table; the first row's cells are bold when `bold_header` is set.
    /// Body cells are always bold, so the renderer has something to drop.
    pub fn table(self, rows: &[&[&str]], bold_header: bool) -> Self {
        let mut xml = String::from("<w:tbl>");
        for (i, row) in rows.iter().enumerate() {
            xml.push_str("<w:tr>");
            for cell in row.iter() {
                let bold = if i > 0 || bold_header { "<w:rPr><w:b/></w:rPr>" } else { "" };
                xml.push_str(&format!(
                    r#"<w:tc><w:p><w:r>{}<w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                    bold,
                    escape(cell)
                ));
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
        self.raw(&xml)
    }

    /// Append raw body XML.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            self.body
        )
    }

    fn styles_xml(&self) -> String {
        let mut xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{W_NS}">"#
        );
        for (id, name) in &self.styles {
            let default = if *name == "Normal" { r#" w:default="1""# } else { "" };
            xml.push_str(&format!(
                r#"<w:style w:type="paragraph"{} w:styleId="{}"><w:name w:val="{}"/></w:style>"#,
                default, id, name
            ));
        }
        xml.push_str("</w:styles>");
        xml
    }

    /// Build the `.docx` bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("word/document.xml", self.document_xml()),
            ("word/styles.xml", self.styles_xml()),
        ] {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    /// Write the document into `dir` under `file_name`.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// A privacy policy exercising most extraction rules.
pub fn privacy_policy() -> DocxBuilder {
    DocxBuilder::new()
        .blank()
        .bold("儿童隐私保护政策")
        .paragraph("生效日期：2026年1月1日")
        .paragraph("【特别提示】请监护人仔细阅读本政策。")
        .paragraph("一、总则")
        .paragraph("本政策适用于不满十四周岁的儿童，请监护人仔细阅读。")
        .paragraph("2. 我们收集的信息")
        .paragraph("2.1 设备信息")
        .paragraph("1、注册账号时，我们会收集手机号。")
        .table(&[&["第三方名称", "共享目的"], &["微信支付", "完成支付"]], true)
        .paragraph("三、信息的存储")
        .paragraph("权限申请使用")
        .paragraph("联系我们")
}
