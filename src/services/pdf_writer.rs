//! PDF 报告写入 - 业务能力层
//!
//! 使用 PDF 内置字体（Helvetica），只支持 Latin-1 字符

use crate::error::{AppError, AppResult};
use crate::models::{Confidence, ReportModel, LOW_CONFIDENCE_NOTE, NO_ANSWER_NOTE};
use crate::services::traits::ReportRenderer;
use printpdf::{
    Actions, BorderArray, BuiltinFont, Color, ColorArray, IndirectFontRef, LinkAnnotation, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Rect, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 7.0;
const BODY_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 13.0;
const TITLE_SIZE: f32 = 16.0;
/// Helvetica 12pt 在 180mm 行宽下大约能放下的字符数
const BODY_LINE_CHARS: usize = 90;
const HEADING_LINE_CHARS: usize = 80;

/// PDF 报告写入
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfWriter;

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for PdfWriter {
    fn render(&self, path: &Path, header: &str, report: &ReportModel) -> AppResult<()> {
        debug!("写入 PDF: {} ({} 节)", path.display(), report.len());

        let (doc, page, layer) =
            PdfDocument::new(header, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let fonts = Fonts::load(&doc).map_err(|e| AppError::render_failed(path, e))?;
        let mut cursor = PageCursor::new(&doc, layer);

        for block in layout(header, report) {
            match block {
                Block::Title(text) => cursor.centered(&text, &fonts.regular, TITLE_SIZE),
                Block::Heading(text) => {
                    cursor.paragraph(&text, &fonts.bold, HEADING_SIZE, HEADING_LINE_CHARS, BLACK)
                }
                Block::Link(url) => cursor.link(&url, &fonts),
                Block::Body { text, color } => {
                    cursor.paragraph(&text, &fonts.regular, BODY_SIZE, BODY_LINE_CHARS, color)
                }
            }
        }

        let file = File::create(path).map_err(|e| AppError::render_failed(path, e))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| AppError::render_failed(path, e))?;

        Ok(())
    }
}

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const RED: (f32, f32, f32) = (1.0, 0.0, 0.0);
const ORANGE: (f32, f32, f32) = (1.0, 150.0 / 255.0, 0.0);
const LINK_LABEL: &str = "Link: ";

/// 报告中的一个排版块
#[derive(Debug, Clone, PartialEq)]
enum Block {
    Title(String),
    Heading(String),
    Link(String),
    Body {
        text: String,
        color: (f32, f32, f32),
    },
}

/// 把报告展开成排版块：标题，然后每节 标题 → 链接 → 答案/提示
fn layout(header: &str, report: &ReportModel) -> Vec<Block> {
    let mut blocks = vec![Block::Title(header.to_string())];

    for entry in report.entries() {
        blocks.push(Block::Heading(entry.label.clone()));

        if let Some(link) = &entry.record.link {
            blocks.push(Block::Link(link.clone()));
        }

        let Some(answer) = &entry.record.answer else {
            continue;
        };
        let body = |text: &str, color| Block::Body {
            text: text.to_string(),
            color,
        };
        match answer.confidence {
            Confidence::NotFound => blocks.push(body(NO_ANSWER_NOTE, RED)),
            Confidence::Snippet => {
                blocks.push(body(&answer.text, BLACK));
                blocks.push(body(LOW_CONFIDENCE_NOTE, ORANGE));
            }
            Confidence::Direct => blocks.push(body(&answer.text, BLACK)),
        }
    }

    blocks
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, printpdf::Error> {
        Ok(Self {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
            italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
        })
    }
}

/// 从上往下写行，写满一页自动换页
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn next_line(&mut self) {
        self.y -= LINE_HEIGHT;
        if self.y < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT;
        }
    }

    fn centered(&mut self, text: &str, font: &IndirectFontRef, size: f32) {
        let text = to_latin1(text);
        let x = ((PAGE_WIDTH - text_width(&text, size)) / 2.0).max(MARGIN);
        self.next_line();
        self.layer.set_fill_color(rgb(BLACK));
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        self.next_line();
    }

    fn paragraph(
        &mut self,
        text: &str,
        font: &IndirectFontRef,
        size: f32,
        max_chars: usize,
        color: (f32, f32, f32),
    ) {
        for line in wrap_text(&to_latin1(text), max_chars) {
            self.next_line();
            self.layer.set_fill_color(rgb(color));
            self.layer.use_text(line, size, Mm(MARGIN), Mm(self.y), font);
        }
    }

    /// 粗体 "Link: " 标签 + 斜体 URL，URL 每一行都覆盖一个可点击的链接注释
    fn link(&mut self, url: &str, fonts: &Fonts) {
        let url = to_latin1(url);
        let label_width = text_width(LINK_LABEL, BODY_SIZE);
        let max_chars = BODY_LINE_CHARS - LINK_LABEL.len();

        for (i, line) in wrap_text(&url, max_chars).into_iter().enumerate() {
            self.next_line();
            self.layer.set_fill_color(rgb(BLACK));
            if i == 0 {
                self.layer
                    .use_text(LINK_LABEL, BODY_SIZE, Mm(MARGIN), Mm(self.y), &fonts.bold);
            }

            let x = MARGIN + label_width;
            let width = text_width(&line, BODY_SIZE);
            self.layer
                .use_text(line, BODY_SIZE, Mm(x), Mm(self.y), &fonts.italic);
            self.layer.add_link_annotation(LinkAnnotation::new(
                Rect::new(
                    Mm(x),
                    Mm(self.y - 1.0),
                    Mm(x + width),
                    Mm(self.y + BODY_SIZE * PT_TO_MM),
                ),
                Some(BorderArray::Solid([0.0, 0.0, 0.0])),
                Some(ColorArray::Transparent),
                Actions::uri(url.clone()),
                None,
            ));
        }
    }
}

/// 1pt = 0.3528mm
const PT_TO_MM: f32 = 0.3528;

/// Helvetica 平均字宽约 0.5em
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// 内置字体无法显示的字符替换为 '?'
fn to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

/// 按单词折行，单个超长单词强制截断
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(max_chars).collect();
            word = word.chars().skip(max_chars).collect();
            lines.push(head);
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, AnswerRecord, QuestionItem};

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap_text("short", 80), vec!["short"]);
        assert_eq!(wrap_text("", 80), vec![""]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(
            wrap_text("https://example.com/very/long/path more", 10),
            vec!["https://ex", "ample.com/", "very/long/", "path more"]
        );
    }

    #[test]
    fn test_to_latin1_replaces_unsupported_chars() {
        assert_eq!(to_latin1("café → λ"), "café ? ?");
    }

    fn sample_report() -> ReportModel {
        let mut report = ReportModel::new();
        report.push(
            &QuestionItem::new(1, "What is a class?"),
            AnswerRecord::new("https://a.test/class", Some(Answer::direct("A blueprint."))),
        );
        report.push(
            &QuestionItem::new(2, "What is an interface?"),
            AnswerRecord::new(
                "https://a.test/interface",
                Some(Answer::snippet("A contract")),
            ),
        );
        report.push(
            &QuestionItem::new(3, "What is a lambda?"),
            AnswerRecord::new("https://a.test/lambda", Some(Answer::not_found())),
        );
        report.push(
            &QuestionItem::new(4, "What is a record?"),
            AnswerRecord::new("https://a.test/record", None),
        );
        report
    }

    fn heading(text: &str) -> Block {
        Block::Heading(text.to_string())
    }

    fn link(url: &str) -> Block {
        Block::Link(url.to_string())
    }

    fn body(text: &str, color: (f32, f32, f32)) -> Block {
        Block::Body {
            text: text.to_string(),
            color,
        }
    }

    #[test]
    fn test_layout_sections_by_confidence() {
        let blocks = layout("Answers", &sample_report());

        assert_eq!(
            blocks,
            vec![
                Block::Title("Answers".to_string()),
                heading("1. What is a class?"),
                link("https://a.test/class"),
                body("A blueprint.", BLACK),
                heading("2. What is an interface?"),
                link("https://a.test/interface"),
                body("A contract", BLACK),
                body(LOW_CONFIDENCE_NOTE, ORANGE),
                heading("3. What is a lambda?"),
                link("https://a.test/lambda"),
                body(NO_ANSWER_NOTE, RED),
                heading("4. What is a record?"),
                link("https://a.test/record"),
            ]
        );
    }

    /// 读回 PDF 中所有链接注释的 URI
    fn link_uris(bytes: &[u8]) -> Vec<String> {
        let doc = printpdf::lopdf::Document::load_mem(bytes).unwrap();
        let mut uris = Vec::new();
        for page_id in doc.get_pages().values() {
            let page = doc.get_dictionary(*page_id).unwrap();
            let Ok(annots) = page.get(b"Annots").and_then(|a| a.as_array()) else {
                continue;
            };
            for annot in annots {
                let dict = doc.get_dictionary(annot.as_reference().unwrap()).unwrap();
                let uri = dict
                    .get(b"A")
                    .and_then(|a| a.as_dict())
                    .and_then(|a| a.get(b"URI"))
                    .and_then(|u| u.as_str())
                    .unwrap();
                uris.push(String::from_utf8_lossy(uri).into_owned());
            }
        }
        uris.sort();
        uris
    }

    #[test]
    fn test_links_are_clickable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.pdf");

        PdfWriter::new()
            .render(&path, "Answers", &sample_report())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(
            link_uris(&bytes),
            vec![
                "https://a.test/class",
                "https://a.test/interface",
                "https://a.test/lambda",
                "https://a.test/record",
            ]
        );
    }

    #[test]
    fn test_render_writes_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.pdf");

        let mut report = ReportModel::new();
        for i in 1..=40 {
            let answer = match i % 3 {
                0 => Answer::direct("A class is a blueprint for objects."),
                1 => Answer::snippet("Objects have state and behavior"),
                _ => Answer::not_found(),
            };
            report.push(
                &QuestionItem::new(i, format!("Question number {}?", i)),
                AnswerRecord::new("https://docs.oracle.com/javase/tutorial/", Some(answer)),
            );
        }

        PdfWriter::new()
            .render(&path, "Answers OOP Lecture 3", &report)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
