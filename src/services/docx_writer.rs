//! DOCX 报告写入 - 业务能力层

use crate::error::{AppError, AppResult};
use crate::models::{Answer, Confidence, ReportModel, LOW_CONFIDENCE_NOTE, NO_ANSWER_NOTE};
use crate::services::traits::ReportRenderer;
use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run, Style, StyleType};
use std::fs::File;
use std::path::Path;
use tracing::debug;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";
const RED: &str = "FF0000";
const ORANGE: &str = "FF9600";
const LINK_BLUE: &str = "0563C1";

/// DOCX 报告写入
///
/// 链接渲染为可点击的超链接，低置信度和无答案用不同颜色提示
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    fn build(&self, header: &str, report: &ReportModel) -> Docx {
        let mut docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(56),
            )
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(28)
                    .bold(),
            )
            .add_paragraph(
                Paragraph::new()
                    .style(TITLE_STYLE)
                    .add_run(Run::new().add_text(header)),
            );

        for entry in report.entries() {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .style(HEADING_STYLE)
                    .add_run(Run::new().add_text(&entry.label)),
            );

            if let Some(link) = &entry.record.link {
                docx = docx.add_paragraph(link_paragraph(link));
            }

            if let Some(answer) = &entry.record.answer {
                for paragraph in answer_paragraphs(answer) {
                    docx = docx.add_paragraph(paragraph);
                }
            }
        }

        docx
    }
}

impl ReportRenderer for DocxWriter {
    fn render(&self, path: &Path, header: &str, report: &ReportModel) -> AppResult<()> {
        debug!("写入 DOCX: {} ({} 节)", path.display(), report.len());

        let file = File::create(path).map_err(|e| AppError::render_failed(path, e))?;
        self.build(header, report)
            .build()
            .pack(file)
            .map_err(|e| AppError::render_failed(path, e))?;

        Ok(())
    }
}

fn link_paragraph(link: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text("Link: ").bold())
        .add_hyperlink(
            Hyperlink::new(link, HyperlinkType::External).add_run(
                Run::new()
                    .add_text(link)
                    .color(LINK_BLUE)
                    .underline("single"),
            ),
        )
}

fn answer_paragraphs(answer: &Answer) -> Vec<Paragraph> {
    match answer.confidence {
        Confidence::NotFound => vec![Paragraph::new()
            .add_run(Run::new().add_text(NO_ANSWER_NOTE).color(RED))],
        Confidence::Snippet => vec![
            Paragraph::new().add_run(
                Run::new()
                    .add_text(&answer.text)
                    .add_break(BreakType::TextWrapping),
            ),
            Paragraph::new().add_run(Run::new().add_text(LOW_CONFIDENCE_NOTE).color(ORANGE)),
        ],
        Confidence::Direct => {
            vec![Paragraph::new().add_run(Run::new().add_text(&answer.text))]
        }
    }
}
