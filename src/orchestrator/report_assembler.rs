//! 报告组装 - 编排层
//!
//! 只根据输出路径的扩展名选择渲染器，不关心具体排版

use crate::error::{AppError, AppResult};
use crate::models::ReportModel;
use crate::services::{DocxWriter, PdfWriter, ReportRenderer};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Pdf,
    Docx,
}

impl ReportFormat {
    /// 由文件扩展名决定格式（不区分大小写）
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => Ok(ReportFormat::Pdf),
            Some("docx") => Ok(ReportFormat::Docx),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// 报告组装器，按格式持有渲染器
pub struct ReportAssembler {
    renderers: HashMap<ReportFormat, Box<dyn ReportRenderer>>,
}

impl ReportAssembler {
    /// 不含任何渲染器
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn with_renderer(mut self, format: ReportFormat, renderer: Box<dyn ReportRenderer>) -> Self {
        self.renderers.insert(format, renderer);
        self
    }

    /// 写出报告
    ///
    /// # 错误
    /// - `NoResult`: 还没有解析结果
    /// - `UnsupportedFormat`: 扩展名无法识别（不会创建文件）
    pub fn assemble(
        &self,
        report: Option<&ReportModel>,
        path: &Path,
        header: &str,
    ) -> AppResult<()> {
        let report = report.ok_or(AppError::NoResult)?;
        let format = ReportFormat::from_path(path)?;
        let renderer = self
            .renderers
            .get(&format)
            .ok_or_else(|| AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        info!("📤 正在写入 {:?} 报告 ({} 道题目)...", format, report.len());
        renderer.render(path, header, report)?;
        info!("✓ Successfully wrote to {}", path.display());

        Ok(())
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::empty()
            .with_renderer(ReportFormat::Pdf, Box::new(PdfWriter::new()))
            .with_renderer(ReportFormat::Docx, Box::new(DocxWriter::new()))
    }
}
