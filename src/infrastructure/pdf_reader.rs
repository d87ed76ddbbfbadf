//! PDF 文本读取 - 基础设施层

use crate::error::{AppError, AppResult};
use crate::services::DocumentTextExtractor;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

/// 检查输入路径是否为 .pdf 文件
pub fn validate_input_path(path: &Path) -> AppResult<&Path> {
    let is_pdf = path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Ok(path)
    } else {
        Err(AppError::InvalidPath {
            path: path.to_path_buf(),
        })
    }
}

/// 基于 pdf-extract 的文本提取器，只读取第一页
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl DocumentTextExtractor for PdfTextExtractor {
    fn first_page_text(&self, path: &Path) -> AppResult<String> {
        if !path.exists() {
            return Err(AppError::invalid_document(path, "文件不存在"));
        }

        // pdf-extract 在部分结构损坏的文件上会 panic
        let result = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)));
        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                return Err(AppError::invalid_document(path, format!("PDF 解析失败: {:?}", e)));
            }
            Err(panic) => {
                let reason = panic_message(panic.as_ref());
                warn!("⚠️ 解析 {} 时发生 panic: {}", path.display(), reason);
                return Err(AppError::invalid_document(
                    path,
                    format!("PDF 解析失败: {}", reason),
                ));
            }
        };

        debug!("{} 共 {} 页，只读取第一页", path.display(), pages.len());

        pages
            .into_iter()
            .next()
            .ok_or_else(|| AppError::invalid_document(path, "PDF 没有任何页面"))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "未知错误".to_string()
    }
}
