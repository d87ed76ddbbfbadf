use std::path::{Path, PathBuf};
use thiserror::Error;

/// 应用程序错误类型
///
/// 结构性错误（文档、路径、格式、未解析）立即终止；
/// 只有 `Fetch` 会触发重试策略。
#[derive(Debug, Error)]
pub enum AppError {
    /// 源文档无法读取，或者没有解析出任何题目
    #[error("无效的文档 ({path}): {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// 输入路径不是 PDF 文件
    #[error("无效的输入路径: {path} (需要 .pdf 文件)")]
    InvalidPath { path: PathBuf },

    /// 输出路径扩展名无法识别
    #[error("不支持的输出格式: {path} (仅支持 .pdf 和 .docx)")]
    UnsupportedFormat { path: PathBuf },

    /// 在解析答案之前请求生成报告
    #[error("没有可用的结果，请先执行答案解析")]
    NoResult,

    /// 搜索页面抓取成功但没有找到自然搜索结果链接
    #[error("未找到搜索结果链接 (查询: {query})")]
    LinkNotFound { query: String },

    /// 网络请求或页面解析失败（可重试）
    #[error("抓取失败 ({url}): {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 渲染器写文件失败
    #[error("写入报告失败 ({path}): {reason}")]
    Render { path: PathBuf, reason: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建抓取失败错误
    pub fn fetch_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Fetch {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// 创建文档无效错误
    pub fn invalid_document(path: &Path, reason: impl Into<String>) -> Self {
        AppError::InvalidDocument {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// 创建渲染失败错误
    pub fn render_failed(path: &Path, reason: impl std::fmt::Display) -> Self {
        AppError::Render {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// 是否属于可重试的瞬时错误
    ///
    /// 结果页缺少链接通常是同意页或验证码页，同样视为瞬时错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Fetch { .. } | AppError::LinkNotFound { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_and_missing_link_are_retryable() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
        assert!(AppError::fetch_failed("https://www.google.com/search", io).is_retryable());
        assert!(AppError::LinkNotFound {
            query: "What is a class in Java?".to_string()
        }
        .is_retryable());

        assert!(!AppError::NoResult.is_retryable());
        assert!(!AppError::InvalidPath {
            path: PathBuf::from("questions.txt")
        }
        .is_retryable());
        assert!(!AppError::invalid_document(Path::new("q.pdf"), "empty").is_retryable());
    }

    #[test]
    fn test_fetch_error_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::fetch_failed("https://www.google.com/search", io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("refused"));
    }
}
