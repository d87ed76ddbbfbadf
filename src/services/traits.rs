//! 外部协作者接口
//!
//! 文档读取、搜索抓取、报告渲染都通过这里的 trait 注入，测试时可替换为假实现

use crate::error::AppResult;
use crate::models::ReportModel;
use async_trait::async_trait;
use std::path::Path;

/// 搜索结果页中与答案相关的三个片段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedPage {
    /// 第一个自然搜索结果链接
    pub first_link: Option<String>,
    /// 精选答案片段
    pub featured_answer: Option<String>,
    /// 描述性摘要片段
    pub snippet: Option<String>,
}

/// 读取文档第一页的纯文本
pub trait DocumentTextExtractor: Send + Sync {
    fn first_page_text(&self, path: &Path) -> AppResult<String>;
}

/// 按查询抓取并解析搜索结果页
///
/// 瞬时失败（连接、超时、状态码）必须返回 `AppError::Fetch`
#[async_trait]
pub trait SearchScraper: Send + Sync {
    async fn scrape(&self, query: &str) -> AppResult<ScrapedPage>;

    /// 结束抓取，释放会话
    fn close(self: Box<Self>) {}
}

/// 报告渲染器，每种输出格式一个实现
pub trait ReportRenderer: Send + Sync {
    fn render(&self, path: &Path, header: &str, report: &ReportModel) -> AppResult<()>;
}
