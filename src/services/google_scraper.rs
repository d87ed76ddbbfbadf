//! 搜索抓取服务 - 业务能力层
//!
//! 只负责"查询一次并解析结果页"，不关心重试和流程

use crate::error::AppResult;
use crate::infrastructure::SearchSession;
use crate::services::traits::{ScrapedPage, SearchScraper};
use async_trait::async_trait;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 第一个自然搜索结果的链接
const LINK_SELECTOR: &str = "div.yuRUbf a[href]";
/// 精选答案
const FEATURED_ANSWER_SELECTOR: &str = "span.hgKElc";
/// 描述性摘要
const SNIPPET_SELECTOR: &str = "div.VwiC3b.yXK7lf.MUxGbd.yDYNvb.lyLwlc.lEBKkf";

/// Google 结果页抓取
///
/// 持有搜索会话，会话随抓取器一起释放
pub struct GoogleScraper {
    session: SearchSession,
}

impl GoogleScraper {
    pub fn new(session: SearchSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SearchScraper for GoogleScraper {
    async fn scrape(&self, query: &str) -> AppResult<ScrapedPage> {
        let html = self.session.fetch_results_page(query).await?;
        let page = parse_results_page(&html, self.session.search_url());
        debug!(
            "解析结果: 链接={:?} 精选答案={} 摘要={}",
            page.first_link,
            page.featured_answer.is_some(),
            page.snippet.is_some()
        );
        Ok(page)
    }

    fn close(self: Box<Self>) {
        self.session.close();
    }
}

/// 解析结果页 HTML
///
/// `base_url` 用于补全相对链接（如 `/url?q=...`）
pub fn parse_results_page(html: &str, base_url: &str) -> ScrapedPage {
    let document = Html::parse_document(html);

    let first_link = select_first(&document, LINK_SELECTOR)
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| normalize_href(href.trim(), base_url));

    let featured_answer = select_first(&document, FEATURED_ANSWER_SELECTOR)
        .map(text_content)
        .filter(|s| !s.is_empty());

    let snippet = select_first(&document, SNIPPET_SELECTOR)
        .map(text_content)
        .filter(|s| !s.is_empty());

    ScrapedPage {
        first_link,
        featured_answer,
        snippet,
    }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let Ok(sel) = Selector::parse(selector) else {
        return None;
    };
    document.select(&sel).next()
}

fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 把结果链接转换成最终 URL
///
/// - 绝对链接原样返回
/// - `/url?q=<target>` 取出 q 参数
/// - 其他相对链接按 base_url 补全
fn normalize_href(href: &str, base_url: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    let base = Url::parse(base_url).ok()?;
    let joined = base.join(href).ok()?;

    if joined.path() == "/url" {
        if let Some((_, target)) = joined
            .query_pairs()
            .find(|(k, _)| k == "q" || k == "url")
        {
            if target.starts_with("http://") || target.starts_with("https://") {
                return Some(target.into_owned());
            }
        }
    }

    Some(joined.to_string())
}
