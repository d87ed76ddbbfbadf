//! 答案解析流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 题干 → 查询语句
//! 2. 抓取搜索页并取第一个自然结果链接（固定间隔重试）
//! 3. 重试用尽仍没有链接则失败
//! 4. 精选答案 → 摘要 → "No answer found"

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Answer, AnswerRecord, QuestionItem, ReportModel, SelectionPolicy};
use crate::services::{ScrapedPage, SearchScraper};
use crate::utils::logging::{log_question_done, log_question_start, log_resolution_summary};
use crate::workflow::retry::{RetryPolicy, Sleeper};

/// 答案解析流程
///
/// - 逐题顺序处理，不做并发
/// - 不持有任何网络资源，只依赖注入的抓取器
/// - 任意一题最终失败，整轮解析中止
pub struct AnswerResolver {
    scraper: Box<dyn SearchScraper>,
    sleeper: Box<dyn Sleeper>,
    retry_policy: RetryPolicy,
    domain_qualifier: String,
    autoparse_answers: bool,
}

impl AnswerResolver {
    pub fn new(
        scraper: Box<dyn SearchScraper>,
        sleeper: Box<dyn Sleeper>,
        config: &Config,
    ) -> Self {
        Self {
            scraper,
            sleeper,
            retry_policy: config.retry_policy(),
            domain_qualifier: config.domain_qualifier.clone(),
            autoparse_answers: config.autoparse_answers,
        }
    }

    /// 题干去掉末尾问号，再追加领域限定词
    pub fn build_query(&self, question: &str) -> String {
        let trimmed = question.trim_end();
        let stem = trimmed.strip_suffix('?').unwrap_or(trimmed).trim_end();
        if self.domain_qualifier.is_empty() {
            stem.to_string()
        } else {
            format!("{} {}", stem, self.domain_qualifier)
        }
    }

    /// 解析一道题
    pub async fn resolve_one(&self, question: &QuestionItem) -> AppResult<AnswerRecord> {
        let query = self.build_query(&question.text);
        debug!("查询语句: {}", query);

        // 同意页、验证码页没有自然结果链接，和网络错误一样在重试次数内重来
        let (link, page) = self
            .retry_policy
            .run(self.sleeper.as_ref(), || async {
                let page = self.scraper.scrape(&query).await?;
                match page.first_link.clone() {
                    Some(link) => Ok((link, page)),
                    None => Err(AppError::LinkNotFound {
                        query: query.clone(),
                    }),
                }
            })
            .await?;

        let answer = self.autoparse_answers.then(|| normalize_answer(&page));
        Ok(AnswerRecord::new(link, answer))
    }

    /// 按筛选策略依次解析所有题目
    ///
    /// 未选中的题目直接跳过；抓取最终失败时返回错误，已完成的结果丢弃
    pub async fn resolve_all(
        &self,
        questions: &[QuestionItem],
        policy: &SelectionPolicy,
    ) -> AppResult<ReportModel> {
        let total = questions.len();
        let mut report = ReportModel::new();
        let mut skipped = 0;

        for question in questions {
            if !policy.is_selected(question.ordinal) {
                skipped += 1;
                continue;
            }

            log_question_start(question, total);
            let record = self.resolve_one(question).await?;
            log_question_done(question.ordinal, total, &record);

            report.push(question, record);
        }

        log_resolution_summary(&report, skipped, total);
        info!("✓ 解析完成: {} 道题目", report.len());
        Ok(report)
    }

    /// 释放抓取器持有的会话
    pub fn close(self) {
        self.scraper.close();
    }
}

/// 答案归一化：精选答案 > 摘要（去掉最后一个 ". " 之后的部分）> 未找到
pub fn normalize_answer(page: &ScrapedPage) -> Answer {
    if let Some(featured) = &page.featured_answer {
        return Answer::direct(featured.clone());
    }
    if let Some(snippet) = &page.snippet {
        return Answer::snippet(trim_trailing_clause(snippet));
    }
    Answer::not_found()
}

/// 去掉最后一个 ". " 及其后的文本；没有分隔符时原样返回
fn trim_trailing_clause(snippet: &str) -> &str {
    snippet
        .rsplit_once(". ")
        .map(|(head, _)| head)
        .unwrap_or(snippet)
}
