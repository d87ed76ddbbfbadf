//! 搜索会话 - 基础设施层
//!
//! 持有 HTTP 客户端（连接池、固定请求头），只暴露"取回结果页"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult};
use std::time::Duration;
use tracing::debug;

/// 搜索会话
///
/// 职责：
/// - 持有唯一的 HTTP 客户端
/// - 固定 User-Agent 和语言参数
/// - 不认识 Question / Answer
/// - 不做重试，失败直接返回 `AppError::Fetch`
pub struct SearchSession {
    client: reqwest::Client,
    search_url: String,
    locale: String,
}

impl SearchSession {
    /// 创建新的搜索会话
    pub fn open(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        debug!("搜索会话已创建: {} (hl={})", config.search_url, config.locale);

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            locale: config.locale.clone(),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// 获取搜索结果页 HTML
    ///
    /// 连接失败、超时、非 2xx 状态码都视为可重试的抓取错误
    pub async fn fetch_results_page(&self, query: &str) -> AppResult<String> {
        debug!("请求搜索页: q={}", query);

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("hl", self.locale.as_str())])
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(&self.search_url, e))?
            .error_for_status()
            .map_err(|e| AppError::fetch_failed(&self.search_url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(&self.search_url, e))?;

        debug!("搜索页长度: {} 字节", body.len());
        Ok(body)
    }

    /// 关闭会话，释放连接池
    pub fn close(self) {
        debug!("搜索会话已关闭: {}", self.search_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_uses_config_values() {
        let config = Config {
            search_url: "http://127.0.0.1:9/search".to_string(),
            locale: "de".to_string(),
            ..Config::default()
        };
        let session = SearchSession::open(&config).unwrap();
        assert_eq!(session.search_url(), "http://127.0.0.1:9/search");
        assert_eq!(session.locale, "de");
        session.close();
    }

    #[tokio::test]
    async fn test_connection_failure_is_retryable() {
        // 端口 9 (discard) 在测试环境中不会有 HTTP 服务
        let config = Config {
            search_url: "http://127.0.0.1:9/search".to_string(),
            request_timeout_secs: 2,
            ..Config::default()
        };
        let session = SearchSession::open(&config).unwrap();
        let err = session.fetch_results_page("What is a class").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
