use crate::error::{AppError, AppResult};
use crate::models::SelectionPolicy;
use crate::workflow::RetryPolicy;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目 PDF 路径
    pub input_path: String,
    /// 输出报告路径（.pdf 或 .docx）
    pub output_path: String,
    /// 报告标题
    pub header: String,
    // --- 题目筛选 ---
    /// 余数：序号 % modulus == remainder 的题目才处理
    pub remainder: usize,
    /// 模数（至少为 1）
    pub modulus: usize,
    /// 区间起点（含）
    pub range_start: Option<usize>,
    /// 区间终点（含）
    pub range_end: Option<usize>,
    /// 是否自动提取答案，关闭时只保存链接
    pub autoparse_answers: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 搜索配置 ---
    pub search_url: String,
    pub user_agent: String,
    pub locale: String,
    /// 追加在查询末尾的领域限定词
    pub domain_qualifier: String,
    // --- 重试配置 ---
    pub max_attempts: usize,
    pub retry_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "./Questions.pdf".to_string(),
            output_path: "./Answers.docx".to_string(),
            header: "Answers".to_string(),
            remainder: 0,
            modulus: 1,
            range_start: None,
            range_end: None,
            autoparse_answers: true,
            verbose_logging: false,
            search_url: "https://www.google.com/search".to_string(),
            user_agent:
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:104.0) Gecko/20100101 Firefox/104.0"
                    .to_string(),
            locale: "en".to_string(),
            domain_qualifier: "in Java?".to_string(),
            max_attempts: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// 读取配置：`QA_CONFIG_FILE` 指定的 TOML 文件（可选），再叠加环境变量
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("QA_CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        let config = base.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::Config(format!("无法解析配置文件 {}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            input_path: std::env::var("INPUT_PATH").unwrap_or(self.input_path),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(self.output_path),
            header: std::env::var("REPORT_HEADER").unwrap_or(self.header),
            remainder: env_parse("REMAINDER").unwrap_or(self.remainder),
            modulus: env_parse("MODULUS").unwrap_or(self.modulus),
            range_start: env_parse("RANGE_START").or(self.range_start),
            range_end: env_parse("RANGE_END").or(self.range_end),
            autoparse_answers: env_parse("AUTOPARSE_ANSWERS").unwrap_or(self.autoparse_answers),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
            search_url: std::env::var("SEARCH_URL").unwrap_or(self.search_url),
            user_agent: std::env::var("SEARCH_USER_AGENT").unwrap_or(self.user_agent),
            locale: std::env::var("SEARCH_LOCALE").unwrap_or(self.locale),
            domain_qualifier: std::env::var("DOMAIN_QUALIFIER").unwrap_or(self.domain_qualifier),
            max_attempts: env_parse("MAX_ATTEMPTS").unwrap_or(self.max_attempts),
            retry_delay_ms: env_parse("RETRY_DELAY_MS").unwrap_or(self.retry_delay_ms),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS")
                .unwrap_or(self.request_timeout_secs),
        }
    }

    /// 校验筛选与重试参数
    pub fn validate(&self) -> AppResult<()> {
        self.selection_policy()?;
        if self.max_attempts == 0 {
            return Err(AppError::Config("max_attempts 至少为 1".to_string()));
        }
        Ok(())
    }

    pub fn selection_policy(&self) -> AppResult<SelectionPolicy> {
        let policy = SelectionPolicy::new(self.remainder, self.modulus)?;
        match (self.range_start, self.range_end) {
            (None, None) => Ok(policy),
            (Some(start), Some(end)) => policy.with_range(start, end),
            _ => Err(AppError::Config(
                "range_start 和 range_end 必须同时设置".to_string(),
            )),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
