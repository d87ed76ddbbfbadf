//! 固定间隔的有限重试
//!
//! 等待动作通过 `Sleeper` 注入，测试时不需要真实等待

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// 等待能力
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的真实等待
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 重试策略：最多尝试次数 + 固定间隔，无指数退避
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 是否应对该错误重试
    pub fn should_retry(&self, err: &AppError) -> bool {
        err.is_retryable()
    }

    /// 执行操作，可重试错误在次数内重试，其余错误立即返回
    pub async fn run<T, F, Fut>(&self, sleeper: &dyn Sleeper, mut operation: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if self.should_retry(&err) && attempt < self.max_attempts => {
                    warn!(
                        "请求失败 (尝试 {}/{}): {}, 等待 {:?} 后重试...",
                        attempt, self.max_attempts, err, self.delay
                    );
                    sleeper.sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}
