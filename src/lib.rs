//! # Question Answer Sheet
//!
//! 从 PDF 题目列表自动检索答案并生成答题报告（PDF / DOCX）
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `SearchSession` - 唯一的 HTTP 会话 owner，提供结果页抓取
//! - `PdfTextExtractor` - 读取 PDF 第一页文本
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `split_questions` - 按 "N. " 编号拆分题目
//! - `GoogleScraper` - 抓取并解析结果页
//! - `PdfWriter` / `DocxWriter` - 报告渲染
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `RetryPolicy` - 固定间隔重试
//! - `AnswerResolver` - 查询 → 重试 → 取链接 → 归一化答案
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用主流程
//! - `orchestrator/report_assembler` - 按扩展名分派渲染器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, AnswerRecord, Confidence, QuestionItem, ReportModel, SelectionPolicy};
pub use orchestrator::{App, ReportAssembler, ReportFormat};
pub use services::{split_questions, ScrapedPage};
pub use workflow::{normalize_answer, AnswerResolver, RetryPolicy};
