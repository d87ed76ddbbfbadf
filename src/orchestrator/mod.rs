//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次完整运行的调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用主流程
//! - 管理应用生命周期（初始化、运行、清理）
//! - 读取题目文档并拆分题目
//! - 交给 workflow::AnswerResolver 逐题解析
//! - 输出全局统计信息
//!
//! ### `report_assembler` - 报告组装
//! - 按输出扩展名选择渲染器（.pdf / .docx）
//! - 没有解析结果时拒绝写出
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<QuestionItem>)
//!     ↓
//! workflow::AnswerResolver (处理单个 QuestionItem)
//!     ↓
//! services (能力层：split / scrape / render)
//!     ↓
//! infrastructure (基础设施：SearchSession / PdfTextExtractor)
//! ```

pub mod app;
pub mod report_assembler;

// 重新导出主要类型
pub use app::App;
pub use report_assembler::{ReportAssembler, ReportFormat};
