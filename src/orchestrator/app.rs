//! 应用主流程 - 编排层
//!
//! 读取题目 → 筛选 → 逐题解析 → 写出报告

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{validate_input_path, PdfTextExtractor, SearchSession};
use crate::models::{QuestionItem, ReportModel, SelectionPolicy};
use crate::orchestrator::report_assembler::ReportAssembler;
use crate::services::{parse_questions, DocumentTextExtractor, GoogleScraper, SearchScraper};
use crate::utils::logging::{log_questions_loaded, log_startup, print_final_stats};
use crate::workflow::{AnswerResolver, Sleeper, TokioSleeper};
use std::path::Path;
use tracing::info;

/// 应用主结构
///
/// 持有一次完整运行所需的全部资源，解析结果只属于本次运行
pub struct App {
    config: Config,
    policy: SelectionPolicy,
    questions: Vec<QuestionItem>,
    resolver: AnswerResolver,
    assembler: ReportAssembler,
    report: Option<ReportModel>,
}

impl App {
    /// 使用真实的 PDF 读取、Google 抓取和文件渲染初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let session = SearchSession::open(&config)?;
        Self::with_collaborators(
            config,
            &PdfTextExtractor,
            Box::new(GoogleScraper::new(session)),
            Box::new(TokioSleeper),
            ReportAssembler::default(),
        )
    }

    /// 注入协作者初始化应用
    pub fn with_collaborators(
        config: Config,
        extractor: &dyn DocumentTextExtractor,
        scraper: Box<dyn SearchScraper>,
        sleeper: Box<dyn Sleeper>,
        assembler: ReportAssembler,
    ) -> AppResult<Self> {
        config.validate()?;
        let policy = config.selection_policy()?;

        info!("\n📁 正在读取题目文件...");
        let input = validate_input_path(Path::new(&config.input_path))?;
        let text = extractor.first_page_text(input)?;
        let questions = parse_questions(input, &text)?;

        let selected = questions
            .iter()
            .filter(|q| policy.is_selected(q.ordinal))
            .count();
        log_questions_loaded(questions.len(), selected);

        let resolver = AnswerResolver::new(scraper, sleeper, &config);

        Ok(Self {
            config,
            policy,
            questions,
            resolver,
            assembler,
            report: None,
        })
    }

    /// 解析出的全部题目（未筛选）
    pub fn questions(&self) -> &[QuestionItem] {
        &self.questions
    }

    /// 最近一次解析的结果
    pub fn report(&self) -> Option<&ReportModel> {
        self.report.as_ref()
    }

    /// 按筛选策略解析答案
    pub async fn resolve(&mut self) -> AppResult<&ReportModel> {
        let report = self
            .resolver
            .resolve_all(&self.questions, &self.policy)
            .await?;
        Ok(self.report.insert(report))
    }

    /// 写出报告，路径和标题来自配置
    pub fn write_report(&self) -> AppResult<()> {
        self.write_report_to(Path::new(&self.config.output_path), &self.config.header)
    }

    /// 写出报告到指定路径，已存在的文件会被覆盖
    pub fn write_report_to(&self, path: &Path, header: &str) -> AppResult<()> {
        self.assembler.assemble(self.report.as_ref(), path, header)
    }

    /// 运行应用主逻辑，无论成功与否都会关闭搜索会话
    pub async fn run(mut self) -> AppResult<()> {
        let result = self.resolve_and_write().await;
        self.resolver.close();
        result
    }

    async fn resolve_and_write(&mut self) -> AppResult<()> {
        self.resolve().await?;
        self.write_report()?;

        if let Some(report) = &self.report {
            print_final_stats(report, &self.config.output_path);
        }
        Ok(())
    }
}
