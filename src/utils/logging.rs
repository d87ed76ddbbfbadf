/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::models::{AnswerRecord, Confidence, QuestionItem, ReportModel};
use tracing::{debug, info};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 题目文件: {}", config.input_path);
    info!("📝 输出文件: {}", config.output_path);
    info!(
        "📊 筛选: 序号 % {} == {}, 区间: {}",
        config.modulus,
        config.remainder,
        match (config.range_start, config.range_end) {
            (Some(s), Some(e)) => format!("[{}, {}]", s, e),
            _ => "全部".to_string(),
        }
    );
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
///
/// # 参数
/// - `total`: 题目总数
/// - `selected`: 本次需要处理的题目数
pub fn log_questions_loaded(total: usize, selected: usize) {
    info!("✓ 找到 {} 道题目", total);
    info!("📋 本次将处理 {} 道", selected);
}

/// 记录单题开始
pub fn log_question_start(question: &QuestionItem, total: usize) {
    info!("\n{}", "─".repeat(30));
    info!(
        "[题目 {}/{}] 🔍 {}",
        question.ordinal,
        total,
        truncate_text(&question.text, 80)
    );
}

/// 记录单题完成
pub fn log_question_done(ordinal: usize, total: usize, record: &AnswerRecord) {
    if let Ok(json) = serde_json::to_string(record) {
        debug!("[题目 {}/{}] 记录: {}", ordinal, total, json);
    }
    let link = record.link.as_deref().unwrap_or("-");
    match &record.answer {
        Some(answer) if answer.confidence == Confidence::NotFound => {
            info!("[题目 {}/{}] ⚠️ 未找到答案, 链接: {}", ordinal, total, link);
        }
        Some(answer) => {
            info!(
                "[题目 {}/{}] ✓ 置信度 {}: {}",
                ordinal,
                total,
                answer.confidence,
                truncate_text(&answer.text, 60)
            );
        }
        None => {
            info!("[题目 {}/{}] ✓ 链接: {}", ordinal, total, link);
        }
    }
}

/// 记录解析统计
pub fn log_resolution_summary(report: &ReportModel, skipped: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!(
        "题目统计: 处理 {}, 跳过 {}, 总计 {}",
        report.len(),
        skipped,
        total
    );
    info!(
        "置信度: 1.0 × {}, 0.5 × {}, 0.0 × {}",
        report.count_confidence(Confidence::Direct),
        report.count_confidence(Confidence::Snippet),
        report.count_confidence(Confidence::NotFound)
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(report: &ReportModel, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 写入 {} 道题目", report.len());
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
