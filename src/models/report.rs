use crate::models::answer::{AnswerRecord, Confidence};
use crate::models::question::QuestionItem;
use serde::Serialize;

/// 低置信度答案后附加的提示
pub const LOW_CONFIDENCE_NOTE: &str =
    "This answer is not very confident. Please check the link above.";
/// 没有答案时代替答案正文的提示
pub const NO_ANSWER_NOTE: &str = "No answer found. Please check the link above.";

/// 报告中的一节："<序号>. <题干>" → 解析结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub record: AnswerRecord,
}

/// 按处理顺序排列的报告内容
///
/// 只能在解析过程中追加，交给报告组装器后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportModel {
    entries: Vec<ReportEntry>,
}

impl ReportModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, question: &QuestionItem, record: AnswerRecord) {
        self.entries.push(ReportEntry {
            label: question.label(),
            record,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&AnswerRecord> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.record)
    }

    /// 统计某个置信度的答案数量
    pub fn count_confidence(&self, confidence: Confidence) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.record.answer.as_ref())
            .filter(|a| a.confidence == confidence)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer::Answer;

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut report = ReportModel::new();
        report.push(
            &QuestionItem::new(10, "What is polymorphism?"),
            AnswerRecord::new("https://b", Some(Answer::not_found())),
        );
        report.push(
            &QuestionItem::new(5, "What is a class?"),
            AnswerRecord::new("https://a", Some(Answer::direct("A blueprint"))),
        );

        let labels: Vec<&str> = report.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["10. What is polymorphism?", "5. What is a class?"]);
        assert_eq!(
            report.get("5. What is a class?").and_then(|r| r.link.as_deref()),
            Some("https://a")
        );
        assert_eq!(report.count_confidence(Confidence::Direct), 1);
        assert_eq!(report.count_confidence(Confidence::NotFound), 1);
    }
}
