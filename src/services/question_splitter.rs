//! 题目拆分 - 业务能力层
//!
//! 把一页原始文本按 "N. " 编号拆成题目列表

use crate::error::{AppError, AppResult};
use crate::models::QuestionItem;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// 编号分隔符：数字 + 句点 + 一个空白字符
const DECIMAL_PATTERN: &str = r"\d+\.\s";

fn decimal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DECIMAL_PATTERN).expect("DECIMAL_PATTERN 是合法正则"))
}

/// 拆分题目，序号按出现顺序从 1 开始
///
/// 分隔符本身会被丢弃，每段去除首尾空白，空段被忽略
pub fn split_questions(text: &str) -> Vec<QuestionItem> {
    decimal_regex()
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| QuestionItem::new(index + 1, fragment))
        .collect()
}

/// 拆分题目，结果为空时视为无效文档
pub fn parse_questions(source: &Path, text: &str) -> AppResult<Vec<QuestionItem>> {
    let questions = split_questions(text);
    if questions.is_empty() {
        return Err(AppError::invalid_document(source, "没有找到编号题目"));
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[QuestionItem]) -> Vec<&str> {
        items.iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn test_split_simple_list() {
        let items = split_questions("1. A 2. B");
        assert_eq!(texts(&items), vec!["A", "B"]);
        assert_eq!(items[0].ordinal, 1);
        assert_eq!(items[1].ordinal, 2);
    }

    #[test]
    fn test_split_extracted_page_text() {
        let page = "\n1. What is a class?\n2. What is an object? \n3.\tExplain inheritance.\n";
        let items = split_questions(page);
        assert_eq!(
            texts(&items),
            vec!["What is a class?", "What is an object?", "Explain inheritance."]
        );
        assert_eq!(items[2].label(), "3. Explain inheritance.");
    }

    #[test]
    fn test_leading_text_is_kept_only_when_not_empty() {
        // 第一个编号之前的空段被丢弃
        let items = split_questions("   1. First");
        assert_eq!(texts(&items), vec!["First"]);

        // 编号之前的非空文本同样成为一项
        let items = split_questions("Lecture 3 1. First 2. Second");
        assert_eq!(texts(&items), vec!["Lecture 3", "First", "Second"]);
    }

    #[test]
    fn test_decimal_without_whitespace_is_not_a_marker() {
        let items = split_questions("1. What is 3.14 in Java? 2. Next");
        assert_eq!(texts(&items), vec!["What is 3.14 in Java?", "Next"]);
    }

    #[test]
    fn test_multi_digit_numbers() {
        let text: String = (1..=12).map(|i| format!("{}. Q{} ", i, i)).collect();
        let items = split_questions(&text);
        assert_eq!(items.len(), 12);
        assert_eq!(items[11], QuestionItem::new(12, "Q12"));
    }

    #[test]
    fn test_empty_text_is_invalid_document() {
        let err = parse_questions(Path::new("q.pdf"), "  \n ").unwrap_err();
        assert!(matches!(err, AppError::InvalidDocument { .. }));
    }
}
