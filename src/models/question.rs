use serde::{Deserialize, Serialize};

/// 从文档中解析出的一道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    /// 题目序号（从 1 开始）
    pub ordinal: usize,
    /// 去除首尾空白后的题干
    pub text: String,
}

impl QuestionItem {
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }

    /// 报告中使用的标签："<序号>. <题干>"
    pub fn label(&self) -> String {
        format!("{}. {}", self.ordinal, self.text)
    }
}

impl std::fmt::Display for QuestionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let preview = if self.text.chars().count() > 80 {
            self.text.chars().take(80).collect::<String>() + "..."
        } else {
            self.text.clone()
        };
        write!(f, "{}. {}", self.ordinal, preview)
    }
}
