use serde::{Serialize, Serializer};

/// 未找到答案时写入的文本
pub const NO_ANSWER_TEXT: &str = "No answer found";

/// 答案置信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    /// 搜索页直接给出的精选答案
    Direct,
    /// 从摘要中截取
    Snippet,
    /// 没有找到答案
    NotFound,
}

impl Confidence {
    pub fn score(&self) -> f32 {
        match self {
            Confidence::Direct => 1.0,
            Confidence::Snippet => 0.5,
            Confidence::NotFound => 0.0,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.score())
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.score())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub text: String,
    pub confidence: Confidence,
}

impl Answer {
    pub fn direct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: Confidence::Direct,
        }
    }

    pub fn snippet(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: Confidence::Snippet,
        }
    }

    pub fn not_found() -> Self {
        Self {
            text: NO_ANSWER_TEXT.to_string(),
            confidence: Confidence::NotFound,
        }
    }
}

/// 单道题目的解析结果，创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    pub link: Option<String>,
    /// 关闭自动提取答案时为 None，序列化时整个字段省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
}

impl AnswerRecord {
    pub fn new(link: impl Into<String>, answer: Option<Answer>) -> Self {
        Self {
            link: Some(link.into()),
            answer,
        }
    }
}
