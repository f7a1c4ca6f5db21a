//! プロンプト文言

use std::fmt;

/// 文言が空・未指定のときの既定値
pub const DEFAULT_PROMPT: &str = "User authentication";

/// Windows Hello ダイアログに表示する文言（空にならない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage(String);

impl PromptMessage {
    /// 空または未指定なら既定文言を使う
    pub fn new(text: Option<&str>) -> Self {
        Self::with_default(text, DEFAULT_PROMPT)
    }

    /// 既定文言も空なら `DEFAULT_PROMPT` を使う
    pub fn with_default(text: Option<&str>, default_text: &str) -> Self {
        match (text, default_text) {
            (Some(t), _) if !t.is_empty() => Self(t.to_string()),
            (_, d) if !d.is_empty() => Self(d.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PromptMessage {
    fn default() -> Self {
        Self(DEFAULT_PROMPT.to_string())
    }
}

impl fmt::Display for PromptMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
