//! 既定設定
//!
//! ライブラリはファイルや環境変数を読まない。エクスポート関数は常に既定値を使う。

use super::DEFAULT_PROMPT;

const DEFAULT_OWNER_WIDTH: i32 = 300;
const DEFAULT_OWNER_HEIGHT: i32 = 200;

/// 非表示オーナーウィンドウの寸法
///
/// 表示はされないが、中央寄せに意味を持たせるため適当な大きさを与える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerWindowSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for OwnerWindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_OWNER_WIDTH,
            height: DEFAULT_OWNER_HEIGHT,
        }
    }
}

/// 認証呼び出し全体の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloSettings {
    pub default_prompt: String,
    pub owner_window: OwnerWindowSettings,
    /// AllowSetForegroundWindow を試みるか（失敗は無視）
    pub allow_foreground: bool,
}

impl Default for HelloSettings {
    fn default() -> Self {
        Self {
            default_prompt: DEFAULT_PROMPT.to_string(),
            owner_window: OwnerWindowSettings::default(),
            allow_foreground: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_exported_entry_point() {
        let settings = HelloSettings::default();
        assert_eq!(settings.default_prompt, "User authentication");
        assert_eq!(settings.owner_window.width, 300);
        assert_eq!(settings.owner_window.height, 200);
        assert!(settings.allow_foreground);
    }
}
