//! ドメインモデル
//!
//! 結果コード、可用性・検証結果、プロンプト文言、設定型を定義

mod availability; // 可用性・検証結果（プラットフォーム値の写像）
mod config;       // 既定設定（ファイル/環境変数は読まない）
mod outcome;      // 境界の4値結果コード
mod prompt;       // プロンプト文言
mod window;       // オーナーウィンドウのハンドル値

pub use availability::*;
pub use config::*;
pub use outcome::*;
pub use prompt::*;
pub use window::*;
