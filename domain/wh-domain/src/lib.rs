//! WinHello ドメイン層
//!
//! Windows Hello 同意確認の中核。プラットフォーム非依存で、
//! Win32/WinRT への依存はアダプタ側（wh-ui-hello）に置く。

pub mod error;   // ドメインエラー定義
pub mod model;   // 結果コード、可用性、プロンプト、設定
pub mod port;    // ポート（driving/driven）
pub mod service; // ドメインサービス（同意フロー）

pub use error::HelloError; // エラー型を再エクスポート
