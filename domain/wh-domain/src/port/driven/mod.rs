//! 駆動ポート（出力インターフェース）。
//!
//! ドメインが外部に求める機能を定義する。
//! UIアダプタ（wh-ui-hello）が実装する。

mod consent_verifier;
mod owner_window;
mod ui_thread;

pub use consent_verifier::*;
pub use owner_window::*;
pub use ui_thread::*;
