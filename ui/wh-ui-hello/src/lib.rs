//! WinHello UIアダプタライブラリ
//!
//! Windows Hello の非同期・STA前提APIを、任意スレッドから呼べる
//! ブロッキング呼び出しへ変換する駆動ポート実装を提供。

#[cfg(target_os = "windows")]
pub mod apartment; // STA初期化・フォアグラウンド許可
#[cfg(target_os = "windows")]
pub mod owner_window; // 非表示オーナーウィンドウ
#[cfg(target_os = "windows")]
pub mod verifier; // UserConsentVerifier（HWND結び付け）
#[cfg(target_os = "windows")]
pub mod waiter; // メッセージポンプ付き同期待機

mod platform;

pub use platform::SystemHello;
