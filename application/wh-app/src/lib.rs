//! wh-app: アプリケーション層のファサード。
//! ドメインの同意フローと駆動ポートを組み合わせ、
//! C境界から呼べる「例外を漏らさない」認証ユースケースを実装する。

pub mod boundary;
pub mod hello;
mod owner_scope;

pub use boundary::run_guarded;
pub use hello::{HelloDeps, HelloService};
