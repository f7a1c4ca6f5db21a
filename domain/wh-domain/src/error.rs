//! ドメインエラー型

use thiserror::Error;

/// 同意フロー全体のエラー型
///
/// 内部コンポーネントは回復を試みず `?` で上位へ伝播する。
/// 境界（アプリ層）でのみ結果コード -2 へ変換される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelloError {
    /// STA（シングルスレッドアパートメント）の初期化失敗
    #[error("apartment initialization failed: {0}")]
    ApartmentInit(String),

    /// オーナーウィンドウの作成失敗
    #[error("owner window creation failed: {0}")]
    WindowCreation(String),

    /// 完了シグナル（待機プリミティブ）の作成・待機失敗
    #[error("wait primitive setup failed: {0}")]
    WaitSetup(String),

    /// 同意サブシステムが返した障害（HWND拒否、完了時の例外など）
    #[error("consent subsystem fault ({context}): {message}")]
    Subsystem { context: String, message: String },

    /// Windows Hello が未構成・利用不可
    #[error("Windows Hello is not available or configured on this system")]
    NotAvailable,

    /// ユーザーが拒否・キャンセル、または照合失敗
    #[error("the user canceled the authentication")]
    UserCanceled,

    /// 境界で変換された内部エラー
    #[error("internal winhello error")]
    Internal,

    /// 既知の4値以外の結果コード
    #[error("winhello returned an unknown outcome code: {0}")]
    UnknownCode(i32),

    /// Windows以外のプラットフォーム
    #[error("Windows Hello is only available on Windows")]
    Unsupported,
}

impl HelloError {
    /// サブシステム障害を文脈付きで作成
    pub fn subsystem(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Subsystem {
            context: context.into(),
            message: message.to_string(),
        }
    }
}
