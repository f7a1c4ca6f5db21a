//! 認証ユースケースポート

use crate::model::AuthOutcome;

/// 認証ユースケース（C境界・CLIから呼ばれる）
///
/// どちらの操作も失敗を返さない。あらゆる障害は `AuthOutcome::InternalError` になる。
pub trait AuthenticateUseCase {
    /// 認証フローを実行
    ///
    /// 処理内容:
    /// 1. STA初期化
    /// 2. 非表示オーナーウィンドウ作成
    /// 3. 可用性チェック → 検証要求
    /// 4. ウィンドウ破棄とメッセージ排出
    fn authenticate(&self, prompt: Option<&str>) -> AuthOutcome;

    /// 可用性のみ確認（ウィンドウは作らない）
    fn probe_availability(&self) -> AuthOutcome;
}
