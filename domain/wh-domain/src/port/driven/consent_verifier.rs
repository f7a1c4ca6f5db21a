//! 同意サブシステムの駆動ポート（Windows Hello）

use crate::error::HelloError;
use crate::model::{ConsentAvailability, OwnerHandle, PromptMessage, VerificationResult};

/// 同意サブシステムのアダプタ
///
/// どちらの操作も非同期処理の完了まで呼び出しスレッドをブロックする
/// （メッセージポンプ付き待機はアダプタの責務）。
pub trait ConsentVerifier {
    fn check_availability(&self) -> Result<ConsentAvailability, HelloError>;

    /// オーナーウィンドウに結び付けて検証ダイアログを表示
    fn request_verification(
        &self,
        owner: OwnerHandle,
        message: &PromptMessage,
    ) -> Result<VerificationResult, HelloError>;
}
