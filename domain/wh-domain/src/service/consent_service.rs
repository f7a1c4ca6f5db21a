//! 同意フロー（可用性チェック → 検証要求 → 結果解釈）

use super::Result;
use crate::model::{AuthOutcome, OwnerHandle, PromptMessage};
use crate::port::driven::ConsentVerifier;

/// フローの段階。後戻りしない一直線の状態遷移。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStage {
    CheckingAvailability,
    RequestingVerification,
    NotAvailable,
    Success,
    FailedOrCancelled,
}

impl ConsentStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckingAvailability => "checking_availability",
            Self::RequestingVerification => "requesting_verification",
            Self::NotAvailable => "not_available",
            Self::Success => "success",
            Self::FailedOrCancelled => "failed_or_cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotAvailable | Self::Success | Self::FailedOrCancelled)
    }
}

/// オーナーウィンドウに結び付けて同意フローを実行する。
///
/// 利用不可なら検証要求は行わない。サブシステム障害はそのまま `Err` で返し、
/// ここでは回復しない。`observer` は段階遷移ごとに呼ばれる。
pub fn authenticate_with_owner(
    verifier: &dyn ConsentVerifier,
    owner: OwnerHandle,
    message: &PromptMessage,
    observer: &mut dyn FnMut(ConsentStage),
) -> Result<AuthOutcome> {
    observer(ConsentStage::CheckingAvailability);
    let availability = verifier.check_availability()?;
    if !availability.is_available() {
        observer(ConsentStage::NotAvailable);
        return Ok(AuthOutcome::NotAvailable);
    }

    observer(ConsentStage::RequestingVerification);
    let result = verifier.request_verification(owner, message)?;
    let outcome = AuthOutcome::from_verification(result);
    observer(match outcome {
        AuthOutcome::Success => ConsentStage::Success,
        _ => ConsentStage::FailedOrCancelled,
    });
    Ok(outcome)
}
