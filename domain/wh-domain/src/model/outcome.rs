//! 境界の結果コード定義

use super::VerificationResult;
use crate::HelloError;
use std::fmt;

/// 認証成功
pub const AUTH_SUCCESS: i32 = 1;
/// 失敗・拒否・キャンセル
pub const AUTH_FAILED_OR_CANCELLED: i32 = 0;
/// Windows Hello 利用不可
pub const AUTH_NOT_AVAILABLE: i32 = -1;
/// 内部エラー
pub const AUTH_ERROR_INTERNAL: i32 = -2;

/// 呼び出し1回につき1つだけ生成される最終結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    FailedOrCancelled,
    NotAvailable,
    InternalError,
}

impl AuthOutcome {
    /// C境界へ返す符号付き32bitコード
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => AUTH_SUCCESS,
            Self::FailedOrCancelled => AUTH_FAILED_OR_CANCELLED,
            Self::NotAvailable => AUTH_NOT_AVAILABLE,
            Self::InternalError => AUTH_ERROR_INTERNAL,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            AUTH_SUCCESS => Some(Self::Success),
            AUTH_FAILED_OR_CANCELLED => Some(Self::FailedOrCancelled),
            AUTH_NOT_AVAILABLE => Some(Self::NotAvailable),
            AUTH_ERROR_INTERNAL => Some(Self::InternalError),
            _ => None,
        }
    }

    /// 検証結果を2値に畳み込む。Verified 以外はすべて FailedOrCancelled。
    pub fn from_verification(result: VerificationResult) -> Self {
        if result.is_verified() {
            Self::Success
        } else {
            Self::FailedOrCancelled
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::FailedOrCancelled => "failed_or_cancelled",
            Self::NotAvailable => "not_available",
            Self::InternalError => "internal_error",
        }
    }

    /// 呼び出し側向けの Result 表現
    pub fn into_result(self) -> Result<(), HelloError> {
        match self {
            Self::Success => Ok(()),
            Self::FailedOrCancelled => Err(HelloError::UserCanceled),
            Self::NotAvailable => Err(HelloError::NotAvailable),
            Self::InternalError => Err(HelloError::Internal),
        }
    }
}

impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}

/// 生の戻り値を解釈する（DLL利用側のラッパー向け）
pub fn decode_outcome(code: i32) -> Result<(), HelloError> {
    match AuthOutcome::from_code(code) {
        Some(outcome) => outcome.into_result(),
        None => Err(HelloError::UnknownCode(code)),
    }
}
