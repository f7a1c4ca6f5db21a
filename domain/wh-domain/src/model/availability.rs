//! 同意サブシステムの可用性・検証結果
//!
//! WinRT の `UserConsentVerifierAvailability` / `UserConsentVerificationResult`
//! をプラットフォーム非依存に写したもの。ログの理由表示に使う。

use std::fmt;

/// 可用性チェックの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentAvailability {
    Available,
    DeviceNotPresent,
    NotConfiguredForUser,
    DisabledByPolicy,
    DeviceBusy,
    /// 未知の値（将来のOS拡張）
    Unknown(i32),
}

impl ConsentAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for ConsentAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::DeviceNotPresent => write!(f, "device not present"),
            Self::NotConfiguredForUser => write!(f, "not configured for user"),
            Self::DisabledByPolicy => write!(f, "disabled by policy"),
            Self::DeviceBusy => write!(f, "device busy"),
            Self::Unknown(raw) => write!(f, "unknown ({})", raw),
        }
    }
}

/// 検証要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Verified,
    DeviceNotPresent,
    NotConfiguredForUser,
    DisabledByPolicy,
    DeviceBusy,
    RetriesExhausted,
    Canceled,
    Unknown(i32),
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::DeviceNotPresent => write!(f, "device not present"),
            Self::NotConfiguredForUser => write!(f, "not configured for user"),
            Self::DisabledByPolicy => write!(f, "disabled by policy"),
            Self::DeviceBusy => write!(f, "device busy"),
            Self::RetriesExhausted => write!(f, "retries exhausted"),
            Self::Canceled => write!(f, "canceled"),
            Self::Unknown(raw) => write!(f, "unknown ({})", raw),
        }
    }
}
