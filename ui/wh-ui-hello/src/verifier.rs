//! Windows Hello（UserConsentVerifier）アダプタ

use std::ffi::c_void;

use crate::waiter::wait_with_pump;
use wh_domain::HelloError;
use wh_domain::model::{ConsentAvailability, OwnerHandle, PromptMessage, VerificationResult};
use windows::Security::Credentials::UI::{
    UserConsentVerificationResult, UserConsentVerifier, UserConsentVerifierAvailability,
};
use windows::Win32::Foundation::HWND;
use windows::Win32::System::WinRT::IUserConsentVerifierInterop;
use windows::core::{HSTRING, factory};
use windows_future::IAsyncOperation;

/// 可用性チェック（非同期操作をポンプ付きで待つ）
pub fn check_availability() -> Result<ConsentAvailability, HelloError> {
    let op = UserConsentVerifier::CheckAvailabilityAsync()
        .map_err(|e| HelloError::subsystem("availability check", e))?;
    let availability = wait_with_pump(&op)?;
    Ok(map_availability(availability))
}

/// オーナーウィンドウに結び付けた検証要求
///
/// 暗黙のトップレベルウィンドウではなく、interop 経由で HWND を渡して
/// ダイアログの位置と所有者を固定する。
pub fn request_verification_for_window(
    owner: OwnerHandle,
    message: &PromptMessage,
) -> Result<VerificationResult, HelloError> {
    let interop = factory::<UserConsentVerifier, IUserConsentVerifierInterop>()
        .map_err(|e| HelloError::subsystem("interop factory", e))?;
    let hwnd = HWND(owner.0 as *mut c_void);
    let prompt = HSTRING::from(message.as_str());
    let op: IAsyncOperation<UserConsentVerificationResult> =
        unsafe { interop.RequestVerificationForWindowAsync(hwnd, &prompt) }
            .map_err(|e| HelloError::subsystem("request verification", e))?;
    let result = wait_with_pump(&op)?;
    let mapped = map_verification(result);
    tracing::debug!(result = %mapped, "Windows Hello verification finished");
    Ok(mapped)
}

fn map_availability(value: UserConsentVerifierAvailability) -> ConsentAvailability {
    match value {
        UserConsentVerifierAvailability::Available => ConsentAvailability::Available,
        UserConsentVerifierAvailability::DeviceNotPresent => ConsentAvailability::DeviceNotPresent,
        UserConsentVerifierAvailability::NotConfiguredForUser => {
            ConsentAvailability::NotConfiguredForUser
        }
        UserConsentVerifierAvailability::DisabledByPolicy => ConsentAvailability::DisabledByPolicy,
        UserConsentVerifierAvailability::DeviceBusy => ConsentAvailability::DeviceBusy,
        other => ConsentAvailability::Unknown(other.0),
    }
}

fn map_verification(value: UserConsentVerificationResult) -> VerificationResult {
    match value {
        UserConsentVerificationResult::Verified => VerificationResult::Verified,
        UserConsentVerificationResult::DeviceNotPresent => VerificationResult::DeviceNotPresent,
        UserConsentVerificationResult::NotConfiguredForUser => {
            VerificationResult::NotConfiguredForUser
        }
        UserConsentVerificationResult::DisabledByPolicy => VerificationResult::DisabledByPolicy,
        UserConsentVerificationResult::DeviceBusy => VerificationResult::DeviceBusy,
        UserConsentVerificationResult::RetriesExhausted => VerificationResult::RetriesExhausted,
        UserConsentVerificationResult::Canceled => VerificationResult::Canceled,
        other => VerificationResult::Unknown(other.0),
    }
}
