//! 駆動ポートをまとめたプラットフォーム実装

use wh_domain::HelloError;
use wh_domain::model::{
    ConsentAvailability, OwnerHandle, OwnerWindowSettings, PromptMessage, VerificationResult,
};
use wh_domain::port::driven::{ConsentVerifier, OwnerWindowProvider, UiThread};

/// 実行中OSの Windows Hello 実装。状態を持たないので呼び出しごとに作ってよい。
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHello;

impl SystemHello {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "windows")]
impl UiThread for SystemHello {
    fn enter_single_threaded_apartment(&self) -> Result<(), HelloError> {
        crate::apartment::enter_single_threaded()
    }

    fn allow_foreground(&self) -> Result<(), HelloError> {
        crate::apartment::allow_any_foreground()
    }

    fn drain_messages(&self) -> usize {
        crate::waiter::drain_thread_messages()
    }
}

#[cfg(target_os = "windows")]
impl OwnerWindowProvider for SystemHello {
    fn create_owner_window(
        &self,
        settings: &OwnerWindowSettings,
    ) -> Result<OwnerHandle, HelloError> {
        crate::owner_window::create_hidden_owner_window(settings)
    }

    fn destroy_owner_window(&self, handle: OwnerHandle) {
        crate::owner_window::destroy_owner_window(handle)
    }
}

#[cfg(target_os = "windows")]
impl ConsentVerifier for SystemHello {
    fn check_availability(&self) -> Result<ConsentAvailability, HelloError> {
        crate::verifier::check_availability()
    }

    fn request_verification(
        &self,
        owner: OwnerHandle,
        message: &PromptMessage,
    ) -> Result<VerificationResult, HelloError> {
        crate::verifier::request_verification_for_window(owner, message)
    }
}

// 非Windowsのフォールバック。すべて失敗し、境界で -2 になる。

#[cfg(not(target_os = "windows"))]
impl UiThread for SystemHello {
    fn enter_single_threaded_apartment(&self) -> Result<(), HelloError> {
        Err(HelloError::Unsupported)
    }

    fn allow_foreground(&self) -> Result<(), HelloError> {
        Err(HelloError::Unsupported)
    }

    fn drain_messages(&self) -> usize {
        0
    }
}

#[cfg(not(target_os = "windows"))]
impl OwnerWindowProvider for SystemHello {
    fn create_owner_window(
        &self,
        _settings: &OwnerWindowSettings,
    ) -> Result<OwnerHandle, HelloError> {
        Err(HelloError::Unsupported)
    }

    fn destroy_owner_window(&self, _handle: OwnerHandle) {}
}

#[cfg(not(target_os = "windows"))]
impl ConsentVerifier for SystemHello {
    fn check_availability(&self) -> Result<ConsentAvailability, HelloError> {
        Err(HelloError::Unsupported)
    }

    fn request_verification(
        &self,
        _owner: OwnerHandle,
        _message: &PromptMessage,
    ) -> Result<VerificationResult, HelloError> {
        Err(HelloError::Unsupported)
    }
}
