//! 呼び出しスレッドのアパートメント

use wh_domain::HelloError;
use windows::Win32::System::WinRT::{RO_INIT_SINGLETHREADED, RoInitialize};
use windows::Win32::UI::WindowsAndMessaging::{ASFW_ANY, AllowSetForegroundWindow};

/// 呼び出しスレッドをSTAとして初期化する。
///
/// 既に同モードで初期化済み（S_FALSE）なら成功。MTA初期化済みのスレッドでは
/// RPC_E_CHANGED_MODE で失敗する。対になる RoUninitialize は呼ばない
/// （アパートメントはスレッド終了で解放される）。
pub fn enter_single_threaded() -> Result<(), HelloError> {
    unsafe { RoInitialize(RO_INIT_SINGLETHREADED) }
        .map_err(|e| HelloError::ApartmentInit(e.to_string()))
}

/// 任意プロセスへのフォアグラウンド移譲を許可（Windowsが無視することもある）
pub fn allow_any_foreground() -> Result<(), HelloError> {
    unsafe { AllowSetForegroundWindow(ASFW_ANY) }
        .map_err(|e| HelloError::subsystem("AllowSetForegroundWindow", e))
}
