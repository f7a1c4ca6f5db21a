//! 非表示オーナーウィンドウ
//!
//! Windows Hello ダイアログの位置と所有関係の基準にするだけのウィンドウ。
//! 表示もアクティブ化もしない。

use std::ffi::c_void;
use std::mem::size_of;
use std::sync::OnceLock;

use wh_domain::HelloError;
use wh_domain::model::{OwnerHandle, OwnerWindowSettings};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::{PCWSTR, w};

/// ウィンドウクラス名
pub const OWNER_CLASS_NAME: PCWSTR = w!("WinHelloDummyOwnerWindowClass");

/// クラス登録はプロセス内で一度だけ（最初の呼び出しが勝つ）。値は RegisterClassExW の atom。
static CLASS_ATOM: OnceLock<u16> = OnceLock::new();

unsafe extern "system" fn owner_wndproc(hwnd: HWND, msg: u32, wp: WPARAM, lp: LPARAM) -> LRESULT {
    match msg {
        WM_CLOSE => unsafe {
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        },
        WM_DESTROY => LRESULT(0),
        _ => unsafe { DefWindowProcW(hwnd, msg, wp, lp) },
    }
}

fn module_instance() -> Result<HINSTANCE, HelloError> {
    let hmod = unsafe { GetModuleHandleW(None) }
        .map_err(|e| HelloError::WindowCreation(format!("GetModuleHandleW: {}", e)))?;
    Ok(HINSTANCE(hmod.0))
}

fn ensure_class_registered(hinst: HINSTANCE) -> u16 {
    *CLASS_ATOM.get_or_init(|| {
        let wc = WNDCLASSEXW {
            cbSize: size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(owner_wndproc),
            hInstance: hinst,
            lpszClassName: OWNER_CLASS_NAME,
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW).unwrap_or_default() },
            ..Default::default()
        };
        let atom = unsafe { RegisterClassExW(&wc) };
        if atom == 0 {
            // 既に同名クラスがあればそのまま CreateWindowExW に任せる
            tracing::warn!("owner window class registration returned 0");
        }
        atom
    })
}

/// プライマリモニタ中央へ移動する。失敗しても何もしない。
fn center_on_primary_screen(hwnd: HWND) -> bool {
    let mut rc = RECT::default();
    if unsafe { GetWindowRect(hwnd, &mut rc) }.is_err() {
        return false;
    }
    let w = rc.right - rc.left;
    let h = rc.bottom - rc.top;
    let sw = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let sh = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    let (x, y) = centered_origin(sw, sh, w, h);
    unsafe { SetWindowPos(hwnd, None, x, y, w, h, SWP_NOZORDER | SWP_NOACTIVATE) }.is_ok()
}

fn centered_origin(screen_w: i32, screen_h: i32, w: i32, h: i32) -> (i32, i32) {
    ((screen_w - w) / 2, (screen_h - h) / 2)
}

/// 非表示オーナーウィンドウを作成して画面中央に置く
pub fn create_hidden_owner_window(
    settings: &OwnerWindowSettings,
) -> Result<OwnerHandle, HelloError> {
    let hinst = module_instance()?;
    ensure_class_registered(hinst);

    // WS_VISIBLE なし: 非表示のまま
    // WS_EX_TOOLWINDOW: Alt+Tab に出ない / WS_EX_NOACTIVATE: フォーカスを奪わない
    let hwnd = unsafe {
        CreateWindowExW(
            WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
            OWNER_CLASS_NAME,
            w!(""),
            WS_OVERLAPPED,
            0,
            0,
            settings.width,
            settings.height,
            None,
            None,
            Some(hinst),
            None,
        )
    }
    .map_err(|e| HelloError::WindowCreation(e.to_string()))?;

    if !center_on_primary_screen(hwnd) {
        tracing::warn!("owner window centering skipped");
    }
    Ok(OwnerHandle(hwnd.0 as isize))
}

pub fn destroy_owner_window(handle: OwnerHandle) {
    let hwnd = HWND(handle.0 as *mut c_void);
    if let Err(e) = unsafe { DestroyWindow(hwnd) } {
        tracing::warn!(error = %e, "DestroyWindow failed");
    }
}

/// このクラスの生存中トップレベルウィンドウ数（非表示を含む）
pub fn live_owner_windows() -> usize {
    let mut count = 0;
    let mut after: Option<HWND> = None;
    while let Ok(hwnd) = unsafe { FindWindowExW(None, after, OWNER_CLASS_NAME, PCWSTR::null()) } {
        if hwnd.is_invalid() {
            break;
        }
        count += 1;
        after = Some(hwnd);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_origin_splits_remaining_space() {
        assert_eq!(centered_origin(1920, 1080, 300, 200), (810, 440));
        assert_eq!(centered_origin(200, 100, 300, 200), (-50, -50));
    }

    // クラス登録とウィンドウ数はプロセス共有なので1つのテストにまとめる
    #[test]
    fn owner_windows_are_hidden_and_leave_no_instances() {
        let settings = OwnerWindowSettings::default();

        let first = create_hidden_owner_window(&settings).expect("first window");
        let hwnd = HWND(first.0 as *mut c_void);
        assert!(!unsafe { IsWindowVisible(hwnd) }.as_bool());
        let ex_style = unsafe { GetWindowLongW(hwnd, GWL_EXSTYLE) } as u32;
        assert_ne!(ex_style & WS_EX_TOOLWINDOW.0, 0);
        assert_ne!(ex_style & WS_EX_NOACTIVATE.0, 0);
        assert_eq!(live_owner_windows(), 1);
        destroy_owner_window(first);
        assert_eq!(live_owner_windows(), 0);

        // 2回目もクラス登録で失敗しない
        let second = create_hidden_owner_window(&settings).expect("second window");
        assert_ne!(second.0, 0);
        destroy_owner_window(second);
        assert_eq!(live_owner_windows(), 0);
    }
}
