//! メッセージポンプ付き同期待機
//!
//! STAでは非同期操作の完了が同じスレッドのメッセージキュー経由で届く。
//! 素のブロッキング待機はデッドロックするため、完了シグナルとメッセージ到着の
//! 両方で起床し、メッセージは取り出してディスパッチしてから待機に戻る。

use std::sync::Arc;

use wh_domain::HelloError;
use windows::Win32::Foundation::{
    CloseHandle, GetLastError, HANDLE, WAIT_EVENT, WAIT_FAILED, WAIT_OBJECT_0,
};
use windows::Win32::System::Threading::{CreateEventW, INFINITE, SetEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, MSG, MWMO_INPUTAVAILABLE, MsgWaitForMultipleObjectsEx, PM_REMOVE,
    PeekMessageW, QS_ALLINPUT, TranslateMessage,
};
use windows::core::{PCWSTR, RuntimeType};
use windows_future::{AsyncOperationCompletedHandler, IAsyncOperation};

/// 手動リセットのイベント。完了コールバックと待機側で共有し、両方が手放すと閉じる。
struct CompletionEvent {
    handle: HANDLE,
}

// SAFETY: イベントハンドルはカーネルオブジェクトで、SetEvent/待機はスレッド間で安全
unsafe impl Send for CompletionEvent {}
unsafe impl Sync for CompletionEvent {}

impl CompletionEvent {
    fn new() -> Result<Self, HelloError> {
        let handle = unsafe { CreateEventW(None, true, false, PCWSTR::null()) }
            .map_err(|e| HelloError::WaitSetup(format!("CreateEventW: {}", e)))?;
        Ok(Self { handle })
    }
}

impl Drop for CompletionEvent {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// 完了コールバックに渡す通知口。シグナルを立てるだけで、ブロックも失敗もしない。
#[derive(Clone)]
pub struct CompletionNotifier(Arc<CompletionEvent>);

impl CompletionNotifier {
    pub fn notify(&self) {
        unsafe {
            let _ = SetEvent(self.0.handle);
        }
    }
}

/// 待機対象の保留中操作
pub trait PendingOperation {
    type Output;

    /// 完了時（成功・失敗・キャンセルを問わず）に `notifier` を一度鳴らすよう登録
    fn on_completed(&self, notifier: CompletionNotifier) -> Result<(), HelloError>;

    /// 完了後に結果を取り出す
    fn results(&self) -> Result<Self::Output, HelloError>;
}

impl<T: RuntimeType + 'static> PendingOperation for IAsyncOperation<T> {
    type Output = T;

    fn on_completed(&self, notifier: CompletionNotifier) -> Result<(), HelloError> {
        let handler = AsyncOperationCompletedHandler::new(move |_, _| {
            notifier.notify();
            Ok(())
        });
        self.SetCompleted(&handler)
            .map_err(|e| HelloError::subsystem("register completion", e))
    }

    fn results(&self) -> Result<T, HelloError> {
        self.GetResults()
            .map_err(|e| HelloError::subsystem("operation results", e))
    }
}

const WAKE_BY_MESSAGE: WAIT_EVENT = WAIT_EVENT(WAIT_OBJECT_0.0 + 1);

/// `op` の完了までメッセージを処理しながらブロックし、結果を返す。
///
/// タイムアウトなし。ユーザー操作待ちなので期限を設けない。
pub fn wait_with_pump<P>(op: &P) -> Result<P::Output, HelloError>
where
    P: PendingOperation + ?Sized,
{
    let done = Arc::new(CompletionEvent::new()?);
    op.on_completed(CompletionNotifier(Arc::clone(&done)))?;

    let handles = [done.handle];
    let mut pumped = 0usize;
    loop {
        let wake = unsafe {
            MsgWaitForMultipleObjectsEx(Some(&handles[..]), INFINITE, QS_ALLINPUT, MWMO_INPUTAVAILABLE)
        };
        if wake == WAIT_OBJECT_0 {
            break;
        }
        if wake == WAIT_FAILED {
            let code = unsafe { GetLastError() };
            return Err(HelloError::WaitSetup(format!(
                "MsgWaitForMultipleObjectsEx: {:?}",
                code
            )));
        }
        if wake != WAKE_BY_MESSAGE {
            tracing::debug!(wake = wake.0, "unexpected wake reason");
        }
        pumped += drain_thread_messages();
    }
    tracing::debug!(pumped, "pending operation completed");

    op.results()
}

/// 呼び出しスレッドのキューにあるメッセージをすべて翻訳・ディスパッチする
pub fn drain_thread_messages() -> usize {
    let mut msg = MSG::default();
    let mut count = 0;
    while unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE) }.as_bool() {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;
    use std::mem::size_of;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread::{self, JoinHandle};
    use std::time::{Duration, Instant};
    use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DestroyWindow, PostMessageW, RegisterClassExW,
        WINDOW_EX_STYLE, WM_APP, WNDCLASSEXW, WS_OVERLAPPED,
    };
    use windows::core::w;

    const NOISE: usize = 8;
    static DISPATCHED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "system" fn counting_wndproc(
        hwnd: HWND,
        msg: u32,
        wp: WPARAM,
        lp: LPARAM,
    ) -> LRESULT {
        if msg == WM_APP + 7 {
            DISPATCHED.fetch_add(1, Ordering::SeqCst);
            return LRESULT(0);
        }
        unsafe { DefWindowProcW(hwnd, msg, wp, lp) }
    }

    fn counting_window() -> HWND {
        let hinst = HINSTANCE(unsafe { GetModuleHandleW(None) }.expect("module").0);
        let wc = WNDCLASSEXW {
            cbSize: size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(counting_wndproc),
            hInstance: hinst,
            lpszClassName: w!("WinHelloWaiterTestClass"),
            ..Default::default()
        };
        unsafe {
            RegisterClassExW(&wc);
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                w!("WinHelloWaiterTestClass"),
                w!(""),
                WS_OVERLAPPED,
                0,
                0,
                10,
                10,
                None,
                None,
                Some(hinst),
                None,
            )
            .expect("test window")
        }
    }

    /// 別スレッドで完了する偽操作。完了前に待機側ウィンドウへ無関係なメッセージを送り、
    /// それらが待機中にディスパッチされたのを確認してから完了を通知する。
    struct NoisyOperation {
        value: u32,
        target: isize,
        worker: Mutex<Option<JoinHandle<()>>>,
    }

    impl PendingOperation for NoisyOperation {
        type Output = u32;

        fn on_completed(&self, notifier: CompletionNotifier) -> Result<(), HelloError> {
            let target = self.target;
            let worker = thread::spawn(move || {
                let hwnd = HWND(target as *mut c_void);
                for i in 0..NOISE {
                    unsafe {
                        PostMessageW(Some(hwnd), WM_APP + 7, WPARAM(i), LPARAM(0))
                            .expect("post noise");
                    }
                }
                let deadline = Instant::now() + Duration::from_secs(5);
                while DISPATCHED.load(Ordering::SeqCst) < NOISE && Instant::now() < deadline {
                    thread::sleep(Duration::from_millis(5));
                }
                notifier.notify();
            });
            *self.worker.lock().unwrap() = Some(worker);
            Ok(())
        }

        fn results(&self) -> Result<u32, HelloError> {
            Ok(self.value)
        }
    }

    struct ReadyOperation(Result<&'static str, HelloError>);

    impl PendingOperation for ReadyOperation {
        type Output = &'static str;

        fn on_completed(&self, notifier: CompletionNotifier) -> Result<(), HelloError> {
            // 登録時点で完了済みの操作は即座にコールバックされる
            notifier.notify();
            notifier.notify();
            Ok(())
        }

        fn results(&self) -> Result<&'static str, HelloError> {
            self.0.clone()
        }
    }

    #[test]
    fn returns_result_after_dispatching_unrelated_messages() {
        let hwnd = counting_window();
        let op = NoisyOperation {
            value: 42,
            target: hwnd.0 as isize,
            worker: Mutex::new(None),
        };
        assert_eq!(wait_with_pump(&op), Ok(42));
        assert_eq!(DISPATCHED.load(Ordering::SeqCst), NOISE);
        if let Some(worker) = op.worker.lock().unwrap().take() {
            worker.join().unwrap();
        }
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
        drain_thread_messages();
    }

    #[test]
    fn already_completed_operation_returns_immediately() {
        assert_eq!(wait_with_pump(&ReadyOperation(Ok("done"))), Ok("done"));
    }

    #[test]
    fn result_fault_propagates() {
        let fault = HelloError::subsystem("operation results", "E_FAIL");
        assert_eq!(wait_with_pump(&ReadyOperation(Err(fault.clone()))), Err(fault));
    }
}
