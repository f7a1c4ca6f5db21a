//! オーナーウィンドウのスコープ管理
//!
//! 正常終了でも `?` による早期リターンでも unwind でも、Drop で
//! 破棄 → メッセージ排出 を同じ順序で行う。

use wh_domain::HelloError;
use wh_domain::model::{OwnerHandle, OwnerWindowSettings};
use wh_domain::port::driven::{OwnerWindowProvider, UiThread};

pub(crate) struct OwnerWindowScope<'a> {
    windows: &'a dyn OwnerWindowProvider,
    ui_thread: &'a dyn UiThread,
    handle: OwnerHandle,
}

impl<'a> OwnerWindowScope<'a> {
    pub(crate) fn create(
        windows: &'a dyn OwnerWindowProvider,
        ui_thread: &'a dyn UiThread,
        settings: &OwnerWindowSettings,
    ) -> Result<Self, HelloError> {
        let handle = windows.create_owner_window(settings)?;
        if handle.is_null() {
            return Err(HelloError::WindowCreation("null window handle".into()));
        }
        tracing::debug!(hwnd = handle.0, "owner window created");
        Ok(Self {
            windows,
            ui_thread,
            handle,
        })
    }

    pub(crate) fn handle(&self) -> OwnerHandle {
        self.handle
    }
}

impl Drop for OwnerWindowScope<'_> {
    fn drop(&mut self) {
        self.windows.destroy_owner_window(self.handle);
        let drained = self.ui_thread.drain_messages();
        tracing::debug!(hwnd = self.handle.0, drained, "owner window destroyed");
    }
}
