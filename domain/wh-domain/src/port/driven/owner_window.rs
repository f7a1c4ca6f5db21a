//! オーナーウィンドウ提供ポート

use crate::error::HelloError;
use crate::model::{OwnerHandle, OwnerWindowSettings};

/// 非表示オーナーウィンドウの作成・破棄
pub trait OwnerWindowProvider {
    /// 非表示・非アクティブ・Alt+Tab非表示のトップレベルウィンドウを作成
    fn create_owner_window(&self, settings: &OwnerWindowSettings)
    -> Result<OwnerHandle, HelloError>;

    /// 作成したウィンドウを破棄する。失敗しても報告しない。
    fn destroy_owner_window(&self, handle: OwnerHandle);
}
