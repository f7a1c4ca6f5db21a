//! 呼び出しスレッド（UIスレッド）の駆動ポート

use crate::error::HelloError;

/// 呼び出しスレッドのアパートメントとメッセージキュー
pub trait UiThread {
    /// STAとして初期化。既に同モードで初期化済みなら成功扱い。
    fn enter_single_threaded_apartment(&self) -> Result<(), HelloError>;

    /// フォアグラウンド許可（ベストエフォート）
    fn allow_foreground(&self) -> Result<(), HelloError>;

    /// 溜まっているメッセージを取り出してディスパッチし、処理件数を返す
    fn drain_messages(&self) -> usize;
}
