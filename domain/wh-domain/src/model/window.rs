//! オーナーウィンドウのハンドル値

/// プロンプトの位置決め・所有関係に使うウィンドウハンドル（HWNDの生値）
///
/// ドメインはこの値を解釈せず、アダプタ間で受け渡すだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(pub isize);

impl OwnerHandle {
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}
