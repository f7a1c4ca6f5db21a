//! ポート定義
//!
//! driving: 外部（C境界・CLI）から呼ばれるユースケース
//! driven: ドメインが外部（Win32/WinRT）に求める機能

pub mod driven;
pub mod driving;
