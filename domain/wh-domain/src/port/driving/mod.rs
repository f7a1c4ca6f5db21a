//! ドライビングポート（入力インターフェース）

mod authenticate_use_case;

pub use authenticate_use_case::*;
