//! 呼び出し側から渡されるワイド文字列

/// NUL 終端 UTF-16 を読む。null と空文字列は `None`。
/// 不正なサロゲートは U+FFFD に置換する。
///
/// # Safety
/// `ptr` は null か、読み取り可能な NUL 終端 UTF-16 文字列を指すこと。
pub(crate) unsafe fn read_nul_terminated(ptr: *const u16) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0usize;
    while unsafe { *ptr.add(len) } != 0 {
        len += 1;
    }
    if len == 0 {
        return None;
    }
    let units = unsafe { std::slice::from_raw_parts(ptr, len) };
    Some(String::from_utf16_lossy(units))
}
