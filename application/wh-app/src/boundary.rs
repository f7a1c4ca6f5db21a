//! 障害→結果コードの変換境界
//!
//! ここが唯一の変換点。内部の `Err` も panic も `InternalError` になる。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use wh_domain::HelloError;
use wh_domain::model::AuthOutcome;

/// 本体を実行し、あらゆる障害を `AuthOutcome::InternalError` に写す。
pub fn run_guarded<F>(body: F) -> AuthOutcome
where
    F: FnOnce() -> Result<AuthOutcome, HelloError>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(err)) => {
            tracing::error!(error = %err, "winhello call failed");
            AuthOutcome::InternalError
        }
        Err(payload) => {
            tracing::error!(panic = %panic_message(payload.as_ref()), "winhello call panicked");
            AuthOutcome::InternalError
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
