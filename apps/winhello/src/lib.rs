//! winhello: 外部ランタイム（Go の cgo/syscall など）向けのC ABI DLL。
//!
//! エクスポート関数は1回の呼び出しで1回の認証を完了させてから戻る。
//! 戻り値は 1/0/-1/-2 のいずれかで、panic を含むあらゆる障害は -2 になる。

use wh_app::{HelloDeps, HelloService, run_guarded};
use wh_domain::model::AuthOutcome;
use wh_domain::port::driving::AuthenticateUseCase;
use wh_ui_hello::SystemHello;

mod wide;

fn with_service<R>(f: impl FnOnce(&HelloService<'_>) -> R) -> R {
    let hello = SystemHello::new();
    let service = HelloService::new(HelloDeps {
        ui_thread: &hello,
        windows: &hello,
        verifier: &hello,
    });
    f(&service)
}

/// Windows Hello で利用者を確認する。
///
/// `prompt_message` は NUL 終端の UTF-16 文字列。null または空なら既定文言。
///
/// # Safety
/// `prompt_message` は null か、読み取り可能な NUL 終端 UTF-16 文字列を指すこと。
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AuthenticateUser(prompt_message: *const u16) -> i32 {
    run_guarded(|| {
        let prompt = unsafe { wide::read_nul_terminated(prompt_message) };
        Ok(with_service(|service| service.authenticate(prompt.as_deref())))
    })
    .code()
}

/// 可用性のみ確認する。1: 利用可 / -1: 利用不可 / -2: 内部エラー
#[unsafe(no_mangle)]
pub extern "C" fn CheckHelloAvailability() -> i32 {
    let outcome: AuthOutcome = run_guarded(|| Ok(with_service(|service| service.probe_availability())));
    outcome.code()
}


// 実ウィンドウと実アパートメントに、同意サブシステムだけ差し替えて通す
#[cfg(all(test, target_os = "windows"))]
mod windows_tests {
    use super::*;
    use wh_domain::HelloError;
    use wh_domain::model::{ConsentAvailability, OwnerHandle, PromptMessage, VerificationResult};
    use wh_domain::port::driven::ConsentVerifier;
    use wh_ui_hello::owner_window::live_owner_windows;

    enum Scripted {
        Unavailable,
        Result(VerificationResult),
        Fault,
        Panic,
    }

    struct ScriptedVerifier(Scripted);

    impl ConsentVerifier for ScriptedVerifier {
        fn check_availability(&self) -> Result<ConsentAvailability, HelloError> {
            match self.0 {
                Scripted::Unavailable => Ok(ConsentAvailability::NotConfiguredForUser),
                _ => Ok(ConsentAvailability::Available),
            }
        }

        fn request_verification(
            &self,
            owner: OwnerHandle,
            _message: &PromptMessage,
        ) -> Result<VerificationResult, HelloError> {
            assert!(!owner.is_null());
            assert_eq!(live_owner_windows(), 1);
            match self.0 {
                Scripted::Result(result) => Ok(result),
                Scripted::Fault => Err(HelloError::subsystem("request verification", "E_INVALIDARG")),
                Scripted::Panic => panic!("window handle rejected"),
                Scripted::Unavailable => unreachable!("verification requested while unavailable"),
            }
        }
    }

    fn authenticate_with(script: Scripted) -> i32 {
        let hello = SystemHello::new();
        let verifier = ScriptedVerifier(script);
        HelloService::new(HelloDeps {
            ui_thread: &hello,
            windows: &hello,
            verifier: &verifier,
        })
        .authenticate(Some("Confirm"))
        .code()
    }

    // ウィンドウ数はプロセス共有なので全経路を1つのテストで順に確認する
    #[test]
    fn every_path_leaves_no_owner_window() {
        let cases = [
            (Scripted::Unavailable, -1),
            (Scripted::Result(VerificationResult::Verified), 1),
            (Scripted::Result(VerificationResult::Canceled), 0),
            (Scripted::Result(VerificationResult::RetriesExhausted), 0),
            (Scripted::Fault, -2),
            (Scripted::Panic, -2),
            (Scripted::Result(VerificationResult::Verified), 1),
        ];
        for (script, expected) in cases {
            assert_eq!(authenticate_with(script), expected);
            assert_eq!(live_owner_windows(), 0);
        }
    }
}
