//! Windows Hello 認証ユースケース（アプリ層）。

use crate::boundary::run_guarded;
use crate::owner_scope::OwnerWindowScope;
use wh_domain::HelloError;
use wh_domain::model::{AuthOutcome, HelloSettings, PromptMessage};
use wh_domain::port::driven::{ConsentVerifier, OwnerWindowProvider, UiThread};
use wh_domain::port::driving::AuthenticateUseCase;
use wh_domain::service::{ConsentStage, authenticate_with_owner};

pub struct HelloDeps<'a> {
    pub ui_thread: &'a dyn UiThread,
    pub windows: &'a dyn OwnerWindowProvider,
    pub verifier: &'a dyn ConsentVerifier,
}

pub struct HelloService<'a> {
    deps: HelloDeps<'a>,
    settings: HelloSettings,
}

impl<'a> HelloService<'a> {
    pub fn new(deps: HelloDeps<'a>) -> Self {
        Self::with_settings(deps, HelloSettings::default())
    }

    pub fn with_settings(deps: HelloDeps<'a>, settings: HelloSettings) -> Self {
        Self { deps, settings }
    }

    /// 境界の内側。障害は `Err` か panic として外へ出る。
    fn try_authenticate(&self, prompt: Option<&str>) -> Result<AuthOutcome, HelloError> {
        let message = PromptMessage::with_default(prompt, &self.settings.default_prompt);

        self.deps.ui_thread.enter_single_threaded_apartment()?;

        let owner = OwnerWindowScope::create(
            self.deps.windows,
            self.deps.ui_thread,
            &self.settings.owner_window,
        )?;

        if self.settings.allow_foreground {
            if let Err(err) = self.deps.ui_thread.allow_foreground() {
                tracing::debug!(error = %err, "foreground allowance ignored");
            }
        }

        let outcome = authenticate_with_owner(
            self.deps.verifier,
            owner.handle(),
            &message,
            &mut |stage: ConsentStage| tracing::debug!(stage = stage.as_str(), "consent flow"),
        );
        drop(owner);
        outcome
    }

    fn try_probe(&self) -> Result<AuthOutcome, HelloError> {
        self.deps.ui_thread.enter_single_threaded_apartment()?;
        let availability = self.deps.verifier.check_availability()?;
        tracing::debug!(%availability, "consent availability");
        Ok(if availability.is_available() {
            AuthOutcome::Success
        } else {
            AuthOutcome::NotAvailable
        })
    }
}

impl AuthenticateUseCase for HelloService<'_> {
    fn authenticate(&self, prompt: Option<&str>) -> AuthOutcome {
        let outcome = run_guarded(|| self.try_authenticate(prompt));
        tracing::debug!(%outcome, "authentication finished");
        outcome
    }

    fn probe_availability(&self) -> AuthOutcome {
        run_guarded(|| self.try_probe())
    }
}
