//! wh-cli: Windows Hello プロンプトの動作確認用 CLI。
//! DLL と同じユースケースを直接呼び、結果コードと意味を表示する。

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wh_app::{HelloDeps, HelloService};
use wh_domain::model::{AuthOutcome, HelloSettings, decode_outcome};
use wh_domain::port::driving::AuthenticateUseCase;
use wh_ui_hello::SystemHello;

/// CLI の終了コード
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const FAILED_OR_CANCELLED: u8 = 1;
    pub const NOT_AVAILABLE: u8 = 2;
    pub const INTERNAL_ERROR: u8 = 3;
}

#[derive(Parser, Debug)]
#[command(name = "wh-cli", about = "Windows Hello consent prompt tester")]
struct Cli {
    /// JSON形式で出力
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// 詳細ログ（-v: debug）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Windows Hello で本人確認を行う
    Auth {
        /// ダイアログに表示する文言（省略時は既定文言）
        #[arg(long, short)]
        message: Option<String>,
        /// AllowSetForegroundWindow を呼ばない
        #[arg(long, default_value_t = false)]
        no_foreground: bool,
    },
    /// Windows Hello が利用可能か確認する（ダイアログは出さない）
    Check,
}

/// 実行したサブコマンドの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Auth,
    Check,
}

impl Action {
    fn as_str(&self) -> &'static str {
        match self {
            Action::Auth => "auth",
            Action::Check => "check",
        }
    }

    fn success_detail(&self) -> &'static str {
        match self {
            Action::Auth => "authentication successful",
            Action::Check => "Windows Hello is available",
        }
    }
}

#[derive(Debug, Serialize)]
struct OutcomeReport {
    command: &'static str,
    code: i32,
    outcome: &'static str,
    detail: String,
}

impl OutcomeReport {
    fn new(action: Action, outcome: AuthOutcome) -> Self {
        let detail = match decode_outcome(outcome.code()) {
            Ok(()) => action.success_detail().to_string(),
            Err(err) => err.to_string(),
        };
        Self {
            command: action.as_str(),
            code: outcome.code(),
            outcome: outcome.as_str(),
            detail,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let hello = SystemHello::new();
    let deps = HelloDeps {
        ui_thread: &hello,
        windows: &hello,
        verifier: &hello,
    };

    let (action, outcome) = match cli.command {
        Command::Auth {
            message,
            no_foreground,
        } => {
            let settings = HelloSettings {
                allow_foreground: !no_foreground,
                ..HelloSettings::default()
            };
            let service = HelloService::with_settings(deps, settings);
            (Action::Auth, service.authenticate(message.as_deref()))
        }
        Command::Check => (Action::Check, HelloService::new(deps).probe_availability()),
    };

    let report = OutcomeReport::new(action, outcome);
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(err) => eprintln!("wh-cli: failed to encode report: {}", err),
        }
    } else {
        println!("{} -> {} ({})", report.command, report.detail, report.code);
    }

    ExitCode::from(exit_code_for(outcome))
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_code_for(outcome: AuthOutcome) -> u8 {
    match outcome {
        AuthOutcome::Success => exit_codes::SUCCESS,
        AuthOutcome::FailedOrCancelled => exit_codes::FAILED_OR_CANCELLED,
        AuthOutcome::NotAvailable => exit_codes::NOT_AVAILABLE,
        AuthOutcome::InternalError => exit_codes::INTERNAL_ERROR,
    }
}
