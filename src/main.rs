//! `dialer` 바이너리 진입점.

use dialer::domain::error::DialError;
use dialer::interface::cli::{AppComposition, Cli, CliAction, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let number = match Cli::parse_action() {
        CliAction::Dial(number) => number,
        CliAction::Usage => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let composition = AppComposition::default();

    match composition.initiate_call_usecase().execute(&number).await {
        Ok(body) => println!("Call initiated: {body}"),
        Err(err) => match err.downcast_ref::<DialError>() {
            Some(known) => {
                eprintln!("{known}");
                std::process::exit(1);
            }
            None => {
                // 분류되지 않은 오류는 원인 체인 전체를 남긴다.
                eprintln!("error: {err:?}");
                std::process::exit(2);
            }
        },
    }
}
