//! CLI 명령 파싱 모듈.

use clap::Parser;

pub const USAGE: &str = "Usage: dialer.py <phone_number>";

#[derive(Debug, Parser)]
#[command(name = "dialer", disable_version_flag = true)]
#[command(about = "Place a click-to-call through the hosted PBX API")]
pub struct Cli {
    /// Destination number: digits, +E.164, or a tel: URI
    #[arg(value_name = "PHONE_NUMBER")]
    numbers: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// 인자 개수가 맞지 않아 사용법만 출력한다.
    Usage,
    Dial(String),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        // 위치 인자는 정확히 하나여야 한다.
        match <[String; 1]>::try_from(self.numbers) {
            Ok([number]) => CliAction::Dial(number),
            Err(_) => CliAction::Usage,
        }
    }
}
