//! 사용자에게 안내 가능한(복구된) 실패 분류.
//!
//! 여기에 없는 오류(JSON 파싱 실패, 네트워크 장애 등)는 `anyhow::Error`로 전파되어
//! 진입점에서 별도 종료 코드로 처리된다.

use std::path::PathBuf;

use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const EXTENSION_FILE_NAME: &str = "extension.txt";

#[derive(Debug, Error)]
pub enum DialError {
    /// 설정 파일이 예상 위치에 없다.
    #[error(
        "Missing config.json (looked at {}). Copy config.example.json to config.json and fill in your credentials.",
        .path.display()
    )]
    ConfigMissing { path: PathBuf },

    /// 필수 필드가 비어 있다.
    #[error("Config must contain '{0}'.")]
    MissingField(&'static str),

    /// origin/extension 필드도, 별도 extension 파일도 없다.
    #[error(
        "Config must contain 'origin' (or 'extension'), or extension.txt must exist at {}.",
        .path.display()
    )]
    ExtensionMissing { path: PathBuf },

    #[error("Phone number must not be empty.")]
    EmptyNumber,

    /// PBX API가 non-2xx로 응답했다. 본문은 서버 응답 그대로다.
    #[error("Failed to initiate call: {body}")]
    Api { status: u16, body: String },
}
