//! 설정 스키마와 기본값 규칙.
//!
//! 필드 이름이 달랐던 배포본들(`origin`/`extension`)을 하나의 스키마로 받는다.

use serde::{Deserialize, Deserializer};

pub const DEFAULT_API_BASE: &str = "https://vpbx.me";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DialerConfig {
    /// `X-Api-Key` 헤더 값
    pub api_key: Option<String>,
    /// 발신 내선 식별자 (문자열 또는 정수)
    #[serde(default, deserialize_with = "string_or_integer")]
    pub origin: Option<String>,
    /// `origin`의 다른 이름. 둘 다 있으면 `origin`이 우선한다.
    #[serde(default, deserialize_with = "string_or_integer")]
    pub extension: Option<String>,
    /// API 호스트 베이스 URL (기본 `https://vpbx.me`)
    pub api_base: Option<String>,
    /// 서버 측 호출 대기 시간(초), `timeout` 쿼리로 전달
    pub timeout: Option<u32>,
    /// `autoAnswer` 쿼리로 전달
    pub auto_answer: Option<bool>,
    /// 클라이언트 요청 타임아웃(초)
    pub request_timeout_secs: Option<u64>,
}

impl DialerConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    pub fn origin(&self) -> Option<&str> {
        non_blank(self.origin.as_deref()).or_else(|| non_blank(self.extension.as_deref()))
    }

    pub fn api_base(&self) -> &str {
        non_blank(self.api_base.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 내선 번호는 `"100"`과 `100` 두 형태로 적힌다.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInteger {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrInteger>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrInteger::Text(text) => text,
        StringOrInteger::Signed(n) => n.to_string(),
        StringOrInteger::Unsigned(n) => n.to_string(),
    }))
}
