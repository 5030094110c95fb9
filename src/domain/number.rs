//! 발신 대상 번호 정규화.

use anyhow::Result;

use super::error::DialError;

const TEL_SCHEME: &str = "tel:";

/// `tel:` URI 스킴을 제거한 발신 대상 번호.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationNumber(String);

impl DestinationNumber {
    /// CLI 입력값을 번호로 변환한다.
    /// `tel:`로 시작하면 스킴을 떼고 앞뒤 공백을 지운다. 그 외 입력(`+` 포함)은 그대로 둔다.
    pub fn parse(raw: &str) -> Result<Self> {
        let number = match raw.strip_prefix(TEL_SCHEME) {
            Some(path) => path.trim(),
            None => raw,
        };
        if number.trim().is_empty() {
            return Err(DialError::EmptyNumber.into());
        }
        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
