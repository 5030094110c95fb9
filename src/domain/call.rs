//! 한 번의 click-to-call 요청을 표현하는 값 객체.

use std::fmt;

use super::number::DestinationNumber;

/// PBX 서버 측에 전달되는 선택 파라미터.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginateOptions {
    /// 서버 측 호출 대기 시간(초). `timeout` 쿼리 파라미터.
    pub ring_timeout: Option<u32>,
    /// `autoAnswer` 쿼리 파라미터.
    pub auto_answer: Option<bool>,
}

#[derive(Clone)]
pub struct CallRequest {
    pub api_key: String,
    pub origin: String,
    pub number: DestinationNumber,
    pub options: OriginateOptions,
}

// API 키는 로그에 남기지 않는다.
impl fmt::Debug for CallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallRequest")
            .field("api_key", &"***")
            .field("origin", &self.origin)
            .field("number", &self.number.as_str())
            .field("options", &self.options)
            .finish()
    }
}
