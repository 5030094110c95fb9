//! Domain layer
//! 발신 번호/요청/실패 분류를 외부 의존성 없이 표현한다.

pub mod call;
pub mod error;
pub mod number;
