//! dialer library root.
//! Hosted PBX click-to-call 클라이언트의 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
