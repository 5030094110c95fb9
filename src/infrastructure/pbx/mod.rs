//! Hosted PBX HTTP API 연동 모듈.

mod vpbx;

pub use vpbx::VpbxClient;
