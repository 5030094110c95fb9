//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod call_gateway;
mod config_repository;

pub use call_gateway::VpbxGatewayFactory;
pub use config_repository::JsonConfigRepository;
