//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::call::CallRequest;
use crate::infrastructure::config::DialerConfig;

/// 이름으로 리소스 파일 경로를 결정하는 전략 포트.
/// 실행 형태(소스 실행/배포 바이너리) 판별은 구현체 선택 시 한 번만 수행한다.
pub trait ResourceLocator: Send + Sync {
    fn resolve(&self, name: &str) -> PathBuf;
}

/// 설정 로딩을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<DialerConfig>;
    /// 별도 extension 파일 값. 파일이 없으면 `None`.
    fn load_extension(&self) -> Result<Option<String>>;
    /// 별도 extension 파일이 위치해야 하는 경로(오류 안내용).
    fn extension_path(&self) -> PathBuf;
}

/// PBX click-to-call API 호출 포트.
#[async_trait]
pub trait CallGateway: Send + Sync {
    /// 성공 시 응답 본문을 가공 없이 반환한다.
    async fn originate(&self, request: &CallRequest) -> Result<String>;
}

/// 설정에 맞는 게이트웨이를 생성하는 팩토리 포트.
pub trait CallGatewayFactory: Send + Sync {
    fn build(&self, config: &DialerConfig) -> Result<Box<dyn CallGateway>>;
}
