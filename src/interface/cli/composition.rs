//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::ResourceLocator;
use crate::application::usecases::initiate_call::InitiateCallUseCase;
use crate::infrastructure::adapters::{JsonConfigRepository, VpbxGatewayFactory};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: VpbxGatewayFactory,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository::default(),
            gateway_factory: VpbxGatewayFactory,
        }
    }
}

impl AppComposition {
    /// 파일 위치 전략을 외부에서 주입한다.
    pub fn with_locator(locator: Box<dyn ResourceLocator>) -> Self {
        Self {
            config_repo: JsonConfigRepository::new(locator),
            gateway_factory: VpbxGatewayFactory,
        }
    }

    /// 발신 유스케이스를 생성한다.
    pub fn initiate_call_usecase(&self) -> InitiateCallUseCase<'_> {
        InitiateCallUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
        }
    }
}
