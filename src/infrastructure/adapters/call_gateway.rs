//! 발신 게이트웨이 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{CallGateway, CallGatewayFactory};
use crate::domain::call::CallRequest;
use crate::infrastructure::config::DialerConfig;
use crate::infrastructure::pbx::VpbxClient;

/// 설정으로 vPBX 게이트웨이를 만드는 팩토리 어댑터.
pub struct VpbxGatewayFactory;

impl CallGatewayFactory for VpbxGatewayFactory {
    fn build(&self, config: &DialerConfig) -> Result<Box<dyn CallGateway>> {
        Ok(Box::new(VpbxGateway {
            inner: VpbxClient::from_config(config)?,
        }))
    }
}

/// 인프라 클라이언트를 애플리케이션 포트로 감싸는 래퍼.
struct VpbxGateway {
    inner: VpbxClient,
}

#[async_trait]
impl CallGateway for VpbxGateway {
    async fn originate(&self, request: &CallRequest) -> Result<String> {
        self.inner.originate(request).await
    }
}
