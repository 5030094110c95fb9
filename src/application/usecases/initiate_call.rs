//! click-to-call 발신 유스케이스.
//!
//! 검증 실패는 모두 게이트웨이 생성/호출 이전에 반환된다.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{CallGatewayFactory, ConfigRepository};
use crate::domain::call::{CallRequest, OriginateOptions};
use crate::domain::error::DialError;
use crate::domain::number::DestinationNumber;

pub struct InitiateCallUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn CallGatewayFactory,
}

impl<'a> InitiateCallUseCase<'a> {
    /// 번호 정규화 → 설정 로딩 → 필드 검증 → API 호출 순으로 진행한다.
    pub async fn execute(&self, raw_number: &str) -> Result<String> {
        let number = DestinationNumber::parse(raw_number)?;
        let config = self.config_repo.load()?;

        let api_key = config
            .api_key()
            .ok_or(DialError::MissingField("api_key"))?
            .to_string();

        let origin = match config.origin() {
            Some(origin) => origin.to_string(),
            None => self
                .config_repo
                .load_extension()?
                .ok_or_else(|| DialError::ExtensionMissing {
                    path: self.config_repo.extension_path(),
                })?,
        };

        let request = CallRequest {
            api_key,
            origin,
            number,
            options: OriginateOptions {
                ring_timeout: config.timeout,
                auto_answer: config.auto_answer,
            },
        };
        debug!(?request, "call request prepared");

        let gateway = self.gateway_factory.build(&config)?;
        gateway.originate(&request).await
    }
}
