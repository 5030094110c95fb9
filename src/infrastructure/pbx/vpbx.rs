//! vPBX click-to-call API 연동 구현.

use std::time::Duration;

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::domain::call::CallRequest;
use crate::domain::error::DialError;
use crate::infrastructure::config::DialerConfig;

/// 경로 세그먼트 인코딩 집합. 번호의 `+`는 그대로 둔다.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct VpbxClient {
    client: Client,
    api_base: String,
}

impl VpbxClient {
    pub fn new(api_base: &str, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("vpbx: failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// 설정의 베이스 URL/타임아웃으로 클라이언트를 생성한다.
    pub fn from_config(config: &DialerConfig) -> Result<Self> {
        Self::new(
            config.api_base(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }

    /// `{base}/api/originatecall/{origin}/{number}` 엔드포인트를 만든다.
    pub fn originate_endpoint(&self, request: &CallRequest) -> Result<Url> {
        let raw = format!(
            "{}/api/originatecall/{}/{}",
            self.api_base,
            utf8_percent_encode(&request.origin, PATH_SEGMENT),
            utf8_percent_encode(request.number.as_str(), PATH_SEGMENT),
        );
        let mut url =
            Url::parse(&raw).with_context(|| format!("vpbx: invalid endpoint URL {raw}"))?;

        let options = &request.options;
        if options.ring_timeout.is_some() || options.auto_answer.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(timeout) = options.ring_timeout {
                query.append_pair("timeout", &timeout.to_string());
            }
            if let Some(auto_answer) = options.auto_answer {
                query.append_pair("autoAnswer", if auto_answer { "true" } else { "false" });
            }
        }

        Ok(url)
    }

    fn request(&self, url: Url, api_key: &str) -> RequestBuilder {
        // GET이지만 서비스 호환을 위해 Content-Type을 함께 보낸다.
        self.client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header("X-Api-Key", api_key)
    }

    /// 발신을 요청하고 성공 응답 본문을 그대로 반환한다.
    pub async fn originate(&self, request: &CallRequest) -> Result<String> {
        let url = self.originate_endpoint(request)?;
        debug!(endpoint = %url, "originating call");

        let resp = self
            .request(url, &request.api_key)
            .send()
            .await
            .context("vpbx: failed to send originate request")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("vpbx: failed to read originate response body")?;
        debug!(%status, "originate response received");

        if !status.is_success() {
            return Err(DialError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::call::OriginateOptions;
    use crate::domain::number::DestinationNumber;

    fn request(origin: &str, number: &str, options: OriginateOptions) -> CallRequest {
        CallRequest {
            api_key: "key".to_string(),
            origin: origin.to_string(),
            number: DestinationNumber::parse(number).unwrap(),
            options,
        }
    }

    fn client() -> VpbxClient {
        VpbxClient::from_config(&DialerConfig::default()).unwrap()
    }

    #[test]
    fn builds_default_endpoint() {
        let url = client()
            .originate_endpoint(&request("100", "+15551234567", OriginateOptions::default()))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://vpbx.me/api/originatecall/100/+15551234567"
        );
    }

    #[test]
    fn appends_server_side_options() {
        let options = OriginateOptions {
            ring_timeout: Some(20),
            auto_answer: Some(true),
        };
        let url = client()
            .originate_endpoint(&request("100", "5551234", options))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://vpbx.me/api/originatecall/100/5551234?timeout=20&autoAnswer=true"
        );
    }

    #[test]
    fn encodes_reserved_characters_in_segments() {
        let url = client()
            .originate_endpoint(&request("a/b", "555 1234#9", OriginateOptions::default()))
            .unwrap();

        assert_eq!(
            url.path(),
            "/api/originatecall/a%2Fb/555%201234%239"
        );
    }

    #[test]
    fn honors_custom_api_base() {
        let cfg = DialerConfig {
            api_base: Some("http://127.0.0.1:9000/".to_string()),
            ..DialerConfig::default()
        };
        let url = VpbxClient::from_config(&cfg)
            .unwrap()
            .originate_endpoint(&request("7", "8", OriginateOptions::default()))
            .unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/originatecall/7/8");
    }
}
