//! 사용자 설정(JSON)과 extension 파일 로딩 모듈.
//! 파일 위치는 주입된 [`ResourceLocator`](crate::application::ports::ResourceLocator)가 결정한다.

mod loader;
mod locator;
mod types;

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ResourceLocator;
use crate::domain::error::EXTENSION_FILE_NAME;

pub use locator::{DirLocator, FallbackLocator, HOME_ENV, select_locator};
pub use types::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS, DialerConfig};

impl DialerConfig {
    /// 위치 전략이 가리키는 `config.json`을 로딩한다.
    pub fn load(locator: &dyn ResourceLocator) -> Result<Self> {
        loader::load_config(locator)
    }

    /// 위치 전략이 가리키는 `extension.txt` 값을 읽는다.
    pub fn load_extension(locator: &dyn ResourceLocator) -> Result<Option<String>> {
        loader::load_extension(locator)
    }

    pub fn extension_path(locator: &dyn ResourceLocator) -> PathBuf {
        locator.resolve(EXTENSION_FILE_NAME)
    }
}
