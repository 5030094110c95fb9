//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::{ConfigRepository, ResourceLocator};
use crate::infrastructure::config::{self, DialerConfig};

/// 위치 전략을 주입받는 JSON 설정 저장소 어댑터.
pub struct JsonConfigRepository {
    locator: Box<dyn ResourceLocator>,
}

impl JsonConfigRepository {
    pub fn new(locator: Box<dyn ResourceLocator>) -> Self {
        Self { locator }
    }
}

impl Default for JsonConfigRepository {
    fn default() -> Self {
        Self::new(config::select_locator())
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<DialerConfig> {
        DialerConfig::load(self.locator.as_ref())
    }

    fn load_extension(&self) -> Result<Option<String>> {
        DialerConfig::load_extension(self.locator.as_ref())
    }

    fn extension_path(&self) -> PathBuf {
        DialerConfig::extension_path(self.locator.as_ref())
    }
}
