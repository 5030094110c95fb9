//! 설정 파일과 extension 파일 로더.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ResourceLocator;
use crate::domain::error::{CONFIG_FILE_NAME, DialError, EXTENSION_FILE_NAME};

use super::types::DialerConfig;

/// `config.json`을 한 번 읽어 파싱한다.
/// 파일이 없으면 `DialError::ConfigMissing`, 형식 오류는 일반 오류로 전파한다.
pub(crate) fn load_config(locator: &dyn ResourceLocator) -> Result<DialerConfig> {
    let path = locator.resolve(CONFIG_FILE_NAME);
    let Some(raw) = read_optional(&path)? else {
        return Err(DialError::ConfigMissing { path }.into());
    };
    debug!(path = %path.display(), "loaded config");

    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))
}

/// `extension.txt` 값을 공백 제거 후 반환한다. 파일이 없거나 비어 있으면 `None`.
pub(crate) fn load_extension(locator: &dyn ResourceLocator) -> Result<Option<String>> {
    let path = locator.resolve(EXTENSION_FILE_NAME);
    let Some(raw) = read_optional(&path)? else {
        return Ok(None);
    };
    debug!(path = %path.display(), "loaded extension file");

    let value = raw.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::DirLocator;

    #[test]
    fn missing_config_is_a_recognized_failure() {
        let dir = tempfile::tempdir().unwrap();
        let locator = DirLocator::new(dir.path());

        let err = load_config(&locator).unwrap_err();

        match err.downcast_ref::<DialError>() {
            Some(DialError::ConfigMissing { path }) => {
                assert_eq!(path, &dir.path().join("config.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("config.json"));
        assert!(message.contains("Copy config.example.json"));
    }

    #[test]
    fn malformed_config_is_not_a_recognized_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        let err = load_config(&DirLocator::new(dir.path())).unwrap_err();

        assert!(err.downcast_ref::<DialError>().is_none());
        assert!(err.to_string().contains("failed to parse JSON"));
    }

    #[test]
    fn parses_config_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{"api_key": "abc", "extension": "101", "timeout": 20, "auto_answer": true}"#,
        )
        .unwrap();

        let cfg = load_config(&DirLocator::new(dir.path())).unwrap();

        assert_eq!(cfg.api_key(), Some("abc"));
        assert_eq!(cfg.origin(), Some("101"));
        assert_eq!(cfg.timeout, Some(20));
        assert_eq!(cfg.auto_answer, Some(true));
    }

    #[test]
    fn extension_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("extension.txt"), "  205\n").unwrap();

        let ext = load_extension(&DirLocator::new(dir.path())).unwrap();

        assert_eq!(ext.as_deref(), Some("205"));
    }

    #[test]
    fn absent_or_blank_extension_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let locator = DirLocator::new(dir.path());
        assert_eq!(load_extension(&locator).unwrap(), None);

        fs::write(dir.path().join("extension.txt"), "\n \n").unwrap();
        assert_eq!(load_extension(&locator).unwrap(), None);
    }
}
