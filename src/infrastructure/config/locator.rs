//! 리소스 파일 위치 결정 전략.
//!
//! 실행 형태 판별은 [`select_locator`]에서 한 번만 수행한다.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::ResourceLocator;

/// 설정 디렉터리를 직접 지정하는 환경변수.
pub const HOME_ENV: &str = "DIALER_HOME";

/// 고정 디렉터리 아래에서 리소스를 찾는다.
#[derive(Debug, Clone)]
pub struct DirLocator {
    dir: PathBuf,
}

impl DirLocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResourceLocator for DirLocator {
    fn resolve(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

/// 우선 디렉터리에 파일이 있으면 그것을, 없으면 대체 디렉터리 경로를 쓴다.
/// 배포 바이너리 옆 파일이 번들 사본보다 우선한다.
#[derive(Debug, Clone)]
pub struct FallbackLocator {
    primary: DirLocator,
    fallback: DirLocator,
}

impl FallbackLocator {
    pub fn new(primary: DirLocator, fallback: DirLocator) -> Self {
        Self { primary, fallback }
    }
}

impl ResourceLocator for FallbackLocator {
    fn resolve(&self, name: &str) -> PathBuf {
        let preferred = self.primary.resolve(name);
        if preferred.exists() {
            return preferred;
        }
        self.fallback.resolve(name)
    }
}

/// 실행 환경에 맞는 위치 전략을 선택한다.
///
/// 1. `DIALER_HOME`이 있으면 그 디렉터리
/// 2. cargo 빌드 디렉터리에서 실행 중이면 소스 트리 루트
/// 3. 그 외(배포 바이너리)는 실행 파일 옆, 없으면 사용자 설정 디렉터리
pub fn select_locator() -> Box<dyn ResourceLocator> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        debug!(dir = ?home, "using DIALER_HOME for resources");
        return Box::new(DirLocator::new(home));
    }

    let source_root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let Some(exe_dir) = exe_dir else {
        debug!("executable path unavailable; using working directory");
        return Box::new(DirLocator::new("."));
    };

    if is_source_build(&exe_dir, source_root) {
        debug!(dir = %source_root.display(), "running from source tree");
        return Box::new(DirLocator::new(source_root));
    }

    let bundled = dirs::config_dir()
        .map(|base| base.join("dialer"))
        .unwrap_or_else(|| exe_dir.clone());
    debug!(
        primary = %exe_dir.display(),
        fallback = %bundled.display(),
        "running as packaged executable"
    );
    Box::new(FallbackLocator::new(
        DirLocator::new(exe_dir),
        DirLocator::new(bundled),
    ))
}

fn is_source_build(exe_dir: &Path, source_root: &Path) -> bool {
    exe_dir.starts_with(source_root.join("target"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn dir_locator_joins_name() {
        let locator = DirLocator::new("/srv/dialer");
        assert_eq!(
            locator.resolve("config.json"),
            PathBuf::from("/srv/dialer/config.json")
        );
    }

    #[test]
    fn fallback_prefers_file_beside_executable() {
        let exe_dir = tempfile::tempdir().unwrap();
        let bundled_dir = tempfile::tempdir().unwrap();
        fs::write(exe_dir.path().join("config.json"), "{}").unwrap();
        fs::write(bundled_dir.path().join("config.json"), "{}").unwrap();

        let locator = FallbackLocator::new(
            DirLocator::new(exe_dir.path()),
            DirLocator::new(bundled_dir.path()),
        );

        assert_eq!(
            locator.resolve("config.json"),
            exe_dir.path().join("config.json")
        );
    }

    #[test]
    fn fallback_uses_bundled_copy_when_external_missing() {
        let exe_dir = tempfile::tempdir().unwrap();
        let bundled_dir = tempfile::tempdir().unwrap();

        let locator = FallbackLocator::new(
            DirLocator::new(exe_dir.path()),
            DirLocator::new(bundled_dir.path()),
        );

        assert_eq!(
            locator.resolve("extension.txt"),
            bundled_dir.path().join("extension.txt")
        );
    }

    #[test]
    fn detects_cargo_target_directory() {
        let root = Path::new("/work/dialer");
        assert!(is_source_build(Path::new("/work/dialer/target/debug"), root));
        assert!(!is_source_build(Path::new("/usr/local/bin"), root));
    }
}
