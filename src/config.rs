use crate::error::{ReconError, Result};
use heritage_recon_common::ReconciliationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 매핑표·제외 규칙·컬럼명·정규화 정책
    #[serde(default)]
    pub reconciliation: ReconciliationConfig,
    /// 출력 경로를 지정하지 않았을 때 쓰는 경로
    #[serde(default = "default_output")]
    pub default_output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("result.txt")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reconciliation: ReconciliationConfig::default(),
            default_output: default_output(),
        }
    }
}

impl AppConfig {
    /// 설정 읽기
    ///
    /// 경로를 지정하면 그 파일이 반드시 있어야 한다.
    /// 지정하지 않으면 홈 설정 파일을, 그것도 없으면 기본값을 쓴다.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ReconError::FileNotFound(path.display().to_string()));
            }
            return Self::load_from(path);
        }

        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.reconciliation.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReconError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("heritage-recon").join("config.json"))
    }
}
