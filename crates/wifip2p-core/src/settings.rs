//! 测试工具设置和持久化
//!
//! 保存 snippet 包名和默认连接参数，供测试未显式提供配置时使用。

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WifiP2pConfig;
use crate::constants::WIFI_DIRECT_SNIPPET_PACKAGE_NAME;
use crate::error::{Error, Result};

/// 测试工具设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// 设备端 snippet 包名
    pub snippet_package: String,
    /// 详细日志模式
    pub verbose: bool,
    /// 默认连接参数（全部为空表示使用平台默认值）
    pub connection: WifiP2pConfig,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            snippet_package: WIFI_DIRECT_SNIPPET_PACKAGE_NAME.to_string(),
            verbose: false,
            connection: WifiP2pConfig::default(),
        }
    }
}

impl HarnessSettings {
    /// 获取配置文件路径
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wifip2p-snippet")
            .join("settings.toml")
    }

    /// 加载设置（文件不存在或无法解析时使用默认值）
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// 从指定路径加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings =
            toml::from_str(&content).map_err(|e| Error::Settings(format!("{path:?}: {e}")))?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// 保存设置
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("{path:?}: {e}")))?;
        fs::write(path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("wifip2p-settings-{}-{}", std::process::id(), name))
            .join("settings.toml")
    }

    #[test]
    fn test_default_settings() {
        let settings = HarnessSettings::default();
        assert_eq!(settings.snippet_package, "com.google.snippet.wifi.direct");
        assert!(settings.connection.is_empty());
        assert!(!settings.verbose);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = HarnessSettings {
            connection: WifiP2pConfig::new()
                .with_network_name("DIRECT-ab-harness")
                .with_passphrase("harness123")
                .with_group_operating_band(crate::constants::GROUP_OWNER_BAND_5GHZ),
            verbose: true,
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        let loaded = HarnessSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    /// 缺失的字段使用默认值
    #[test]
    fn test_partial_file() {
        let path = temp_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "verbose = true\n").unwrap();

        let loaded = HarnessSettings::load_from(&path).unwrap();
        assert!(loaded.verbose);
        assert_eq!(loaded.snippet_package, WIFI_DIRECT_SNIPPET_PACKAGE_NAME);
        assert!(loaded.connection.is_empty());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_file() {
        let path = temp_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[connection]\ngroup_operating_band = \"fast\"\n").unwrap();

        assert!(matches!(
            HarnessSettings::load_from(&path),
            Err(Error::Settings(_))
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    /// 目标路径的父目录是普通文件时返回 Io 错误
    #[test]
    fn test_save_to_unwritable_path() {
        let blocker = temp_path("blocker");
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, "").unwrap();

        let result = HarnessSettings::default().save_to(&blocker.join("settings.toml"));
        assert!(matches!(result, Err(Error::Io(_))));

        let _ = fs::remove_dir_all(blocker.parent().unwrap());
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(
            HarnessSettings::load_from(&path),
            Err(Error::Io(_))
        ));
    }
}
