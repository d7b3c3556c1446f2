//! 配置服务
//!
//! 配置文件位于 `<config_dir>/character-catalog/config.json`，
//! 文件中的每个字段都可以省略，缺省值见 [`AppConfig::default`]。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use character_catalog_provider::{ClientConfig, DEFAULT_BASE_URL};

use crate::view::theme::Theme;

/// 默认预取阈值（距列表末尾的行数）
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 5;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 目录 API 地址
    pub base_url: String,
    /// 单次请求超时（秒），不设置则不超时
    pub request_timeout_secs: Option<u64>,
    /// 瞬时错误的重试次数
    pub max_retries: u32,
    /// 选中项距列表末尾多少行时加载下一页
    pub prefetch_threshold: usize,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            max_retries: 0,
            prefetch_threshold: DEFAULT_PREFETCH_THRESHOLD,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 转换为 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_retries: self.max_retries,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("character-catalog")
        .join("config.json")
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
