// ============================================================================
// SLogger - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 日志器配置结构定义和操作
// 边界:
//   - ✅ 配置数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数覆盖
//   - ❌ 不应包含日志分发逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::color::Rgb;
use crate::host::HostIdentity;
use crate::utils::constants::{default_colors, APP_NAME};

/// 日志器配置，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// 系统标识（插件名称）
    #[serde(default = "LoggerConfig::default_system_id")]
    system_id: String,
    /// 渐变左侧颜色
    #[serde(default = "LoggerConfig::default_left_color")]
    left_color: Rgb,
    /// 渐变右侧颜色
    #[serde(default = "LoggerConfig::default_right_color")]
    right_color: Rgb,
}

/// 运行时参数（用于覆盖配置文件），None 表示保留原值
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub system_id: Option<String>,
    pub left_color: Option<Rgb>,
    pub right_color: Option<Rgb>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    /// 获取默认系统标识
    fn default_system_id() -> String {
        APP_NAME.to_string()
    }

    /// 获取默认左侧颜色
    fn default_left_color() -> Rgb {
        Rgb::from_hex(default_colors::LEFT)
    }

    /// 获取默认右侧颜色
    fn default_right_color() -> Rgb {
        Rgb::from_hex(default_colors::RIGHT)
    }
}

impl ConfigDefaults for LoggerConfig {}

impl LoggerConfig {
    /// 使用默认颜色创建配置
    pub fn new(system_id: impl Into<String>) -> Self {
        Self::with_palette(
            system_id,
            Self::default_left_color(),
            Self::default_right_color(),
        )
    }

    pub fn with_palette(system_id: impl Into<String>, left_color: Rgb, right_color: Rgb) -> Self {
        Self {
            system_id: system_id.into(),
            left_color,
            right_color,
        }
    }

    /// 从宿主标识创建配置
    pub fn for_host(host: &dyn HostIdentity) -> Self {
        Self::new(host.system_id())
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    pub fn left_color(&self) -> Rgb {
        self.left_color
    }

    pub fn right_color(&self) -> Rgb {
        self.right_color
    }

    /// 返回替换颜色后的新配置，None 保留原颜色
    pub fn with_colors(&self, left_color: Option<Rgb>, right_color: Option<Rgb>) -> Self {
        self.merged(ConfigOverrides {
            system_id: None,
            left_color,
            right_color,
        })
    }

    /// 合并运行时参数，返回新配置
    pub fn merged(&self, overrides: ConfigOverrides) -> Self {
        Self {
            system_id: overrides
                .system_id
                .unwrap_or_else(|| self.system_id.clone()),
            left_color: overrides.left_color.unwrap_or(self.left_color),
            right_color: overrides.right_color.unwrap_or(self.right_color),
        }
    }

    /// 加载配置文件
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(Self::default_system_id())
    }
}
