// ============================================================================
// SLogger - 颜色数据模型
// ============================================================================
//
// 文件: src/models/color.rs
// 职责: 24 位 RGB 颜色定义和解析
// 边界:
//   - ✅ RGB 颜色值定义
//   - ✅ 颜色文本解析和格式化
//   - ✅ 颜色序列化/反序列化
//   - ✅ 命名颜色常量
//   - ❌ 不应包含渐变计算
//   - ❌ 不应包含终端输出逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 颜色解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// 不是合法的十六进制颜色
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidHex(String),
    /// 数值超出 24 位范围
    #[error("color value {0:#x} is out of the 24-bit range")]
    OutOfRange(u32),
}

/// 24 位 RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorValue", into = "String")]
pub struct Rgb(u32);

impl Rgb {
    /// 由三个通道创建颜色
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// 由 0xRRGGBB 数值创建颜色，高位被忽略
    pub const fn from_hex(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// 解析 `#rrggbb`、`0xrrggbb` 或 `rrggbb`
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(text.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorError::InvalidHex(text.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// 配置文件中的颜色写法：整数或文本
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Packed(u32),
    Text(String),
}

impl TryFrom<ColorValue> for Rgb {
    type Error = ColorError;

    fn try_from(value: ColorValue) -> Result<Self, Self::Error> {
        match value {
            ColorValue::Packed(packed) if packed > 0x00ff_ffff => {
                Err(ColorError::OutOfRange(packed))
            }
            ColorValue::Packed(packed) => Ok(Rgb(packed)),
            ColorValue::Text(text) => Rgb::parse(&text),
        }
    }
}

/// 命名颜色（与游戏内调色板一致）
pub mod named {
    use super::Rgb;

    /// 白色 - 无渐变色时的默认颜色
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);
    /// 灰色 - 渐变消息的正文颜色
    pub const GRAY: Rgb = Rgb::from_hex(0xaaaaaa);
    /// 黄色 - 简单模式的高亮颜色
    pub const YELLOW: Rgb = Rgb::from_hex(0xffff55);
}
