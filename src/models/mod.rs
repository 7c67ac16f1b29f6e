// ============================================================================
// SLogger - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口和导出
// 边界:
//   - ✅ 数据模型子模块导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod color;
pub mod config;
pub mod message;
pub mod value;

pub use color::{named, ColorError, Rgb};
pub use config::{ConfigDefaults, ConfigOverrides, LoggerConfig};
pub use message::{StyledMessage, StyledSegment};
pub use value::LogValue;
