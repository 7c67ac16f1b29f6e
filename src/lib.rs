// ============================================================================
// SLogger - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明和公共 API 导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

//! 插件宿主的日志辅助工具。
//!
//! 每条日志写入控制台，可选附带调用位置；可选地以渐变色或单色消息
//! 转发给在线管理员。宿主平台（控制台、在线用户、时钟）通过 [`host`]
//! 中的 trait 注入。
//!
//! ```ignore
//! let logger = SLogger::new(LoggerConfig::new("Arena"), HostServices::standard(roster));
//! logger.log("match started")?;
//! logger.log_simplified(&score, false)?;
//! slog!(logger, "round over")?;
//! ```

pub mod cli;
pub mod core;
pub mod host;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{
    gradient_between, gradient_text, DispatchReport, LogOptions, LoggerError, Origin, SLogger,
};
pub use crate::host::{
    Clock, ConnectedUser, ConsoleSink, HostIdentity, HostServices, UserDirectory,
};
pub use crate::models::{LogValue, LoggerConfig, Rgb, StyledMessage};
