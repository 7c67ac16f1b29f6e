// ============================================================================
// SLogger - tracing 控制台输出
// ============================================================================
//
// 文件: src/host/console.rs
// 职责: 通过 tracing 实现系统控制台输出
// 边界:
//   - ✅ 日志级别映射
//   - ❌ 不应包含日志格式化逻辑
//   - ❌ 不应包含订阅器初始化
//
// ============================================================================

use tracing::Level;

use super::ConsoleSink;
use crate::utils::constants::CONSOLE_TARGET;

/// 将控制台日志作为 tracing 事件输出
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::ERROR => tracing::error!(target: CONSOLE_TARGET, "{}", line),
            Level::WARN => tracing::warn!(target: CONSOLE_TARGET, "{}", line),
            Level::INFO => tracing::info!(target: CONSOLE_TARGET, "{}", line),
            Level::DEBUG => tracing::debug!(target: CONSOLE_TARGET, "{}", line),
            _ => tracing::trace!(target: CONSOLE_TARGET, "{}", line),
        }
    }
}
