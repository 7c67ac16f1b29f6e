// ============================================================================
// SLogger - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 默认颜色定义
//   - ✅ 日志格式相关常量
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含计算逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "SLogger";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "slogger.toml";

/// 空值占位文本
pub const NULL_PLACEHOLDER: &str = "⚠ null ⚠";

/// 控制台日志使用的 tracing target
pub const CONSOLE_TARGET: &str = "slogger::console";

/// 命令行提示使用的 tracing target
pub const CLI_TARGET: &str = "slogger::cli";

/// 用户消息中的时间格式 (HH:MM:SS)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// 默认渐变颜色
pub mod default_colors {
    /// 左侧颜色 - 黄色
    pub const LEFT: u32 = 0xffee00;
    /// 右侧颜色 - 品红
    pub const RIGHT: u32 = 0xe600da;
}
