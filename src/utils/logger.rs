// ============================================================================
// SLogger - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志初始化和命令行提示输出
// 边界:
//   - ✅ tracing 订阅器初始化
//   - ✅ 命令行提示格式化输出
//   - ❌ 不应包含日志分发逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::CLI_TARGET;
use crate::core::DispatchReport;

/// 初始化 tracing 输出，RUST_LOG 优先；`ansi` 与彩色输出开关保持一致
pub fn init_tracing(verbose: bool, ansi: bool) {
    // 重复初始化时保留已有的订阅器
    let _ = tracing::subscriber::set_global_default(build_subscriber(verbose, ansi, std::io::stdout));
}

/// 构建 fmt 订阅器
pub fn build_subscriber<W>(verbose: bool, ansi: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// 命令行提示输出，警告和错误走 tracing
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info("[SLOGGER]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success("[SLOGGER]"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        tracing::warn!(target: CLI_TARGET, "{}", msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        tracing::error!(target: CLI_TARGET, "{}", msg.as_ref());
    }

    /// 输出一次分发的结果
    pub fn dispatch(report: &DispatchReport) {
        let outcome = format!(
            "delivered to {} operator(s), {} failed",
            report.delivered, report.failed
        );
        let outcome = if report.failed > 0 {
            Colors::warn(&outcome)
        } else {
            Colors::success(&outcome)
        };
        Self::info(format!("{} -> {}", report.console_line, outcome));
    }
}
