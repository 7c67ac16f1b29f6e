// ============================================================================
// SLogger - CLI Log 命令
// ============================================================================
//
// 文件: src/cli/log.rs
// 职责: 本地日志分发演示命令
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 本地用户名单搭建
//   - ✅ 调用分发器并输出结果
//   - ❌ 不应包含日志格式化逻辑
//   - ❌ 不应包含投递过滤逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use crate::core::{LogOptions, SLogger};
use crate::host::{HostServices, Roster};
use crate::models::config::LoggerConfig;
use crate::models::value::LogValue;
use crate::ui::TerminalUser;
use crate::utils::logger::Logger;

/// 日志命令参数
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Message to log; omit to log a null value
    pub message: Vec<String>,

    /// Full mode: include origin and gradient, skip operator notification
    #[arg(long)]
    pub full: bool,

    /// Notify operators (explicit mode)
    #[arg(long, conflicts_with = "full")]
    pub notify: bool,

    /// Include caller origin (explicit mode)
    #[arg(long, conflicts_with = "full")]
    pub origin: bool,

    /// Gradient operator message (explicit mode)
    #[arg(long, conflicts_with = "full")]
    pub color: bool,

    /// Connected operators
    #[arg(long = "operator", default_value = "console")]
    pub operators: Vec<String>,

    /// Connected non-operator users
    #[arg(long = "player")]
    pub players: Vec<String>,
}

impl LogArgs {
    fn value(&self) -> LogValue {
        if self.message.is_empty() {
            LogValue::null()
        } else {
            LogValue::from(self.message.join(" "))
        }
    }

    fn explicit_options(&self) -> Option<LogOptions> {
        (self.notify || self.origin || self.color)
            .then(|| LogOptions::new(self.notify, self.origin, self.color))
    }
}

/// 处理日志命令
pub fn handle_log(args: LogArgs, config: LoggerConfig, verbose: bool) -> Result<()> {
    let roster = Arc::new(Roster::new());
    for name in &args.operators {
        roster.join(Arc::new(TerminalUser::new(name, true)))?;
    }
    for name in &args.players {
        roster.join(Arc::new(TerminalUser::new(name, false)))?;
    }

    let logger = SLogger::new(config, HostServices::standard(roster));
    let value = args.value();

    let report = match args.explicit_options() {
        Some(options) => logger.log_with(value, options)?,
        None if args.full => logger.log_simplified(value, false)?,
        None => logger.log(value)?,
    };

    if verbose {
        Logger::dispatch(&report);
    }

    Ok(())
}
