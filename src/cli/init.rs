// ============================================================================
// SLogger - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含文件系统底层操作
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::models::config::LoggerConfig;
use crate::utils::logger::Logger;

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令，写入合并了命令行参数的配置
pub fn handle_init(args: InitArgs, config: &LoggerConfig, path: &Path) -> Result<()> {
    // 检查配置文件是否已存在
    if path.exists() && !args.force {
        Logger::warn(format!("{} already exists", path.display()));
        Logger::info("Use --force to overwrite it");
        return Ok(());
    }

    if let Err(e) = config.save_to_file(path) {
        Logger::error(format!("Failed to create {}: {}", path.display(), e));
        return Err(e);
    }

    Logger::success(format!("Created {}", path.display()));
    Ok(())
}
