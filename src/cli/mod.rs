// ============================================================================
// SLogger - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含日志分发逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod gradient;
pub mod init;
pub mod log;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::color::Rgb;
use crate::models::config::{ConfigOverrides, LoggerConfig};
use crate::utils::colors::Colors;
use crate::utils::constants::CONFIG_FILE_NAME;
use crate::utils::logger::init_tracing;
use gradient::{handle_gradient, GradientArgs};
use init::{handle_init, InitArgs};
use self::log::{handle_log, LogArgs};

/// SLogger - Plugin log helper with gradient operator messages
#[derive(Debug, Parser)]
#[command(name = "slogger")]
#[command(about = "Plugin log helper with gradient operator messages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// System identifier shown in every log line
    #[arg(long, global = true)]
    pub system_id: Option<String>,

    /// Gradient left color (#rrggbb)
    #[arg(long, global = true, value_parser = Rgb::parse)]
    pub left: Option<Rgb>,

    /// Gradient right color (#rrggbb)
    #[arg(long, global = true, value_parser = Rgb::parse)]
    pub right: Option<Rgb>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview a gradient in the terminal
    Gradient(GradientArgs),
    /// Dispatch a log line to the console and local operators
    Log(LogArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let colored = Colors::configure(cli.no_color);
    init_tracing(cli.verbose, colored);

    // 命令行参数覆盖配置文件
    let config = LoggerConfig::load_or_default(&cli.config)?.merged(build_overrides(&cli));

    match cli.command {
        Commands::Gradient(args) => handle_gradient(args, &config, cli.verbose),
        Commands::Log(args) => handle_log(args, config, cli.verbose),
        Commands::Init(args) => handle_init(args, &config, &cli.config),
    }
}

/// Build config overrides from CLI arguments
fn build_overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        system_id: cli.system_id.clone(),
        left_color: cli.left,
        right_color: cli.right,
    }
}
