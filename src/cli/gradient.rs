// ============================================================================
// SLogger - CLI Gradient 命令
// ============================================================================
//
// 文件: src/cli/gradient.rs
// 职责: 渐变文本预览命令
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用渐变渲染并输出
//   - ❌ 不应包含渐变算法实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::gradient_text;
use crate::models::color::Rgb;
use crate::models::config::LoggerConfig;
use crate::utils::logger::Logger;

/// 渐变预览命令参数
#[derive(Debug, Args)]
pub struct GradientArgs {
    /// Text to render
    pub text: String,

    /// Comma separated color stops, defaults to the configured left,right pair
    #[arg(short, long, value_delimiter = ',', value_parser = Rgb::parse)]
    pub stops: Vec<Rgb>,
}

/// 处理渐变预览命令
pub fn handle_gradient(args: GradientArgs, config: &LoggerConfig, verbose: bool) -> Result<()> {
    let stops = if args.stops.is_empty() {
        vec![config.left_color(), config.right_color()]
    } else {
        args.stops
    };

    let output = gradient_text(&args.text, &stops);
    println!("{}", output.to_ansi());

    if verbose {
        for segment in output.segments() {
            Logger::info(format!("{:?} {}", segment.text, segment.color));
        }
    }

    Ok(())
}
