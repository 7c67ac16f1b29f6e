// ============================================================================
// SLogger - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 真彩色文本输出
//   - ✅ 日志级别主题颜色
//   - ✅ 颜色兼容性处理
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含渐变计算
//   - ❌ 不应包含特定领域逻辑
//
// ============================================================================

use colored::Colorize;

use crate::models::color::Rgb;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 使用 24 位颜色渲染文本
    pub fn paint(text: &str, color: Rgb) -> String {
        text.truecolor(color.red(), color.green(), color.blue())
            .to_string()
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> String {
        text.cyan().to_string()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> String {
        text.yellow().to_string()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    /// 根据参数和终端能力开关彩色输出，返回是否启用
    pub fn configure(no_color: bool) -> bool {
        let enabled = Self::enabled(no_color, atty::is(atty::Stream::Stdout));
        colored::control::set_override(enabled);
        enabled
    }

    fn enabled(no_color: bool, is_tty: bool) -> bool {
        !no_color && is_tty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_wins_over_terminal() {
        assert!(!Colors::enabled(true, true));
        assert!(!Colors::enabled(false, false));
        assert!(Colors::enabled(false, true));
    }
}
