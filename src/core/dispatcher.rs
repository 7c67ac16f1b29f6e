// ============================================================================
// SLogger - 日志分发器
// ============================================================================
//
// 文件: src/core/dispatcher.rs
// 职责: 决定每条日志的去向和格式
// 边界:
//   - ✅ 控制台日志格式化和输出
//   - ✅ 调用位置标注
//   - ✅ 管理员消息渲染（渐变/单色）和投递
//   - ✅ 简化模式参数映射
//   - ❌ 不应包含渐变算法实现
//   - ❌ 不应包含宿主平台实现
//   - ❌ 不应包含终端输出逻辑
//
// ============================================================================

use std::panic::Location;
use thiserror::Error;
use tracing::{debug, Level};

use super::gradient::gradient_between;
use super::origin::Origin;
use crate::host::{DirectoryError, HostServices};
use crate::models::color::{named, Rgb};
use crate::models::config::LoggerConfig;
use crate::models::message::StyledMessage;
use crate::models::value::LogValue;
use crate::utils::constants::TIME_FORMAT;

/// 日志器自身入口的帧标记，回溯调用者时跳过
const LOGGER_FRAMES: &[&str] = &[concat!(module_path!(), "::SLogger")];

/// 日志调用可能返回的错误
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// 单次日志调用的三个开关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// 在线管理员是否收到消息
    pub notify_users: bool,
    /// 控制台日志是否包含调用位置
    pub include_origin: bool,
    /// 管理员消息是否使用渐变色
    pub colorize: bool,
}

impl LogOptions {
    pub const fn new(notify_users: bool, include_origin: bool, colorize: bool) -> Self {
        Self {
            notify_users,
            include_origin,
            colorize,
        }
    }

    /// 简化模式映射：
    ///
    /// | simplified | notify_users | include_origin | colorize |
    /// |------------|--------------|----------------|----------|
    /// | true       | true         | false          | false    |
    /// | false      | false        | true           | true     |
    pub const fn simplified(simplified: bool) -> Self {
        Self::new(simplified, !simplified, !simplified)
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::simplified(true)
    }
}

/// 单次分发的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// 写入控制台的完整行
    pub console_line: String,
    /// 成功投递的管理员数量
    pub delivered: usize,
    /// 投递失败（已断开等）的管理员数量
    pub failed: usize,
}

/// 插件日志器
///
/// 需要调用位置时回溯调用栈，跳过日志器自身的帧，取第一个外部函数；
/// 文件和行号来自 `#[track_caller]`，与经过几层便捷入口无关。
#[derive(Clone)]
pub struct SLogger {
    config: LoggerConfig,
    host: HostServices,
}

impl SLogger {
    pub fn new(config: LoggerConfig, host: HostServices) -> Self {
        Self { config, host }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// 返回替换颜色后的新日志器，None 保留原颜色
    pub fn with_colors(&self, left_color: Option<Rgb>, right_color: Option<Rgb>) -> Self {
        Self {
            config: self.config.with_colors(left_color, right_color),
            host: self.host.clone(),
        }
    }

    /// 简化模式记录：通知管理员，不含调用位置，不渐变
    #[track_caller]
    pub fn log(&self, value: impl Into<LogValue>) -> Result<DispatchReport, LoggerError> {
        self.log_simplified(value, true)
    }

    /// 按简化模式开关记录，映射见 [`LogOptions::simplified`]
    #[track_caller]
    pub fn log_simplified(
        &self,
        value: impl Into<LogValue>,
        simplified: bool,
    ) -> Result<DispatchReport, LoggerError> {
        self.log_with(value, LogOptions::simplified(simplified))
    }

    #[track_caller]
    pub fn log_with(
        &self,
        value: impl Into<LogValue>,
        options: LogOptions,
    ) -> Result<DispatchReport, LoggerError> {
        let location = Location::caller();
        self.dispatch(value.into(), options, || Origin::resolve(location, LOGGER_FRAMES))
    }

    /// 使用已捕获的调用位置记录，供 `slog!` 使用
    pub fn log_from(
        &self,
        origin: Origin,
        value: impl Into<LogValue>,
        options: LogOptions,
    ) -> Result<DispatchReport, LoggerError> {
        self.dispatch(value.into(), options, || origin)
    }

    fn dispatch(
        &self,
        value: LogValue,
        options: LogOptions,
        origin: impl FnOnce() -> Origin,
    ) -> Result<DispatchReport, LoggerError> {
        let text = value.into_display_text();

        let anchor = if options.include_origin {
            format!("[{} @{}]", self.config.system_id(), origin())
        } else {
            format!("[{}]", self.config.system_id())
        };
        let console_line = format!("{anchor} : {text}");
        self.host.console.write(Level::INFO, &console_line);

        let mut report = DispatchReport {
            console_line,
            delivered: 0,
            failed: 0,
        };

        if options.notify_users {
            let message = self.user_message(&text, options.colorize);
            for user in self.host.users.online_users()? {
                if !user.is_operator() {
                    continue;
                }
                match user.deliver(&message) {
                    Ok(()) => report.delivered += 1,
                    Err(error) => {
                        debug!(user = user.name(), %error, "skipped log notification");
                        report.failed += 1;
                    }
                }
            }
        }

        Ok(report)
    }

    /// 管理员消息：`[系统 - HH:MM:SS] : 文本`
    fn user_message(&self, text: &str, colorize: bool) -> StyledMessage {
        let time = self.host.clock.time_of_day().format(TIME_FORMAT);
        let anchor = format!("[{} - {}]", self.config.system_id(), time);

        if colorize {
            gradient_between(
                &format!("{anchor} :"),
                self.config.left_color(),
                self.config.right_color(),
            )
            .then(StyledMessage::flat(&format!(" {text}"), named::GRAY))
        } else {
            StyledMessage::flat(&format!("{anchor} : {text}"), named::YELLOW)
        }
    }
}

/// 在调用处捕获函数路径后记录日志
///
/// ```ignore
/// slog!(logger, "match started")?;
/// slog!(logger, &score, simplified = false)?;
/// slog!(logger, &score, LogOptions::new(false, true, false))?;
/// ```
#[macro_export]
macro_rules! slog {
    ($logger:expr, $value:expr) => {
        $crate::slog!($logger, $value, simplified = true)
    };
    ($logger:expr, $value:expr, simplified = $simplified:expr) => {
        $logger.log_from(
            $crate::origin!(),
            $value,
            $crate::core::dispatcher::LogOptions::simplified($simplified),
        )
    };
    ($logger:expr, $value:expr, $options:expr) => {
        $logger.log_from($crate::origin!(), $value, $options)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Clock, ConnectedUser, ConsoleSink, FixedClock, MailboxUser, Roster, UserDirectory};
    use chrono::NaiveTime;
    use std::sync::{Arc, Mutex};

    const ORIGIN_ONLY: LogOptions = LogOptions::new(false, true, false);

    #[derive(Default)]
    struct RecordingConsole {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingConsole {
        fn lines(&self) -> Vec<(Level, String)> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ConsoleSink for RecordingConsole {
        fn write(&self, level: Level, line: &str) {
            self.lines.lock().unwrap().push((level, line.to_string()));
        }
    }

    struct BrokenDirectory;

    impl UserDirectory for BrokenDirectory {
        fn online_users(&self) -> Result<Vec<Arc<dyn ConnectedUser>>, DirectoryError> {
            Err(DirectoryError::Unavailable("server stopping".to_string()))
        }
    }

    struct Fixture {
        console: Arc<RecordingConsole>,
        roster: Arc<Roster>,
        operator: Arc<MailboxUser>,
        player: Arc<MailboxUser>,
        logger: SLogger,
    }

    fn fixture() -> Fixture {
        let console = Arc::new(RecordingConsole::default());
        let roster = Arc::new(Roster::new());
        let operator = Arc::new(MailboxUser::new("admin", true));
        let player = Arc::new(MailboxUser::new("player", false));
        roster.join(operator.clone()).unwrap();
        roster.join(player.clone()).unwrap();

        let clock: Arc<dyn Clock> = Arc::new(FixedClock(NaiveTime::from_hms_opt(9, 5, 7).unwrap()));
        let host = HostServices::new(console.clone(), roster.clone(), clock);
        let logger = SLogger::new(LoggerConfig::new("Arena"), host);

        Fixture {
            console,
            roster,
            operator,
            player,
            logger,
        }
    }

    #[track_caller]
    fn wrapped_log(logger: &SLogger, value: &str) -> DispatchReport {
        logger.log_simplified(value, false).unwrap()
    }

    #[test]
    fn simplified_truth_table() {
        assert_eq!(LogOptions::simplified(true), LogOptions::new(true, false, false));
        assert_eq!(LogOptions::simplified(false), LogOptions::new(false, true, true));
        assert_eq!(LogOptions::default(), LogOptions::simplified(true));
    }

    #[test]
    fn default_log_notifies_operators_with_flat_message() {
        let f = fixture();
        let report = f.logger.log("match started").unwrap();

        assert_eq!(report.console_line, "[Arena] : match started");
        assert_eq!(report.delivered, 1);
        assert_eq!(
            f.console.lines(),
            vec![(Level::INFO, "[Arena] : match started".to_string())]
        );

        let received = f.operator.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].plain_text(), "[Arena - 09:05:07] : match started");
        assert_eq!(received[0].segments().len(), 1);
        assert_eq!(received[0].segments()[0].color, named::YELLOW);
        assert!(f.player.received().is_empty());
    }

    #[test]
    fn full_mode_logs_origin_without_notifying() {
        let f = fixture();
        let (report, line) = (f.logger.log_simplified(&42, false).unwrap(), line!());

        assert_eq!(
            report.console_line,
            format!("[Arena @tests.full_mode_logs_origin_without_notifying(dispatcher.rs:{line})] : 42")
        );
        assert_eq!(report.delivered, 0);
        assert!(f.operator.received().is_empty());
    }

    #[test]
    fn origin_is_the_caller_at_any_depth() {
        let f = fixture();
        let (direct, direct_line) = (f.logger.log_with("a", ORIGIN_ONLY).unwrap(), line!());
        let (delegated, delegated_line) = (f.logger.log_simplified("b", false).unwrap(), line!());
        let (wrapped, wrapped_line) = (wrapped_log(&f.logger, "c"), line!());

        let scope = "@tests.origin_is_the_caller_at_any_depth";
        assert!(direct.console_line.contains(&format!("{scope}(dispatcher.rs:{direct_line})")));
        assert!(delegated.console_line.contains(&format!("{scope}(dispatcher.rs:{delegated_line})")));
        assert!(wrapped.console_line.contains(&format!("{scope}(dispatcher.rs:{wrapped_line})")));
    }

    #[inline(never)]
    fn start_match(logger: &SLogger) -> (DispatchReport, u32) {
        (logger.log_with("x", ORIGIN_ONLY).unwrap(), line!())
    }

    #[test]
    fn origin_names_the_calling_helper_function() {
        let f = fixture();
        let (report, line) = start_match(&f.logger);
        assert_eq!(
            report.console_line,
            format!("[Arena @tests.start_match(dispatcher.rs:{line})] : x")
        );
    }

    #[test]
    fn logger_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SLogger>();

        let f = fixture();
        let logger = Arc::new(f.logger);
        let handles: Vec<_> = (0..2)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || logger.log(i).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().delivered, 1);
        }

        assert_eq!(f.console.lines().len(), 2);
        assert_eq!(f.operator.received().len(), 2);
    }

    #[test]
    fn slog_macro_names_the_calling_function() {
        let f = fixture();
        let (report, line) = (crate::slog!(f.logger, "tick", ORIGIN_ONLY).unwrap(), line!());

        assert_eq!(
            report.console_line,
            format!("[Arena @tests.slog_macro_names_the_calling_function(dispatcher.rs:{line})] : tick")
        );
    }

    #[test]
    fn slog_macro_defaults_to_simplified() {
        let f = fixture();
        let report = crate::slog!(f.logger, "quick").unwrap();
        assert_eq!(report.console_line, "[Arena] : quick");
        assert_eq!(report.delivered, 1);
    }

    #[test]
    fn null_value_uses_placeholder() {
        let f = fixture();
        let report = f.logger.log(LogValue::null()).unwrap();
        assert_eq!(report.console_line, "[Arena] : ⚠ null ⚠");

        let missing: Option<&str> = None;
        let report = f.logger.log_simplified(missing, false).unwrap();
        assert!(report.console_line.ends_with(" : ⚠ null ⚠"));
    }

    #[test]
    fn colorized_message_has_gradient_anchor_and_gray_text() {
        let f = fixture();
        f.logger
            .log_with("boss spawned", LogOptions::new(true, false, true))
            .unwrap();

        let received = f.operator.received();
        let message = &received[0];
        let anchor = "[Arena - 09:05:07] :";
        assert_eq!(message.plain_text(), format!("{anchor} boss spawned"));

        let expected = gradient_between(anchor, Rgb::from_hex(0xffee00), Rgb::from_hex(0xe600da));
        let anchor_len = anchor.chars().count();
        assert_eq!(&message.segments()[..anchor_len], expected.segments());

        let tail = &message.segments()[anchor_len];
        assert_eq!(tail.text, " boss spawned");
        assert_eq!(tail.color, named::GRAY);
        assert_eq!(message.segments().len(), anchor_len + 1);
    }

    #[test]
    fn with_colors_changes_gradient_only() {
        let f = fixture();
        let red = Rgb::from_hex(0xff0000);
        let logger = f.logger.with_colors(Some(red), None);
        logger
            .log_with("x", LogOptions::new(true, false, true))
            .unwrap();

        assert_eq!(logger.config().right_color(), Rgb::from_hex(0xe600da));
        assert_eq!(f.logger.config().left_color(), Rgb::from_hex(0xffee00));
        assert_eq!(f.operator.received()[0].segments()[0].color, red);
    }

    #[test]
    fn disconnected_operator_is_skipped() {
        let f = fixture();
        let other = Arc::new(MailboxUser::new("moderator", true));
        f.roster.join(other.clone()).unwrap();
        f.operator.disconnect();

        let report = f.logger.log("still running").unwrap();
        assert_eq!(report.delivered, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(other.received().len(), 1);
    }

    #[test]
    fn directory_failure_propagates_after_console_write() {
        let console = Arc::new(RecordingConsole::default());
        let host = HostServices::new(
            console.clone(),
            Arc::new(BrokenDirectory),
            Arc::new(FixedClock(NaiveTime::from_hms_opt(0, 0, 0).unwrap())),
        );
        let logger = SLogger::new(LoggerConfig::new("Arena"), host);

        let error = logger.log("boom").unwrap_err();
        assert!(matches!(error, LoggerError::Directory(DirectoryError::Unavailable(_))));
        assert_eq!(console.lines().len(), 1);

        // 不通知用户时不会读取目录
        assert!(logger.log_simplified("fine", false).is_ok());
    }
}
