// ============================================================================
// SLogger - 宿主平台接口
// ============================================================================
//
// 文件: src/host/mod.rs
// 职责: 宿主平台协作者的抽象接口定义
// 边界:
//   - ✅ 控制台、在线用户、时钟、宿主标识接口
//   - ✅ 平台相关错误类型
//   - ✅ 常用实现重新导出
//   - ❌ 不应包含日志分发逻辑
//   - ❌ 不应包含渐变计算
//
// ============================================================================

pub mod clock;
pub mod console;
pub mod roster;

use chrono::NaiveTime;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;

use crate::models::message::StyledMessage;

pub use clock::{FixedClock, SystemClock};
pub use console::TracingConsole;
pub use roster::{MailboxUser, Roster};

/// 在线用户目录读取失败
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// 单个用户的消息投递失败
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("user {0} is no longer connected")]
    Disconnected(String),
    #[error("delivery to {user} failed: {reason}")]
    Failed { user: String, reason: String },
}

/// 系统控制台输出
pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// 在线用户
pub trait ConnectedUser: Send + Sync {
    fn name(&self) -> &str;

    /// 是否为管理员（接收管理通知）
    fn is_operator(&self) -> bool;

    fn deliver(&self, message: &StyledMessage) -> Result<(), DeliveryError>;
}

/// 在线用户目录，返回调用时刻的快照
pub trait UserDirectory: Send + Sync {
    fn online_users(&self) -> Result<Vec<Arc<dyn ConnectedUser>>, DirectoryError>;
}

/// 本地时间来源
pub trait Clock: Send + Sync {
    fn time_of_day(&self) -> NaiveTime;
}

/// 宿主标识（插件名称）
pub trait HostIdentity {
    fn system_id(&self) -> &str;
}

/// 日志器使用的全部宿主协作者
#[derive(Clone)]
pub struct HostServices {
    pub console: Arc<dyn ConsoleSink>,
    pub users: Arc<dyn UserDirectory>,
    pub clock: Arc<dyn Clock>,
}

impl HostServices {
    pub fn new(
        console: Arc<dyn ConsoleSink>,
        users: Arc<dyn UserDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            console,
            users,
            clock,
        }
    }

    /// tracing 控制台 + 系统时钟
    pub fn standard(users: Arc<dyn UserDirectory>) -> Self {
        Self::new(Arc::new(TracingConsole), users, Arc::new(SystemClock))
    }
}
