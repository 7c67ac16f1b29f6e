// ============================================================================
// SLogger - 在线用户名单
// ============================================================================
//
// 文件: src/host/roster.rs
// 职责: 内存中的在线用户目录和用户实现
// 边界:
//   - ✅ 用户加入/离开
//   - ✅ 在线用户快照
//   - ✅ 消息收件箱用户
//   - ❌ 不应包含权限判定以外的会话管理
//   - ❌ 不应包含消息渲染逻辑
//
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use super::{ConnectedUser, DeliveryError, DirectoryError, UserDirectory};
use crate::models::message::StyledMessage;

/// 线程安全的在线用户名单
#[derive(Default)]
pub struct Roster {
    users: RwLock<Vec<Arc<dyn ConnectedUser>>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用户上线，同名用户会被替换
    pub fn join(&self, user: Arc<dyn ConnectedUser>) -> Result<(), DirectoryError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.retain(|existing| existing.name() != user.name());
        users.push(user);
        Ok(())
    }

    /// 用户下线，返回是否存在该用户
    pub fn leave(&self, name: &str) -> Result<bool, DirectoryError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let before = users.len();
        users.retain(|existing| existing.name() != name);
        Ok(users.len() != before)
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserDirectory for Roster {
    fn online_users(&self) -> Result<Vec<Arc<dyn ConnectedUser>>, DirectoryError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.clone())
    }
}

fn poisoned() -> DirectoryError {
    DirectoryError::Unavailable("roster lock poisoned".to_string())
}

/// 将收到的消息保存在内存中的用户
pub struct MailboxUser {
    name: String,
    operator: bool,
    connected: AtomicBool,
    inbox: Mutex<Vec<StyledMessage>>,
}

impl MailboxUser {
    pub fn new(name: impl Into<String>, operator: bool) -> Self {
        Self {
            name: name.into(),
            operator,
            connected: AtomicBool::new(true),
            inbox: Mutex::new(Vec::new()),
        }
    }

    /// 标记为已断开，之后的投递会失败
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::Relaxed);
    }

    /// 已收到的消息副本
    pub fn received(&self) -> Vec<StyledMessage> {
        self.inbox
            .lock()
            .map(|inbox| inbox.clone())
            .unwrap_or_default()
    }
}

impl ConnectedUser for MailboxUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_operator(&self) -> bool {
        self.operator
    }

    fn deliver(&self, message: &StyledMessage) -> Result<(), DeliveryError> {
        if !self.connected.load(Ordering::Relaxed) {
            return Err(DeliveryError::Disconnected(self.name.clone()));
        }

        let mut inbox = self.inbox.lock().map_err(|_| DeliveryError::Failed {
            user: self.name.clone(),
            reason: "inbox lock poisoned".to_string(),
        })?;
        inbox.push(message.clone());
        Ok(())
    }
}
