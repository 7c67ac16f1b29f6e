// ============================================================================
// SLogger - 终端用户
// ============================================================================
//
// 文件: src/ui/terminal.rs
// 职责: 将管理员消息打印到本地终端
// 边界:
//   - ✅ 样式消息的终端输出
//   - ❌ 不应包含消息渲染逻辑
//   - ❌ 不应包含日志分发逻辑
//
// ============================================================================

use std::io::{self, Write};

use crate::host::{ConnectedUser, DeliveryError};
use crate::models::message::StyledMessage;
use crate::utils::colors::Colors;

/// 通过标准输出接收消息的本地用户
#[derive(Debug, Clone)]
pub struct TerminalUser {
    name: String,
    operator: bool,
}

impl TerminalUser {
    pub fn new(name: impl Into<String>, operator: bool) -> Self {
        Self {
            name: name.into(),
            operator,
        }
    }
}

impl ConnectedUser for TerminalUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_operator(&self) -> bool {
        self.operator
    }

    fn deliver(&self, message: &StyledMessage) -> Result<(), DeliveryError> {
        let mut stdout = io::stdout().lock();
        writeln!(
            stdout,
            "{} {}",
            Colors::info(&format!("<{}>", self.name)),
            message.to_ansi()
        )
        .and_then(|_| stdout.flush())
        .map_err(|e| DeliveryError::Failed {
            user: self.name.clone(),
            reason: e.to_string(),
        })
    }
}
