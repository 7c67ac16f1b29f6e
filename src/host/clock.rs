// ============================================================================
// SLogger - 时钟实现
// ============================================================================
//
// 文件: src/host/clock.rs
// 职责: 本地时间来源实现
// 边界:
//   - ✅ 系统本地时间
//   - ✅ 固定时间（回放和测试）
//   - ❌ 不应包含时间格式化逻辑
//
// ============================================================================

use chrono::{Local, NaiveTime};

use super::Clock;

/// 系统本地时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// 始终返回同一时刻的时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.0
    }
}
