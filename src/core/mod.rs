// ============================================================================
// SLogger - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含宿主平台实现
//
// ============================================================================

pub mod dispatcher;
pub mod gradient;
pub mod origin;

// 重新导出常用类型
pub use dispatcher::{DispatchReport, LogOptions, LoggerError, SLogger};
pub use gradient::{gradient_between, gradient_text};
pub use origin::Origin;
