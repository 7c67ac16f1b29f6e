// ============================================================================
// SLogger - 日志值数据模型
// ============================================================================
//
// 文件: src/models/value.rs
// 职责: 待记录值到显示文本的转换
// 边界:
//   - ✅ 任意 Display 值的文本转换
//   - ✅ 空值占位处理
//   - ❌ 不应包含日志分发逻辑
//
// ============================================================================

use std::fmt::Display;

use crate::utils::constants::NULL_PLACEHOLDER;

/// 待记录的值，构造时即转换为文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogValue(Option<String>);

impl LogValue {
    /// 空值，显示为占位文本
    pub fn null() -> Self {
        Self(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// 最终显示的文本
    pub fn display_text(&self) -> &str {
        self.0.as_deref().unwrap_or(NULL_PLACEHOLDER)
    }

    pub fn into_display_text(self) -> String {
        self.0.unwrap_or_else(|| NULL_PLACEHOLDER.to_string())
    }
}

impl<T: Display + ?Sized> From<&T> for LogValue {
    fn from(value: &T) -> Self {
        Self(Some(value.to_string()))
    }
}

impl<T: Display> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        Self(value.map(|v| v.to_string()))
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

/// 按值传入的基本类型
macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    Self(Some(value.to_string()))
                }
            }
        )*
    };
}

impl_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
