// ============================================================================
// SLogger - 样式消息数据模型
// ============================================================================
//
// 文件: src/models/message.rs
// 职责: 带颜色的消息片段序列定义
// 边界:
//   - ✅ 消息片段结构定义
//   - ✅ 片段拼接和纯文本提取
//   - ✅ ANSI 终端渲染入口
//   - ❌ 不应包含渐变计算
//   - ❌ 不应包含消息投递逻辑
//
// ============================================================================

use super::color::Rgb;
use crate::utils::colors::Colors;

/// 单个带颜色的文本片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    /// 片段文本
    pub text: String,
    /// 片段颜色
    pub color: Rgb,
}

/// 按顺序排列的带颜色片段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledMessage {
    segments: Vec<StyledSegment>,
}

impl StyledMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整段文本使用同一颜色；空文本得到空消息
    pub fn flat(text: &str, color: Rgb) -> Self {
        let mut message = Self::new();
        message.push(text, color);
        message
    }

    /// 追加一个片段，空文本会被忽略
    pub fn push(&mut self, text: impl Into<String>, color: Rgb) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(StyledSegment { text, color });
        }
    }

    /// 追加另一条消息的全部片段
    pub fn append(&mut self, other: StyledMessage) {
        self.segments.extend(other.segments);
    }

    /// 链式追加
    pub fn then(mut self, other: StyledMessage) -> Self {
        self.append(other);
        self
    }

    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// 去掉颜色后的文本
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// 渲染为 ANSI 真彩色文本
    pub fn to_ansi(&self) -> String {
        self.segments
            .iter()
            .map(|s| Colors::paint(&s.text, s.color))
            .collect()
    }
}

impl IntoIterator for StyledMessage {
    type Item = StyledSegment;
    type IntoIter = std::vec::IntoIter<StyledSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}
