// ============================================================================
// SLogger - 渐变文本渲染
// ============================================================================
//
// 文件: src/core/gradient.rs
// 职责: 按颜色节点为文本逐字符分配渐变颜色
// 边界:
//   - ✅ 双色线性插值
//   - ✅ 多色分段插值
//   - ✅ 单色/无色退化处理
//   - ❌ 不应包含终端输出逻辑
//   - ❌ 不应包含日志分发逻辑
//
// ============================================================================

use crate::models::color::{named, Rgb};
use crate::models::message::StyledMessage;

/// 按颜色节点渲染渐变文本
///
/// - 没有节点时整段使用白色
/// - 一个节点时整段使用该颜色
/// - 两个节点时逐字符线性插值
/// - 更多节点时把文本平均切成 `节点数 - 1` 段，每段用相邻两个节点独立插值，
///   段与段之间的颜色不做平滑
pub fn gradient_text(text: &str, stops: &[Rgb]) -> StyledMessage {
    match stops {
        [] => StyledMessage::flat(text, named::WHITE),
        [only] => StyledMessage::flat(text, *only),
        [from, to] => gradient_between(text, *from, *to),
        _ => segmented(text, stops),
    }
}

/// 双色线性插值
///
/// 第 `i` 个字符的每个通道为 `from + ((to - from) / len) * i`。步长只在循环前
/// 用整数除法（向零截断）计算一次，所以最后一个字符通常达不到 `to`。
pub fn gradient_between(text: &str, from: Rgb, to: Rgb) -> StyledMessage {
    let letters: Vec<char> = text.chars().collect();
    let mut output = StyledMessage::new();
    if letters.is_empty() {
        return output;
    }

    let len = letters.len() as i64;
    let step = |source: u8, target: u8| (i64::from(target) - i64::from(source)) / len;
    let red_step = step(from.red(), to.red());
    let green_step = step(from.green(), to.green());
    let blue_step = step(from.blue(), to.blue());

    for (index, letter) in letters.iter().enumerate() {
        let index = index as i64;
        let color = Rgb::new(
            channel(from.red(), red_step, index),
            channel(from.green(), green_step, index),
            channel(from.blue(), blue_step, index),
        );
        output.push(letter.to_string(), color);
    }

    output
}

fn channel(source: u8, step: i64, index: i64) -> u8 {
    (i64::from(source) + step * index).clamp(0, 255) as u8
}

/// 多色节点：每段长度为 ceil(len / (节点数 - 1))，最后一段可能更短
fn segmented(text: &str, stops: &[Rgb]) -> StyledMessage {
    let letters: Vec<char> = text.chars().collect();
    let len = letters.len();
    let segment_len = len.div_ceil(stops.len() - 1);

    let mut output = StyledMessage::new();
    for (index, pair) in stops.windows(2).enumerate() {
        let start = index * segment_len;
        if start > len {
            break;
        }
        let end = (start + segment_len).min(len);
        let segment: String = letters[start..end].iter().collect();
        output.append(gradient_between(&segment, pair[0], pair[1]));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(message: &StyledMessage) -> Vec<Rgb> {
        message.segments().iter().map(|s| s.color).collect()
    }

    fn expected_channel(source: u8, target: u8, len: usize, index: usize) -> u8 {
        let step = (i64::from(target) - i64::from(source)) / len as i64;
        (i64::from(source) + step * index as i64) as u8
    }

    #[test]
    fn two_stops_match_worked_example() {
        let output = gradient_text("AB", &[Rgb::from_hex(0xff0000), Rgb::from_hex(0x0000ff)]);
        let segments = output.segments();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "A");
        assert_eq!(segments[0].color, Rgb::new(255, 0, 0));
        assert_eq!(segments[1].text, "B");
        assert_eq!(segments[1].color, Rgb::new(128, 0, 127));
    }

    #[test]
    fn two_stops_follow_step_law_for_every_character() {
        let from = Rgb::from_hex(0xffee00);
        let to = Rgb::from_hex(0xe600da);
        let text = "[Arena - 12:30:45] :";
        let output = gradient_between(text, from, to);
        let len = text.chars().count();

        assert_eq!(output.len(), len);
        assert_eq!(output.segments()[0].color, from);
        for (i, color) in colors(&output).into_iter().enumerate() {
            assert_eq!(color.red(), expected_channel(from.red(), to.red(), len, i));
            assert_eq!(color.green(), expected_channel(from.green(), to.green(), len, i));
            assert_eq!(color.blue(), expected_channel(from.blue(), to.blue(), len, i));
        }
        // 整数步长导致末尾达不到目标颜色
        assert_ne!(output.segments()[len - 1].color, to);
    }

    #[test]
    fn single_character_keeps_source_color() {
        let output = gradient_between("x", Rgb::from_hex(0x102030), Rgb::from_hex(0xffffff));
        assert_eq!(colors(&output), vec![Rgb::from_hex(0x102030)]);
    }

    #[test]
    fn one_stop_is_flat() {
        let stop = Rgb::from_hex(0x33cc99);
        let output = gradient_text("flat text", &[stop]);
        assert_eq!(output.plain_text(), "flat text");
        assert!(colors(&output).iter().all(|c| *c == stop));
    }

    #[test]
    fn no_stops_uses_white() {
        let output = gradient_text("plain", &[]);
        assert_eq!(colors(&output), vec![named::WHITE]);
        assert_eq!(output.plain_text(), "plain");
    }

    #[test]
    fn empty_text_yields_nothing() {
        let stops = [Rgb::from_hex(0xff0000), Rgb::from_hex(0x00ff00), Rgb::from_hex(0x0000ff)];
        assert!(gradient_text("", &[]).is_empty());
        assert!(gradient_text("", &stops[..1]).is_empty());
        assert!(gradient_text("", &stops[..2]).is_empty());
        assert!(gradient_text("", &stops).is_empty());
    }

    #[test]
    fn multi_stop_segments_restart_at_each_stop() {
        let red = Rgb::from_hex(0xff0000);
        let green = Rgb::from_hex(0x00ff00);
        let blue = Rgb::from_hex(0x0000ff);
        // 7 个字符, 2 段: 长度 4 和 3
        let output = gradient_text("abcdefg", &[red, green, blue]);

        assert_eq!(output.plain_text(), "abcdefg");
        let expected: Vec<Rgb> = colors(&gradient_between("abcd", red, green))
            .into_iter()
            .chain(colors(&gradient_between("efg", green, blue)))
            .collect();
        assert_eq!(colors(&output), expected);
        assert_eq!(output.segments()[4].color, green);
    }

    #[test]
    fn multi_stop_with_short_text_leaves_trailing_pairs_empty() {
        let stops = [
            Rgb::from_hex(0x000000),
            Rgb::from_hex(0x111111),
            Rgb::from_hex(0x222222),
            Rgb::from_hex(0x333333),
            Rgb::from_hex(0x444444),
        ];
        let output = gradient_text("ab", &stops);
        assert_eq!(output.plain_text(), "ab");
        assert_eq!(colors(&output), vec![stops[0], stops[1]]);
    }

    #[test]
    fn characters_are_unicode_scalars() {
        let output = gradient_text("⚠ é", &[Rgb::from_hex(0x000000), Rgb::from_hex(0x0000ff)]);
        let texts: Vec<&str> = output.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["⚠", " ", "é"]);
        assert_eq!(output.segments()[2].color, Rgb::new(0, 0, 170));
    }
}
