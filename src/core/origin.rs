// ============================================================================
// SLogger - 调用位置
// ============================================================================
//
// 文件: src/core/origin.rs
// 职责: 记录日志调用者的源码位置并格式化
// 边界:
//   - ✅ 调用位置捕获 (#[track_caller])
//   - ✅ 函数路径捕获宏
//   - ✅ Owner.method(File:line) 格式化
//   - ❌ 不应包含日志分发逻辑
//
// ============================================================================

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// 栈回溯时最多收集的外部帧数
const MAX_OUTSIDE_FRAMES: usize = 32;

/// 标准库、运行时和回溯库自身的帧
const RUNTIME_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "<std::",
    "<core::",
    "<alloc::",
    "<backtrace::",
    "__rust",
    "rust_",
];

/// 日志调用者的源码位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    file: &'static str,
    line: u32,
    column: u32,
    /// 完整函数路径，例如 `arena::handlers::on_join`
    function: Option<Cow<'static, str>>,
}

impl Origin {
    pub const fn new(
        file: &'static str,
        line: u32,
        column: u32,
        function: Option<&'static str>,
    ) -> Self {
        Self {
            file,
            line,
            column,
            function: match function {
                Some(path) => Some(Cow::Borrowed(path)),
                None => None,
            },
        }
    }

    /// 当前调用链上第一个不带 `#[track_caller]` 的调用点（不含函数路径）
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column(), None)
    }

    /// 回溯调用栈补全调用者的函数路径
    ///
    /// 跳过名称含 `internal` 任一标记的帧（日志器自身的入口），取其后第一个
    /// 非标准库帧；若有帧恰好落在 `location` 上则优先取它，这样经过
    /// `#[track_caller]` 包装函数时函数名和行号仍然一致。文件和行号始终取自
    /// `location`。符号无法解析时只保留 `location`。
    pub fn resolve(location: &'static Location<'static>, internal: &[&str]) -> Self {
        let mut origin = Self::from_location(location);
        let frames = outside_frames(internal);
        let chosen = frames
            .iter()
            .find(|frame| frame.is_at(location))
            .or_else(|| frames.first());
        if let Some(frame) = chosen {
            origin.function = Some(Cow::Owned(frame.function.clone()));
        }
        origin
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// 文件名（不含目录）
    pub fn file_name(&self) -> &'static str {
        let file = self.file;
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }

    /// `Owner.method`，没有函数路径时退回文件名主干
    pub fn scope(&self) -> String {
        let Some(path) = self.function().map(trim_closures).filter(|p| !p.is_empty()) else {
            let file = self.file;
            return Path::new(file)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(file)
                .to_string();
        };

        let mut parts = path.rsplit("::");
        match (parts.next(), parts.next()) {
            (Some(method), Some(owner)) => format!("{owner}.{method}"),
            (Some(method), None) => method.to_string(),
            _ => path.to_string(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:{})", self.scope(), self.file_name(), self.line)
    }
}

/// 回溯得到的外部帧
struct WalkedFrame {
    function: String,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl WalkedFrame {
    fn is_at(&self, location: &Location<'_>) -> bool {
        self.line == Some(location.line())
            && self.file.as_deref().and_then(Path::file_name)
                == Path::new(location.file()).file_name()
    }
}

/// 由内向外遍历调用栈，收集越过日志器帧之后的外部帧
fn outside_frames(internal: &[&str]) -> Vec<WalkedFrame> {
    let mut frames = Vec::new();
    let mut passed_logger = false;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let Some(name) = symbol.name() else {
                return;
            };
            let name = format!("{name:#}");
            if internal.iter().any(|marker| name.contains(marker)) {
                passed_logger = true;
                return;
            }
            if !passed_logger || is_runtime_frame(&name) {
                return;
            }
            frames.push(WalkedFrame {
                function: normalize_symbol(&name),
                file: symbol.filename().map(Path::to_path_buf),
                line: symbol.lineno(),
            });
        });
        frames.len() < MAX_OUTSIDE_FRAMES
    });

    frames
}

fn is_runtime_frame(name: &str) -> bool {
    RUNTIME_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// 符号名转为普通路径：`<T as Trait>::m` 取 `T::m`，去掉 `::<..>` 泛型参数和闭包后缀
fn normalize_symbol(name: &str) -> String {
    let name = strip_generic_args(name);
    let path = match name.strip_prefix('<').and_then(split_qualified) {
        Some((self_ty, tail)) => {
            let self_ty = self_ty.split(" as ").next().unwrap_or(self_ty);
            format!("{self_ty}{tail}")
        }
        None => name,
    };
    trim_closures(&path).to_string()
}

/// `T as Trait>::m` 拆成 `T as Trait` 和 `::m`
fn split_qualified(rest: &str) -> Option<(&str, &str)> {
    let mut depth = 1usize;
    for (index, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&rest[..index], &rest[index + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_generic_args(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut depth = 0usize;
    let mut index = 0;

    while let Some(c) = name[index..].chars().next() {
        if depth == 0 && name[index..].starts_with("::<") {
            depth = 1;
            index += 3;
            continue;
        }
        match (depth, c) {
            (0, _) => output.push(c),
            (_, '<') => depth += 1,
            (_, '>') => depth -= 1,
            _ => {}
        }
        index += c.len_utf8();
    }

    output
}

/// 去掉闭包产生的 `::{{closure}}` 后缀
fn trim_closures(mut path: &str) -> &str {
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// 展开处所在函数的完整路径
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// 展开处的调用位置（含函数路径）
#[macro_export]
macro_rules! origin {
    () => {
        $crate::core::origin::Origin::new(
            file!(),
            line!(),
            column!(),
            Some($crate::function_path!()),
        )
    };
}
