//! 路径与文件工具 (传统原则：常识性接口设计)

use crate::error::{EnvError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 默认的示例文件名
pub const DEFAULT_EXAMPLE: &str = ".env.example";

/// 项目级配置文件名
pub const PROJECT_SETTINGS_FILE: &str = "envsaurus.toml";

/// 获取当前工作目录
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| EnvError::Config(format!("无法获取当前目录: {}", e)))
}

/// 用户级配置文件：<config_dir>/envsaurus/config.toml
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("envsaurus").join("config.toml"))
}

/// 解析示例文件路径（相对路径基于 `cwd`）
pub fn resolve_example(cwd: &Path, example: Option<&Path>) -> PathBuf {
    cwd.join(example.unwrap_or(Path::new(DEFAULT_EXAMPLE)))
}

/// 解析输出路径：未指定时存在 src 目录则为 src/config.ts，否则 config.ts
///
/// `js` 为 true 时把 `.ts` 后缀换成 `.js`。
pub fn resolve_out(cwd: &Path, out: Option<&Path>, js: bool) -> PathBuf {
    let path = match out {
        Some(custom) => cwd.join(custom),
        None if cwd.join("src").is_dir() => cwd.join("src").join("config.ts"),
        None => cwd.join("config.ts"),
    };

    if js && path.extension().is_some_and(|ext| ext == "ts") {
        path.with_extension("js")
    } else {
        path
    }
}

/// 相对 `base` 显示路径，无法相对化时原样显示
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 读取文件内容，返回错误时提供详细信息
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EnvError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| {
        EnvError::Io(std::io::Error::new(
            e.kind(),
            format!("读取文件 {} 失败: {}", path.display(), e),
        ))
    })
}

/// 安全写入文件 (使用临时文件 + 原子替换)
///
/// 临时文件由 tempfile 在目标目录中随机命名，不会覆盖旁边已有的文件。
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // 确保父目录存在
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
