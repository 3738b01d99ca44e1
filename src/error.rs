//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

/// 单个变量的校验失败
///
/// `Display` 只输出 `message`，例如 `PORT must be number`。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// `KEY required`
    pub fn required(key: &str) -> Self {
        Self::new(key, format!("{key} required"))
    }
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("文件不存在: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported --format {0} (use json|yaml)")]
    UnsupportedFormat(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    /// check 命令收集到的全部校验失败
    #[error("{} 个变量校验失败", .0.len())]
    Validation(Vec<ValidationError>),
}

/// 详细的错误报告函数 (透明原则)
impl EnvError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        // 校验失败每条单独一行，两种模式相同
        if let EnvError::Validation(errors) = self {
            for err in errors {
                eprintln!("{}", err);
            }
            return;
        }

        if verbose {
            eprintln!("错误: {}", self);

            // thiserror 支持自动的 source() 链
            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                EnvError::FileNotFound(path) => eprintln!("文件不存在: {}", path.display()),
                EnvError::Io(err) => eprintln!("文件错误: {}", err),
                EnvError::UnsupportedFormat(_) => eprintln!("{}", self),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, EnvError>;
