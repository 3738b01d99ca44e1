//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::error::Result;
use std::path::PathBuf;

pub mod check;
pub mod generate;
pub mod schema;

pub use check::CheckCommand;
pub use generate::GenCommand;
pub use schema::SchemaCommand;

/// 命令上下文
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub verbose: bool,
    /// 相对路径的解析基准
    pub cwd: PathBuf,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
