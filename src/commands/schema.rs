//! schema 命令处理器

use super::{CommandContext, CommandHandler};
use crate::config::format::AnnotatedParser;
use crate::error::Result;
use crate::infrastructure::Settings;

/// schema 命令：以 JSON 或 YAML 打印 schema
pub struct SchemaCommand {
    settings: Settings,
}

impl SchemaCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl CommandHandler for SchemaCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        // 先校验格式，避免无谓的文件读取
        let format = self.settings.schema_format()?;
        let schema = AnnotatedParser::parse_file(&self.settings.example_path(&ctx.cwd))?;
        println!("{}", format.render(&schema)?);
        Ok(())
    }
}
