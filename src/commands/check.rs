//! check 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::CheckService;
use crate::config::format::AnnotatedParser;
use crate::error::{EnvError, Result};
use crate::infrastructure::Settings;

/// check 命令：用 schema 校验当前进程环境
pub struct CheckCommand {
    settings: Settings,
}

impl CheckCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl CommandHandler for CheckCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let schema = AnnotatedParser::parse_file(&self.settings.example_path(&ctx.cwd))?;
        let report = CheckService::new(&schema).check_process_env(self.settings.strict());

        if !report.is_ok() {
            return Err(EnvError::Validation(report.errors));
        }

        if ctx.verbose {
            for (key, value) in &report.values {
                println!("{} = {}", key, value);
            }
        }
        println!("ok");
        Ok(())
    }
}
