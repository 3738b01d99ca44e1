//! gen 命令处理器

use super::{CommandContext, CommandHandler};
use crate::codegen::{self, Flavor};
use crate::config::format::AnnotatedParser;
use crate::error::Result;
use crate::infrastructure::{Settings, paths};

/// gen 命令：从示例文件生成配置模块
pub struct GenCommand {
    settings: Settings,
}

impl GenCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl CommandHandler for GenCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let example = self.settings.example_path(&ctx.cwd);
        let schema = AnnotatedParser::parse_file(&example)?;

        let flavor = Flavor::from_js_flag(self.settings.js());
        let out = self.settings.out_path(&ctx.cwd);
        let source = codegen::generate(&schema, flavor);

        paths::write_file_safe(&out, &source)?;
        tracing::info!(path = %out.display(), ?flavor, entries = schema.entries.len(), "wrote config module");

        println!("generated {}", paths::display_relative(&out, &ctx.cwd));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir) -> CommandContext {
        CommandContext {
            verbose: false,
            cwd: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_gen_writes_typescript_into_src() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join(".env.example"), "# PORT:number=3000\nPORT=").unwrap();

        GenCommand::new(Settings::default()).execute(&ctx(&dir)).unwrap();

        let ts = std::fs::read_to_string(dir.path().join("src").join("config.ts")).unwrap();
        assert!(ts.contains("PORT: asNumber(readEnv('PORT', '3000'), 'PORT'),"));
    }

    #[test]
    fn test_gen_js_flavor() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env.example"), "HOST=").unwrap();

        let settings = Settings {
            js: Some(true),
            ..Default::default()
        };
        GenCommand::new(settings).execute(&ctx(&dir)).unwrap();

        let js = std::fs::read_to_string(dir.path().join("config.js")).unwrap();
        assert!(js.contains("@typedef {Object} EnvConfig"));
        assert!(!dir.path().join("config.ts").exists());
    }

    #[test]
    fn test_gen_missing_example() {
        let dir = TempDir::new().unwrap();
        let result = GenCommand::new(Settings::default()).execute(&ctx(&dir));
        assert!(matches!(result, Err(crate::error::EnvError::FileNotFound(_))));
    }
}
