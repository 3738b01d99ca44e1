//! 分层配置
//!
//! 优先级（低 → 高）：
//! 1. 用户级 `<config_dir>/envsaurus/config.toml`
//! 2. 项目级 `./envsaurus.toml`
//! 3. 命令行参数
//!
//! ```toml
//! example = "config/.env.example"
//! out = "src/env.ts"
//! js = false
//! strict = true
//! format = "yaml"
//! ```

use crate::config::format::SchemaFormat;
use crate::error::{EnvError, Result};
use crate::infrastructure::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 一层配置，所有字段可选
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub example: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub js: Option<bool>,
    pub strict: Option<bool>,
    pub format: Option<String>,
}

impl Settings {
    /// 解析 TOML 配置，错误信息带上来源路径
    fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| EnvError::Config(format!("{}: {}", origin.display(), e)))
    }

    /// 从文件加载，文件不存在时返回 None
    pub fn load_file(path: &Path) -> Result<Option<Self>> {
        if !paths::file_exists(path) {
            return Ok(None);
        }

        let content = paths::read_file(path)?;
        let settings = Self::parse_toml(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(Some(settings))
    }

    /// 加载用户级与项目级配置并合并
    pub fn load_layered(cwd: &Path) -> Result<Self> {
        let mut merged = Settings::default();

        if let Some(user_path) = paths::user_settings_path() {
            if let Some(user) = Self::load_file(&user_path)? {
                merged = merged.merge(user);
            }
        }

        if let Some(project) = Self::load_file(&cwd.join(paths::PROJECT_SETTINGS_FILE))? {
            merged = merged.merge(project);
        }

        Ok(merged)
    }

    /// 用 `over` 中已设置的字段覆盖当前层
    #[must_use]
    pub fn merge(self, over: Settings) -> Settings {
        Settings {
            example: over.example.or(self.example),
            out: over.out.or(self.out),
            js: over.js.or(self.js),
            strict: over.strict.or(self.strict),
            format: over.format.or(self.format),
        }
    }

    pub fn example_path(&self, cwd: &Path) -> PathBuf {
        paths::resolve_example(cwd, self.example.as_deref())
    }

    pub fn out_path(&self, cwd: &Path) -> PathBuf {
        paths::resolve_out(cwd, self.out.as_deref(), self.js())
    }

    pub fn js(&self) -> bool {
        self.js.unwrap_or(false)
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// 输出格式，默认 json；未知格式报 `UnsupportedFormat`
    pub fn schema_format(&self) -> Result<SchemaFormat> {
        self.format
            .as_deref()
            .map_or(Ok(SchemaFormat::Json), str::parse)
    }
}
