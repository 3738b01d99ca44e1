//! schema 输出格式：JSON 与最简 YAML

use crate::domain::models::EnvSchema;
use crate::error::{EnvError, Result};
use std::str::FromStr;

/// schema 命令的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for SchemaFormat {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(SchemaFormat::Json),
            "yaml" => Ok(SchemaFormat::Yaml),
            other => Err(EnvError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl SchemaFormat {
    /// 按格式序列化 schema
    pub fn render(&self, schema: &EnvSchema) -> Result<String> {
        match self {
            SchemaFormat::Json => Ok(schema.to_json()?),
            SchemaFormat::Yaml => render_yaml(schema),
        }
    }
}

/// 手写的最简 YAML：两空格缩进，枚举值用一个方括号列表
fn render_yaml(schema: &EnvSchema) -> Result<String> {
    let mut lines = vec!["entries:".to_string()];

    for entry in &schema.entries {
        lines.push(format!("  - key: {}", entry.key));
        lines.push(format!("    type: {}", entry.env_type));
        if let Some(values) = entry.enum_values.as_ref().filter(|v| !v.is_empty()) {
            lines.push(format!("    enumValues: [{}]", values.join(", ")));
        }
        if let Some(default) = &entry.default_value {
            lines.push(format!("    defaultValue: {}", serde_json::to_string(default)?));
        }
    }

    Ok(lines.join("\n"))
}
