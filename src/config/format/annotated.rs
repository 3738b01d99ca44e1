//! 带类型注释的 .env.example 解析器 (简单原则：透明的文本解析)

use crate::domain::models::{EnvSchema, EnvType, SchemaEntry};
use crate::error::Result;
use crate::infrastructure::paths;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// `# KEY:type(args)=default # 备注`
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#\s*([A-Z][A-Z0-9_]*)\s*:\s*([a-zA-Z]+)(?:\(([^)]*)\))?(?:\s*=\s*([^#\s].*?))?\s*(?:#.*)?$",
    )
    .expect("annotation pattern is valid")
});

/// `KEY=value`
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9_]*)\s*=\s*(.*)$").expect("assignment pattern is valid")
});

/// 任意换行约定，`\r\n` 算一个换行
static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("newline pattern is valid"));

/// 按行切分，行号与编辑器中看到的一致
fn split_lines(content: &str) -> regex::Split<'_, '_> {
    NEWLINE.split(content)
}

/// 注释声明的规则，等待与赋值行配对
#[derive(Debug, Clone)]
struct PendingRule {
    env_type: EnvType,
    enum_values: Option<Vec<String>>,
    default_value: Option<String>,
}

impl PendingRule {
    fn into_entry(self, key: &str) -> SchemaEntry {
        SchemaEntry {
            key: key.to_string(),
            env_type: self.env_type,
            enum_values: self.enum_values,
            default_value: self.default_value,
        }
    }
}

/// .env.example 解析器
pub struct AnnotatedParser;

impl AnnotatedParser {
    /// 解析 .env.example 内容
    ///
    /// 规则：
    /// - 忽略空行，每行先 trim
    /// - `# KEY:type(args)=default` 记录（覆盖）该键的待定规则
    /// - `KEY=value` 生成一个条目，使用该键最近的待定规则，否则为 string
    /// - 其他行静默跳过，从不报错
    /// - 同一键多次赋值会产生多个条目
    pub fn parse(content: &str) -> EnvSchema {
        let mut pending: HashMap<String, PendingRule> = HashMap::new();
        let mut entries = Vec::new();

        for (idx, line) in split_lines(content).enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with('#') {
                match Self::parse_annotation(trimmed) {
                    Some((key, rule)) => {
                        pending.insert(key, rule);
                    }
                    None => tracing::trace!(line = idx + 1, "plain comment"),
                }
                continue;
            }

            if let Some(caps) = ASSIGNMENT.captures(trimmed) {
                let key = &caps[1];
                let entry = match pending.get(key) {
                    Some(rule) => rule.clone().into_entry(key),
                    None => SchemaEntry::plain(key),
                };
                entries.push(entry);
            } else {
                tracing::debug!(line = idx + 1, content = trimmed, "skipped unrecognized line");
            }
        }

        EnvSchema::new(entries)
    }

    /// 从文件解析，文件不存在时返回 `FileNotFound`
    pub fn parse_file(path: &Path) -> Result<EnvSchema> {
        let content = paths::read_file(path)?;
        let schema = Self::parse(&content);
        tracing::debug!(path = %path.display(), entries = schema.entries.len(), "parsed example file");
        Ok(schema)
    }

    fn parse_annotation(line: &str) -> Option<(String, PendingRule)> {
        let caps = ANNOTATION.captures(line)?;
        let key = caps[1].to_string();
        let env_type = EnvType::parse_or_string(&caps[2]);
        let args = caps.get(3).map_or("", |m| m.as_str().trim());

        let enum_values = (env_type == EnvType::Enum && !args.is_empty()).then(|| {
            args.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        });

        let default_value = caps
            .get(4)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some((
            key,
            PendingRule {
                env_type,
                enum_values,
                default_value,
            },
        ))
    }
}
