//! 环境变量 schema 实体模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 变量类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    #[default]
    String,
    Number,
    Boolean,
    Enum,
    Url,
    Email,
    Json,
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnvType {
    /// 全部类型，按固定顺序
    pub const ALL: [EnvType; 7] = [
        EnvType::String,
        EnvType::Number,
        EnvType::Boolean,
        EnvType::Enum,
        EnvType::Url,
        EnvType::Email,
        EnvType::Json,
    ];

    /// 从注释中的类型名解析（大小写不敏感）
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "string" => Some(EnvType::String),
            "number" => Some(EnvType::Number),
            "boolean" => Some(EnvType::Boolean),
            "enum" => Some(EnvType::Enum),
            "url" => Some(EnvType::Url),
            "email" => Some(EnvType::Email),
            "json" => Some(EnvType::Json),
            _ => None,
        }
    }

    /// 解析类型名，未知类型回退为 string
    #[must_use]
    pub fn parse_or_string(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvType::String => "string",
            EnvType::Number => "number",
            EnvType::Boolean => "boolean",
            EnvType::Enum => "enum",
            EnvType::Url => "url",
            EnvType::Email => "email",
            EnvType::Json => "json",
        }
    }
}

/// 单个变量规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub env_type: EnvType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl SchemaEntry {
    /// 没有注释的变量：string 类型，无默认值
    #[must_use]
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            env_type: EnvType::String,
            enum_values: None,
            default_value: None,
        }
    }

    /// 枚举可选值（非枚举或未提供时为空）
    #[must_use]
    pub fn options(&self) -> &[String] {
        self.enum_values.as_deref().unwrap_or(&[])
    }
}

/// 整个 .env.example 的 schema，顺序即赋值行出现顺序
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvSchema {
    pub entries: Vec<SchemaEntry>,
}

impl EnvSchema {
    #[must_use]
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }

    /// 是否声明了某个变量
    #[must_use]
    pub fn declares(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// 去重后的条目：每个键保留首次出现的位置，使用最后一次出现的规则
    #[must_use]
    pub fn unique_entries(&self) -> Vec<&SchemaEntry> {
        let mut out: Vec<&SchemaEntry> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match out.iter_mut().find(|e| e.key == entry.key) {
                Some(slot) => *slot = entry,
                None => out.push(entry),
            }
        }
        out
    }

    /// 输出 JSON（两空格缩进）
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_entry() -> SchemaEntry {
        SchemaEntry {
            key: "MODE".to_string(),
            env_type: EnvType::Enum,
            enum_values: Some(vec!["dev".to_string(), "prod".to_string()]),
            default_value: Some("dev".to_string()),
        }
    }

    #[test]
    fn test_env_type_parse_case_insensitive() {
        assert_eq!(EnvType::parse("NUMBER"), Some(EnvType::Number));
        assert_eq!(EnvType::parse("Url"), Some(EnvType::Url));
        assert_eq!(EnvType::parse("integer"), None);
        assert_eq!(EnvType::parse_or_string("integer"), EnvType::String);
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let schema = EnvSchema::new(vec![SchemaEntry::plain("HOST")]);
        let json = schema.to_json().unwrap();
        assert!(json.contains("\"type\": \"string\""));
        assert!(!json.contains("enumValues"));
        assert!(!json.contains("defaultValue"));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let schema = EnvSchema::new(vec![enum_entry()]);
        let json = schema.to_json().unwrap();
        assert!(json.contains("\"enumValues\""));
        assert!(json.contains("\"defaultValue\": \"dev\""));
    }

    #[test]
    fn test_json_reads_back_equal() {
        let schema = EnvSchema::new(vec![enum_entry(), SchemaEntry::plain("HOST")]);
        let back = EnvSchema::from_json(&schema.to_json().unwrap()).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_unique_entries_keeps_first_position_last_rule() {
        let mut second = SchemaEntry::plain("PORT");
        second.env_type = EnvType::Number;
        let schema = EnvSchema::new(vec![
            SchemaEntry::plain("PORT"),
            SchemaEntry::plain("HOST"),
            second.clone(),
        ]);

        let unique = schema.unique_entries();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0], &second);
        assert_eq!(unique[1].key, "HOST");
    }

    #[test]
    fn test_declares() {
        let schema = EnvSchema::new(vec![SchemaEntry::plain("PORT")]);
        assert!(schema.declares("PORT"));
        assert!(!schema.declares("FOO"));
    }
}
