//! 类型校验器
//!
//! 每种类型一个纯函数：输入原始字符串（可能缺失），输出转换后的值或
//! [`ValidationError`]。错误信息与生成模块中的运行时校验保持一致。

use crate::domain::models::{EnvType, SchemaEntry};
use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 最简邮箱形状：local@domain.tld
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// 校验通过后的值
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Json(serde_json::Value),
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::String(s) => f.write_str(s),
            EnvValue::Number(n) => write!(f, "{}", n),
            EnvValue::Boolean(b) => write!(f, "{}", b),
            EnvValue::Json(v) => write!(f, "{}", v),
        }
    }
}

fn is_blank(x: Option<&str>) -> bool {
    x.is_none_or(str::is_empty)
}

/// 数值转换，语义对齐 JavaScript 的 `Number()`
fn coerce_number(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }
            // 按 f64 累加，超过 u64 范围时仍得到有限值
            return digits.chars().try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            });
        }
    }

    let unsigned = t.strip_prefix(['+', '-']).unwrap_or(t);
    if unsigned == "Infinity" {
        return Some(if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str 还接受 "inf"/"nan"，这里只放行数字字符
    if !unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    t.parse::<f64>().ok()
}

/// 数值：缺失/空报 required，无法转换报 must be number
pub fn as_number(raw: Option<&str>, key: &str) -> ValidationResult<f64> {
    let Some(x) = raw.filter(|s| !s.is_empty()) else {
        return Err(ValidationError::required(key));
    };
    coerce_number(x)
        .filter(|n| !n.is_nan())
        .ok_or_else(|| ValidationError::new(key, format!("{key} must be number")))
}

/// 布尔：从不失败，1/true/yes/on（大小写不敏感）为 true
pub fn as_boolean(raw: Option<&str>) -> bool {
    match raw {
        None | Some("") => false,
        Some(x) => matches!(x.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
    }
}

/// 枚举：必须精确匹配可选值之一
pub fn as_enum(raw: Option<&str>, key: &str, options: &[String]) -> ValidationResult<String> {
    match raw {
        Some(x) if !x.is_empty() && options.iter().any(|o| o == x) => Ok(x.to_string()),
        _ => Err(ValidationError::new(
            key,
            format!("{key} must be one of {}", options.join(",")),
        )),
    }
}

/// URL：必须是绝对 URL，返回规范化后的字符串
pub fn as_url(raw: Option<&str>, key: &str) -> ValidationResult<String> {
    raw.and_then(|x| url::Url::parse(x).ok())
        .map(|u| u.to_string())
        .ok_or_else(|| ValidationError::new(key, format!("{key} must be a valid URL")))
}

pub fn as_email(raw: Option<&str>, key: &str) -> ValidationResult<String> {
    match raw {
        Some(x) if !x.is_empty() && EMAIL_PATTERN.is_match(x) => Ok(x.to_string()),
        _ => Err(ValidationError::new(
            key,
            format!("{key} must be a valid email"),
        )),
    }
}

pub fn as_json(raw: Option<&str>, key: &str) -> ValidationResult<serde_json::Value> {
    raw.and_then(|x| serde_json::from_str(x).ok())
        .ok_or_else(|| ValidationError::new(key, format!("{key} must be valid JSON")))
}

/// 字符串：只有值和默认值都为空时失败
pub fn as_string(raw: Option<&str>, default: Option<&str>, key: &str) -> ValidationResult<String> {
    if !is_blank(raw) {
        return Ok(raw.unwrap_or_default().to_string());
    }
    if !is_blank(default) {
        return Ok(default.unwrap_or_default().to_string());
    }
    Err(ValidationError::required(key))
}

/// 取有效值：环境值（非空）> 声明的默认值 > 缺失
pub fn resolve<'a>(entry: &'a SchemaEntry, env_value: Option<&'a str>) -> Option<&'a str> {
    env_value
        .filter(|v| !v.is_empty())
        .or(entry.default_value.as_deref())
}

/// 按条目类型分派校验，`raw` 为已解析的有效值
pub fn validate_entry(entry: &SchemaEntry, raw: Option<&str>) -> ValidationResult<EnvValue> {
    let key = entry.key.as_str();
    match entry.env_type {
        EnvType::String => {
            as_string(raw, entry.default_value.as_deref(), key).map(EnvValue::String)
        }
        EnvType::Number => as_number(raw, key).map(EnvValue::Number),
        EnvType::Boolean => Ok(EnvValue::Boolean(as_boolean(raw))),
        EnvType::Enum => as_enum(raw, key, entry.options()).map(EnvValue::String),
        EnvType::Url => as_url(raw, key).map(EnvValue::String),
        EnvType::Email => as_email(raw, key).map(EnvValue::String),
        EnvType::Json => as_json(raw, key).map(EnvValue::Json),
    }
}
