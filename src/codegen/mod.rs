//! 配置模块生成器
//!
//! 把 [`EnvSchema`] 渲染为一个自包含的配置模块：每个变量一个字段，
//! 读取环境变量、回退到默认值并按类型校验。
//!
//! # 两种风格
//!
//! - [`Flavor::TypeScript`]：静态类型模块，枚举生成字面量联合类型
//! - [`Flavor::JavaScript`]：运行时模块，类型写在 JSDoc 中
//!
//! 输出是确定的：相同的 schema 总是得到字节级相同的文本。

pub mod runtime;

use crate::domain::models::{EnvSchema, EnvType, SchemaEntry};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Write as _;

const HEADER: &str = "// Generated by envsaurus. Do not edit by hand.";

/// 生成风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    #[default]
    TypeScript,
    JavaScript,
}

impl Flavor {
    pub fn from_js_flag(js: bool) -> Self {
        if js { Flavor::JavaScript } else { Flavor::TypeScript }
    }
}

/// 渲染配置模块
///
/// 同名变量只生成一个字段：位置取第一次出现，规则取最后一次出现。
pub fn generate(schema: &EnvSchema, flavor: Flavor) -> String {
    let entries = schema.unique_entries();
    let names = EnumNames::assign(&entries);
    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');
    if flavor == Flavor::JavaScript {
        out.push_str("// @ts-check\n");
    }

    // 只输出用到的校验函数，按固定类型顺序
    let used: BTreeSet<EnvType> = entries.iter().map(|e| e.env_type).collect();
    out.push('\n');
    out.push_str(runtime::read_env(flavor));
    out.push('\n');
    for env_type in &used {
        out.push('\n');
        out.push_str(runtime::helper(*env_type, flavor));
        out.push('\n');
    }

    match flavor {
        Flavor::TypeScript => render_ts_types(&mut out, &entries, &names),
        Flavor::JavaScript => render_js_types(&mut out, &entries, &names),
    }

    out.push('\n');
    match flavor {
        Flavor::TypeScript => out.push_str("export const config: EnvConfig = {\n"),
        Flavor::JavaScript => out.push_str("/** @type {EnvConfig} */\nexport const config = {\n"),
    }
    for entry in &entries {
        if flavor == Flavor::JavaScript {
            let _ = writeln!(out, "  /** {} */", describe(entry));
        }
        let _ = writeln!(out, "  {}: {},", entry.key, accessor(entry, flavor, &names));
    }
    out.push_str("};\n\nexport default config;\n");

    out
}

/// 枚举类型名分配表
///
/// 不同的键可能得到相同的基础名（`A_B` 与 `A__B` 都是 `ABValue`），
/// 按 schema 顺序分配，后出现的加数字后缀：`ABValue2`、`ABValue3`…
struct EnumNames<'a> {
    by_key: HashMap<&'a str, String>,
}

impl<'a> EnumNames<'a> {
    fn assign(entries: &[&'a SchemaEntry]) -> Self {
        let mut taken = HashSet::new();
        let mut by_key = HashMap::new();

        for &entry in entries.iter().filter(|e| e.env_type == EnvType::Enum) {
            let base = enum_type_name(&entry.key);
            let mut name = base.clone();
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{base}{n}");
                n += 1;
            }
            by_key.insert(entry.key.as_str(), name);
        }

        Self { by_key }
    }

    fn get(&self, key: &str) -> String {
        self.by_key
            .get(key)
            .cloned()
            .unwrap_or_else(|| enum_type_name(key))
    }
}

fn render_ts_types(out: &mut String, entries: &[&SchemaEntry], names: &EnumNames) {
    for entry in entries.iter().filter(|e| e.env_type == EnvType::Enum) {
        let _ = writeln!(
            out,
            "\nexport type {} = {};",
            names.get(&entry.key),
            literal_union(entry.options())
        );
    }

    out.push_str("\nexport interface EnvConfig {\n");
    for entry in entries {
        let _ = writeln!(out, "  {}: {};", entry.key, value_type(entry, names));
    }
    out.push_str("}\n");
}

fn render_js_types(out: &mut String, entries: &[&SchemaEntry], names: &EnumNames) {
    for entry in entries.iter().filter(|e| e.env_type == EnvType::Enum) {
        let _ = writeln!(
            out,
            "\n/** @typedef {{{}}} {} */",
            literal_union(entry.options()),
            names.get(&entry.key)
        );
    }

    out.push_str("\n/**\n * @typedef {Object} EnvConfig\n");
    for entry in entries {
        let _ = writeln!(out, " * @property {{{}}} {}", value_type(entry, names), entry.key);
    }
    out.push_str(" */\n");
}

/// 字段的调用表达式，例如 `asNumber(readEnv('PORT', '3000'), 'PORT')`
fn accessor(entry: &SchemaEntry, flavor: Flavor, names: &EnumNames) -> String {
    let key = quote(&entry.key);
    let read = match &entry.default_value {
        Some(default) => format!("readEnv({}, {})", key, quote(default)),
        None => format!("readEnv({})", key),
    };
    let helper = runtime::helper_name(entry.env_type);

    match entry.env_type {
        EnvType::Boolean => format!("{helper}({read})"),
        EnvType::Enum => {
            let options = entry
                .options()
                .iter()
                .map(|o| quote(o))
                .collect::<Vec<_>>()
                .join(", ");
            match flavor {
                Flavor::TypeScript => format!(
                    "{helper}<{}>({read}, {key}, [{options}])",
                    names.get(&entry.key)
                ),
                Flavor::JavaScript => format!("{helper}({read}, {key}, [{options}])"),
            }
        }
        _ => format!("{helper}({read}, {key})"),
    }
}

/// 字段的静态类型
fn value_type(entry: &SchemaEntry, names: &EnumNames) -> String {
    match entry.env_type {
        EnvType::String | EnvType::Url | EnvType::Email => "string".to_string(),
        EnvType::Number => "number".to_string(),
        EnvType::Boolean => "boolean".to_string(),
        EnvType::Json => "unknown".to_string(),
        EnvType::Enum => names.get(&entry.key),
    }
}

/// JSDoc 字段说明，例如 `enum (dev | prod), default "dev"`
fn describe(entry: &SchemaEntry) -> String {
    let mut text = entry.env_type.to_string();
    if entry.env_type == EnvType::Enum {
        let _ = write!(text, " ({})", entry.options().join(" | "));
    }
    if let Some(default) = &entry.default_value {
        let _ = write!(text, ", default {}", quote(default));
    }
    // 防止默认值提前闭合注释
    text.replace("*/", "*\\/")
}

/// 枚举类型名：`LOG_LEVEL` → `LogLevelValue`
fn enum_type_name(key: &str) -> String {
    let mut name: String = key
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
                None => String::new(),
            }
        })
        .collect();
    name.push_str("Value");
    name
}

fn literal_union(options: &[String]) -> String {
    if options.is_empty() {
        return "never".to_string();
    }
    options.iter().map(|o| quote(o)).collect::<Vec<_>>().join(" | ")
}

/// 单引号字符串字面量
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
