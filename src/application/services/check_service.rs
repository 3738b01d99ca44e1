//! 环境校验服务
//!
//! 对每个 schema 条目执行类型校验，收集全部错误后一次性返回，不在第一个
//! 错误处停止。严格模式额外报告未声明的大写变量。

use crate::domain::models::EnvSchema;
use crate::domain::validators::{self, EnvValue};
use crate::error::ValidationError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// 参与严格模式检查的变量名形状
static SHOUTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("key pattern is valid"));

/// 一次检查的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// 校验通过的变量及其转换后的值，按 schema 顺序
    pub values: Vec<(String, EnvValue)>,
    pub errors: Vec<ValidationError>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 环境校验服务
pub struct CheckService<'a> {
    schema: &'a EnvSchema,
}

impl<'a> CheckService<'a> {
    pub fn new(schema: &'a EnvSchema) -> Self {
        Self { schema }
    }

    /// 用给定的环境变量表执行检查
    pub fn check(&self, env: &BTreeMap<String, String>, strict: bool) -> CheckReport {
        let mut report = CheckReport::default();

        for entry in &self.schema.entries {
            let source = validators::resolve(entry, env.get(&entry.key).map(String::as_str));
            match validators::validate_entry(entry, source) {
                Ok(value) => {
                    tracing::debug!(key = %entry.key, value = %value, "valid");
                    report.values.push((entry.key.clone(), value));
                }
                Err(err) => {
                    tracing::debug!(key = %entry.key, error = %err, "invalid");
                    report.errors.push(err);
                }
            }
        }

        if strict {
            report.errors.extend(self.undeclared_keys(env));
        }

        report
    }

    /// 用当前进程环境执行检查
    pub fn check_process_env(&self, strict: bool) -> CheckReport {
        let env: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        self.check(&env, strict)
    }

    /// 环境中存在但 schema 未声明的大写变量（按键名排序）
    fn undeclared_keys(&self, env: &BTreeMap<String, String>) -> Vec<ValidationError> {
        env.keys()
            .filter(|k| SHOUTED_KEY.is_match(k) && !self.schema.declares(k))
            .map(|k| ValidationError::new(k, format!("undeclared key: {k}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::format::AnnotatedParser;
    use crate::test_utils::EnvGuard;
    use serial_test::serial;

    const EXAMPLE: &str = "# PORT:number=3000\nPORT=\n# MODE:enum(dev,prod)=dev\nMODE=prod\n";

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn messages(report: &CheckReport) -> Vec<String> {
        report.errors.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_check_ok() {
        let schema = AnnotatedParser::parse(EXAMPLE);
        let report = CheckService::new(&schema).check(&env(&[("PORT", "8080"), ("MODE", "prod")]), false);

        assert!(report.is_ok());
        assert_eq!(
            report.values,
            vec![
                ("PORT".to_string(), EnvValue::Number(8080.0)),
                ("MODE".to_string(), EnvValue::String("prod".to_string())),
            ]
        );
    }

    #[test]
    fn test_check_enum_violation() {
        let schema = AnnotatedParser::parse(EXAMPLE);
        let report = CheckService::new(&schema).check(&env(&[("PORT", "8080"), ("MODE", "staging")]), false);
        assert_eq!(messages(&report), vec!["MODE must be one of dev,prod"]);
    }

    #[test]
    fn test_check_uses_defaults() {
        let schema = AnnotatedParser::parse(EXAMPLE);
        let report = CheckService::new(&schema).check(&env(&[("PORT", "")]), false);

        assert!(report.is_ok());
        assert_eq!(report.values[0].1, EnvValue::Number(3000.0));
        assert_eq!(report.values[1].1, EnvValue::String("dev".to_string()));
    }

    #[test]
    fn test_check_collects_all_errors() {
        let content = "# PORT:number\nPORT=\n# API:url\nAPI=\n# MAIL:email\nMAIL=\n# CFG:json\nCFG=\nNAME=\n# DEBUG:boolean\nDEBUG=";
        let schema = AnnotatedParser::parse(content);
        let report = CheckService::new(&schema).check(&env(&[("CFG", "{bad")]), false);

        assert_eq!(
            messages(&report),
            vec![
                "PORT required",
                "API must be a valid URL",
                "MAIL must be a valid email",
                "CFG must be valid JSON",
                "NAME required",
            ]
        );
        assert_eq!(report.values, vec![("DEBUG".to_string(), EnvValue::Boolean(false))]);
    }

    #[test]
    fn test_strict_flags_undeclared_keys() {
        let schema = AnnotatedParser::parse("# PORT:number\nPORT=");
        let report = CheckService::new(&schema).check(&env(&[("PORT", "3000"), ("FOO", "bar")]), true);
        assert_eq!(messages(&report), vec!["undeclared key: FOO"]);
    }

    #[test]
    fn test_strict_accepts_every_declared_key() {
        let schema = AnnotatedParser::parse("PORT=\nHOST=\nPORT=");
        let vars = env(&[("PORT", "1"), ("HOST", "db"), ("EXTRA", "x")]);
        let report = CheckService::new(&schema).check(&vars, true);
        assert_eq!(messages(&report), vec!["undeclared key: EXTRA"]);
    }

    #[test]
    fn test_strict_ignores_non_shouted_keys() {
        let schema = AnnotatedParser::parse("PORT=");
        let vars = env(&[("PORT", "1"), ("lower", "x"), ("Mixed_Case", "y"), ("_UNDERSCORE", "z")]);
        assert!(CheckService::new(&schema).check(&vars, true).is_ok());
    }

    #[test]
    fn test_non_strict_ignores_undeclared_keys() {
        let schema = AnnotatedParser::parse("PORT=");
        let report = CheckService::new(&schema).check(&env(&[("PORT", "1"), ("FOO", "bar")]), false);
        assert!(report.is_ok());
    }

    #[test]
    #[serial]
    fn test_check_process_env() {
        let guard = EnvGuard::new();
        guard.set_var("ENVSAURUS_TEST_PORT", "8080");
        guard.remove_var("ENVSAURUS_TEST_MODE");

        let content = "# ENVSAURUS_TEST_PORT:number\nENVSAURUS_TEST_PORT=\n# ENVSAURUS_TEST_MODE:enum(a,b)\nENVSAURUS_TEST_MODE=";
        let schema = AnnotatedParser::parse(content);
        let report = CheckService::new(&schema).check_process_env(false);

        assert_eq!(report.values, vec![("ENVSAURUS_TEST_PORT".to_string(), EnvValue::Number(8080.0))]);
        assert_eq!(messages(&report), vec!["ENVSAURUS_TEST_MODE must be one of a,b"]);
    }

    #[test]
    fn test_duplicate_entries_checked_each_time() {
        let schema = AnnotatedParser::parse("# PORT:number\nPORT=1\nPORT=2");
        let report = CheckService::new(&schema).check(&env(&[]), false);
        assert_eq!(messages(&report), vec!["PORT required", "PORT required"]);
    }
}
