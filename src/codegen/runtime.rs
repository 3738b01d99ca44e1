//! 生成模块内联的运行时校验函数
//!
//! 错误信息与 [`crate::domain::validators`] 一致。

use super::Flavor;
use crate::domain::models::EnvType;

const READ_ENV_TS: &str = r#"function readEnv(key: string, fallback?: string): string | undefined {
  const raw = process.env[key];
  return raw != null && raw !== '' ? raw : fallback;
}"#;

const READ_ENV_JS: &str = r#"/**
 * @param {string} key
 * @param {string} [fallback]
 * @returns {string | undefined}
 */
function readEnv(key, fallback) {
  const raw = process.env[key];
  return raw != null && raw !== '' ? raw : fallback;
}"#;

const AS_STRING_TS: &str = r#"function asString(x: string | undefined, key: string): string {
  if (x == null || x === '') throw new Error(`${key} required`);
  return x;
}"#;

const AS_STRING_JS: &str = r#"/**
 * @param {string | undefined} x
 * @param {string} key
 * @returns {string}
 */
function asString(x, key) {
  if (x == null || x === '') throw new Error(`${key} required`);
  return x;
}"#;

const AS_NUMBER_TS: &str = r#"function asNumber(x: string | undefined, key: string): number {
  if (x == null || x === '') throw new Error(`${key} required`);
  const n = Number(x);
  if (Number.isNaN(n)) throw new Error(`${key} must be number`);
  return n;
}"#;

const AS_NUMBER_JS: &str = r#"/**
 * @param {string | undefined} x
 * @param {string} key
 * @returns {number}
 */
function asNumber(x, key) {
  if (x == null || x === '') throw new Error(`${key} required`);
  const n = Number(x);
  if (Number.isNaN(n)) throw new Error(`${key} must be number`);
  return n;
}"#;

const AS_BOOLEAN_TS: &str = r#"function asBoolean(x: string | undefined): boolean {
  if (x == null || x === '') return false;
  const v = x.toLowerCase();
  return v === '1' || v === 'true' || v === 'yes' || v === 'on';
}"#;

const AS_BOOLEAN_JS: &str = r#"/**
 * @param {string | undefined} x
 * @returns {boolean}
 */
function asBoolean(x) {
  if (x == null || x === '') return false;
  const v = x.toLowerCase();
  return v === '1' || v === 'true' || v === 'yes' || v === 'on';
}"#;

const AS_ENUM_TS: &str = r#"function asEnum<T extends string>(x: string | undefined, key: string, opts: readonly T[]): T {
  if (!x || !opts.includes(x as T)) throw new Error(`${key} must be one of ${opts.join(',')}`);
  return x as T;
}"#;

const AS_ENUM_JS: &str = r#"/**
 * @template {string} T
 * @param {string | undefined} x
 * @param {string} key
 * @param {readonly T[]} opts
 * @returns {T}
 */
function asEnum(x, key, opts) {
  if (!x || !opts.includes(/** @type {T} */ (x))) throw new Error(`${key} must be one of ${opts.join(',')}`);
  return /** @type {T} */ (x);
}"#;

const AS_URL_TS: &str = r#"function asURL(x: string | undefined, key: string): string {
  try {
    return new URL(String(x)).toString();
  } catch {
    throw new Error(`${key} must be a valid URL`);
  }
}"#;

const AS_URL_JS: &str = r#"/**
 * @param {string | undefined} x
 * @param {string} key
 * @returns {string}
 */
function asURL(x, key) {
  try {
    return new URL(String(x)).toString();
  } catch {
    throw new Error(`${key} must be a valid URL`);
  }
}"#;

const AS_EMAIL_TS: &str = r#"function asEmail(x: string | undefined, key: string): string {
  if (!x || !/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(x)) throw new Error(`${key} must be a valid email`);
  return x;
}"#;

const AS_EMAIL_JS: &str = r#"/**
 * @param {string | undefined} x
 * @param {string} key
 * @returns {string}
 */
function asEmail(x, key) {
  if (!x || !/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(x)) throw new Error(`${key} must be a valid email`);
  return x;
}"#;

const AS_JSON_TS: &str = r#"function asJSON(x: string | undefined, key: string): unknown {
  try {
    return JSON.parse(String(x));
  } catch {
    throw new Error(`${key} must be valid JSON`);
  }
}"#;

const AS_JSON_JS: &str = r#"/**
 * @param {string | undefined} x
 * @param {string} key
 * @returns {unknown}
 */
function asJSON(x, key) {
  try {
    return JSON.parse(String(x));
  } catch {
    throw new Error(`${key} must be valid JSON`);
  }
}"#;

/// `readEnv` 辅助函数源码
pub fn read_env(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::TypeScript => READ_ENV_TS,
        Flavor::JavaScript => READ_ENV_JS,
    }
}

/// 某类型的校验函数源码
pub fn helper(env_type: EnvType, flavor: Flavor) -> &'static str {
    let (ts, js) = match env_type {
        EnvType::String => (AS_STRING_TS, AS_STRING_JS),
        EnvType::Number => (AS_NUMBER_TS, AS_NUMBER_JS),
        EnvType::Boolean => (AS_BOOLEAN_TS, AS_BOOLEAN_JS),
        EnvType::Enum => (AS_ENUM_TS, AS_ENUM_JS),
        EnvType::Url => (AS_URL_TS, AS_URL_JS),
        EnvType::Email => (AS_EMAIL_TS, AS_EMAIL_JS),
        EnvType::Json => (AS_JSON_TS, AS_JSON_JS),
    };
    match flavor {
        Flavor::TypeScript => ts,
        Flavor::JavaScript => js,
    }
}

/// 校验函数名
pub fn helper_name(env_type: EnvType) -> &'static str {
    match env_type {
        EnvType::String => "asString",
        EnvType::Number => "asNumber",
        EnvType::Boolean => "asBoolean",
        EnvType::Enum => "asEnum",
        EnvType::Url => "asURL",
        EnvType::Email => "asEmail",
        EnvType::Json => "asJSON",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_names_match_sources() {
        for env_type in EnvType::ALL {
            let name = helper_name(env_type);
            for flavor in [Flavor::TypeScript, Flavor::JavaScript] {
                assert!(
                    helper(env_type, flavor).contains(&format!("function {name}")),
                    "{name} missing for {flavor:?}"
                );
            }
        }
    }

    #[test]
    fn test_js_helpers_have_no_type_annotations() {
        for env_type in EnvType::ALL {
            let source = helper(env_type, Flavor::JavaScript);
            assert!(!source.contains("): "), "{source}");
        }
    }
}
