//! 测试工具模块
//!
//! 提供统一的测试环境管理，避免环境变量污染

use std::collections::HashMap;
use std::env;

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        // 首先移除所有不在原始环境中的变量
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        // 然后恢复所有原始变量的值
        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_deref() != Some(value.as_str()) {
                self.set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_environment() {
        {
            let guard = EnvGuard::new();
            guard.set_var("ENVSAURUS_GUARD_TEST", "1");
            assert_eq!(env::var("ENVSAURUS_GUARD_TEST").unwrap(), "1");
        }
        assert!(env::var("ENVSAURUS_GUARD_TEST").is_err());
    }
}
