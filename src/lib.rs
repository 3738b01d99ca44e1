//! envsaurus - 从带类型注释的 .env.example 派生 schema
//!
//! 管线：注释解析 → schema → {配置模块生成 | schema 输出 | 环境校验}
//!
//! ```text
//! # PORT:number=3000
//! PORT=
//! # MODE:enum(dev,prod)=dev
//! MODE=prod
//! ```

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 解析与格式化
pub mod config;

// 代码生成
pub mod codegen;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

pub mod error;

#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use codegen::{Flavor, generate};
pub use config::format::{AnnotatedParser, SchemaFormat};
pub use domain::{EnvSchema, EnvType, EnvValue, SchemaEntry};
pub use error::{EnvError, Result, ValidationError};

/// 库版本
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
