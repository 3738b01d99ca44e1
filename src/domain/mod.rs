//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: schema 实体
//! - validators: 按类型的纯校验函数

pub mod models;
pub mod validators;

pub use models::{EnvSchema, EnvType, SchemaEntry};
pub use validators::{EnvValue, validate_entry};
