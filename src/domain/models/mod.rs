//! 领域实体

pub mod schema;

pub use schema::{EnvSchema, EnvType, SchemaEntry};
