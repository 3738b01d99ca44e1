//! 文件格式：输入的 .env.example 与 schema 输出

pub mod annotated;
pub mod schema_output;

pub use annotated::AnnotatedParser;
pub use schema_output::SchemaFormat;
