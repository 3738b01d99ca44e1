//! 解析与格式化

pub mod format;
