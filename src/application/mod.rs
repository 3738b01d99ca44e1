//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 用例实现（环境校验）

pub mod services;

pub use services::{CheckReport, CheckService};
