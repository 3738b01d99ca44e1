//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - paths: 路径与文件工具
//! - settings: 分层配置文件

pub mod paths;
pub mod settings;

pub use settings::Settings;
