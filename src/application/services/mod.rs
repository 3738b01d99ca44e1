//! 应用服务

pub mod check_service;

pub use check_service::{CheckReport, CheckService};
