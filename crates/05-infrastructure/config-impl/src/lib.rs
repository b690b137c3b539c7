//! # Configuration Implementation
//!
//! 从配置文件与环境变量绑定 [`ConfigRequest`](aware_config::ConfigRequest)。
//!
//! ## 主要组件
//!
//! - [`ConfigRequestBinder`] - 分层配置源绑定器

pub mod binder;

pub use binder::*;
pub use config::FileFormat;
