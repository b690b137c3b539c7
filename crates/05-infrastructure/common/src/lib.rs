//! # Infrastructure Common
//!
//! aware-config 工作区的公共基础设施：共享错误类型与日志初始化。
//!
//! ## 核心组件
//!
//! - [`InvalidConfig`] - 配置请求的校验错误
//! - [`ConfigError`] - 配置绑定层错误
//! - [`LoggingConfig`] - 日志配置与 [`init_logging`]

pub mod errors;
pub mod logging;

pub use errors::*;
pub use logging::*;
