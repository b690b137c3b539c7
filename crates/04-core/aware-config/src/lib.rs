//! # Aware Config
//!
//! Wi-Fi Aware 集群配置请求：描述加入或组建邻近发现网络（集群）时请求的参数。
//!
//! ## 核心组件
//!
//! - [`ConfigRequest`] - 不可变、已校验的配置请求值
//! - [`ConfigRequestBuilder`] - 逐字段校验的构建器
//! - [`validator`] - 所有不变量的唯一定义处
//! - [`codec`] - 定长二进制编解码
//!
//! ## 不变量
//!
//! - `0 <= master_preference <= 255`，且 1 与 255 为保留值
//! - `CLUSTER_ID_MIN <= cluster_low <= cluster_high <= CLUSTER_ID_MAX`
//!
//! 除 [`codec::decode`] 外，所有构造路径都保证上述不变量成立。

pub mod builder;
pub mod codec;
pub mod request;
pub mod validator;

pub use builder::*;
pub use request::*;

pub use infrastructure_common::{InvalidConfig, InvalidConfigResult};
