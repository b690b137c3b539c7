//! 错误类型定义

use thiserror::Error;

/// 配置请求校验错误
///
/// 所有变体都是本地校验失败：同步返回给直接调用者，不可重试，也不会被自动修正。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("主设备偏好值不能为负数: {value}")]
    NegativePreference { value: i32 },

    #[error("主设备偏好值不能超过 255，且 1 和 255 为保留值: {value}")]
    ReservedOrOutOfRangePreference { value: i32 },

    #[error("集群 ID 不能为负数: {value}")]
    NegativeClusterId { value: i32 },

    #[error("集群 ID 不能超过 0xFFFF: {value}")]
    ClusterIdOutOfRange { value: i32 },

    #[error("无效的参数组合，要求 cluster_low <= cluster_high: low={low}, high={high}")]
    ClusterLowExceedsHigh { low: i32, high: i32 },

    #[error("二进制数据不完整: 需要 {expected} 字节，实际 {actual} 字节")]
    TruncatedInput { expected: usize, actual: usize },
}

impl InvalidConfig {
    /// 是否为主设备偏好值相关错误
    pub const fn is_preference_error(&self) -> bool {
        matches!(
            self,
            Self::NegativePreference { .. } | Self::ReservedOrOutOfRangePreference { .. }
        )
    }

    /// 是否为集群 ID 范围相关错误（含上下界顺序错误）
    pub const fn is_cluster_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeClusterId { .. }
                | Self::ClusterIdOutOfRange { .. }
                | Self::ClusterLowExceedsHigh { .. }
        )
    }
}

/// 配置绑定错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置键不存在: {key}")]
    KeyNotFound { key: String },

    #[error("配置验证失败: {source}")]
    Invalid {
        #[from]
        source: InvalidConfig,
    },

    #[error("日志初始化失败: {message}")]
    LoggingInitFailed { message: String },
}

impl ConfigError {
    /// 创建解析错误
    pub fn parse_error(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ParseError {
            source: Box::new(source),
        }
    }

    /// 若为校验错误，返回内部的 [`InvalidConfig`]
    pub const fn as_invalid(&self) -> Option<&InvalidConfig> {
        match self {
            Self::Invalid { source } => Some(source),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type InvalidConfigResult<T> = Result<T, InvalidConfig>;
pub type ConfigResult<T> = Result<T, ConfigError>;
