//! 配置请求校验
//!
//! 每个不变量只在这里表达一次。构建器的 setter 复用单字段检查，
//! [`ConfigRequest::validate`](crate::ConfigRequest::validate) 与
//! [`ConfigRequestBuilder::build`](crate::ConfigRequestBuilder::build) 复用整体检查。

use crate::request::{CLUSTER_ID_MAX, CLUSTER_ID_MIN, MASTER_PREFERENCE_MAX, RESERVED_MASTER_PREFERENCES};
use infrastructure_common::InvalidConfig;

/// 检查主设备偏好值
///
/// 允许范围为 0 到 255，其中 1 和 255 为保留值。
pub const fn check_master_preference(value: i32) -> Result<(), InvalidConfig> {
    if value < 0 {
        return Err(InvalidConfig::NegativePreference { value });
    }
    if value == RESERVED_MASTER_PREFERENCES[0]
        || value == RESERVED_MASTER_PREFERENCES[1]
        || value > MASTER_PREFERENCE_MAX
    {
        return Err(InvalidConfig::ReservedOrOutOfRangePreference { value });
    }
    Ok(())
}

/// 检查单个集群 ID 边界（上界或下界）
pub const fn check_cluster_bound(value: i32) -> Result<(), InvalidConfig> {
    if value < CLUSTER_ID_MIN {
        return Err(InvalidConfig::NegativeClusterId { value });
    }
    if value > CLUSTER_ID_MAX {
        return Err(InvalidConfig::ClusterIdOutOfRange { value });
    }
    Ok(())
}

/// 检查集群 ID 上下界顺序，相等是允许的
pub const fn check_cluster_ordering(low: i32, high: i32) -> Result<(), InvalidConfig> {
    if low > high {
        return Err(InvalidConfig::ClusterLowExceedsHigh { low, high });
    }
    Ok(())
}

/// 整体校验
///
/// 按 偏好值 -> 下界 -> 上界 -> 顺序 的次序检查，返回第一个失败项。
/// 多个不变量同时被违反时，调用者看到的错误由这个次序决定。
pub fn validate_fields(
    master_preference: i32,
    cluster_low: i32,
    cluster_high: i32,
) -> Result<(), InvalidConfig> {
    check_master_preference(master_preference)?;
    check_cluster_bound(cluster_low)?;
    check_cluster_bound(cluster_high)?;
    check_cluster_ordering(cluster_low, cluster_high)
}
