//! 集群配置请求值对象

use crate::builder::ConfigRequestBuilder;
use crate::validator;
use infrastructure_common::InvalidConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 集群 ID 下限
pub const CLUSTER_ID_MIN: i32 = 0;

/// 集群 ID 上限
pub const CLUSTER_ID_MAX: i32 = 0xFFFF;

/// 主设备偏好值上限（本身为保留值）
pub const MASTER_PREFERENCE_MAX: i32 = 255;

/// 保留的主设备偏好值
pub const RESERVED_MASTER_PREFERENCES: [i32; 2] = [1, 255];

/// Wi-Fi Aware 集群配置请求
///
/// 由 [`ConfigRequestBuilder`] 或 [`ConfigRequest::new`] 构造，构造后不可变。
/// 实际生效的配置可能与请求不同，因为多个应用可能提出不同的请求。
///
/// # 示例
///
/// ```
/// use aware_config::ConfigRequestBuilder;
///
/// let request = ConfigRequestBuilder::new()
///     .set_support_alt_band(true)
///     .set_master_preference(254)?
///     .set_cluster_low(0x100)?
///     .set_cluster_high(0x1FF)?
///     .build()?;
///
/// assert!(request.is_non_default());
/// # Ok::<(), aware_config::InvalidConfig>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConfigRequestOptions")]
pub struct ConfigRequest {
    support_alt_band: bool,
    master_preference: i32,
    cluster_low: i32,
    cluster_high: i32,
}

impl ConfigRequest {
    /// 构造并校验
    ///
    /// 与依次调用构建器的全部 setter 再 `build()` 等价。
    pub fn new(
        support_alt_band: bool,
        master_preference: i32,
        cluster_low: i32,
        cluster_high: i32,
    ) -> Result<Self, InvalidConfig> {
        validator::validate_fields(master_preference, cluster_low, cluster_high)?;
        Ok(Self::from_raw(support_alt_band, master_preference, cluster_low, cluster_high))
    }

    /// 不做校验直接构造，仅供构建器与解码使用
    pub(crate) const fn from_raw(
        support_alt_band: bool,
        master_preference: i32,
        cluster_low: i32,
        cluster_high: i32,
    ) -> Self {
        Self {
            support_alt_band,
            master_preference,
            cluster_low,
            cluster_high,
        }
    }

    /// 创建构建器
    pub fn builder() -> ConfigRequestBuilder {
        ConfigRequestBuilder::new()
    }

    /// 是否请求备用频段支持
    pub const fn support_alt_band(&self) -> bool {
        self.support_alt_band
    }

    /// 请求的主设备偏好值
    pub const fn master_preference(&self) -> i32 {
        self.master_preference
    }

    /// 集群 ID 范围下界（含）
    pub const fn cluster_low(&self) -> i32 {
        self.cluster_low
    }

    /// 集群 ID 范围上界（含）
    pub const fn cluster_high(&self) -> i32 {
        self.cluster_high
    }

    /// 检查是否有任一设置不同于默认值
    pub const fn is_non_default(&self) -> bool {
        self.support_alt_band
            || self.master_preference != 0
            || self.cluster_low != CLUSTER_ID_MIN
            || self.cluster_high != CLUSTER_ID_MAX
    }

    /// 重新执行完整校验
    ///
    /// 通过构建器得到的值总是合法的；经 [`crate::codec::decode`] 得到的值未经校验，
    /// 需要在使用前调用此方法。
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        validator::validate_fields(self.master_preference, self.cluster_low, self.cluster_high)
    }

    /// 稳定的指纹值
    ///
    /// 按 备用频段、偏好值、下界、上界 的固定顺序做 `31 * acc + field` 组合，
    /// 跨进程、跨运行保持一致。
    pub const fn fingerprint(&self) -> i32 {
        let mut result: i32 = 17;
        result = result.wrapping_mul(31).wrapping_add(self.support_alt_band as i32);
        result = result.wrapping_mul(31).wrapping_add(self.master_preference);
        result = result.wrapping_mul(31).wrapping_add(self.cluster_low);
        result.wrapping_mul(31).wrapping_add(self.cluster_high)
    }
}

impl Default for ConfigRequest {
    fn default() -> Self {
        Self::from_raw(false, 0, CLUSTER_ID_MIN, CLUSTER_ID_MAX)
    }
}

impl fmt::Display for ConfigRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConfigRequest [support_alt_band={}, master_preference={}, cluster_low={}, cluster_high={}]",
            self.support_alt_band, self.master_preference, self.cluster_low, self.cluster_high
        )
    }
}

/// 配置请求的原始形式
///
/// 来自配置文件、环境变量或 JSON 的未校验输入，缺省字段取默认值。
/// 只能通过 [`TryFrom`] 转换为 [`ConfigRequest`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRequestOptions {
    /// 是否请求备用频段支持
    pub support_alt_band: bool,
    /// 主设备偏好值
    pub master_preference: i32,
    /// 集群 ID 范围下界
    pub cluster_low: i32,
    /// 集群 ID 范围上界
    pub cluster_high: i32,
}

impl Default for ConfigRequestOptions {
    fn default() -> Self {
        ConfigRequest::default().into()
    }
}

impl From<ConfigRequest> for ConfigRequestOptions {
    fn from(request: ConfigRequest) -> Self {
        Self {
            support_alt_band: request.support_alt_band,
            master_preference: request.master_preference,
            cluster_low: request.cluster_low,
            cluster_high: request.cluster_high,
        }
    }
}

impl TryFrom<ConfigRequestOptions> for ConfigRequest {
    type Error = InvalidConfig;

    fn try_from(options: ConfigRequestOptions) -> Result<Self, Self::Error> {
        ConfigRequestBuilder::new()
            .set_support_alt_band(options.support_alt_band)
            .set_master_preference(options.master_preference)?
            .set_cluster_low(options.cluster_low)?
            .set_cluster_high(options.cluster_high)?
            .build()
    }
}
