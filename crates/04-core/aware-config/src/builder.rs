//! 配置请求构建器

use crate::request::{ConfigRequest, CLUSTER_ID_MAX, CLUSTER_ID_MIN};
use crate::validator;
use infrastructure_common::InvalidConfig;
use tracing::debug;

/// [`ConfigRequest`] 构建器
///
/// 每个 setter 立即检查单字段不变量并在首个非法输入处失败，失败时已存储的值保持不变。
/// 上下界之间的顺序依赖两个字段，且二者可以按任意顺序设置，因此推迟到
/// [`build`](Self::build) 时检查。
///
/// 构建器只归一个调用者所有，不支持并发修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRequestBuilder {
    support_alt_band: bool,
    master_preference: i32,
    cluster_low: i32,
    cluster_high: i32,
}

impl ConfigRequestBuilder {
    /// 创建新的构建器，所有字段取默认值
    pub const fn new() -> Self {
        Self {
            support_alt_band: false,
            master_preference: 0,
            cluster_low: CLUSTER_ID_MIN,
            cluster_high: CLUSTER_ID_MAX,
        }
    }

    /// 是否需要备用频段支持，默认关闭
    pub fn set_support_alt_band(&mut self, support_alt_band: bool) -> &mut Self {
        self.support_alt_band = support_alt_band;
        self
    }

    /// 设置主设备偏好值
    ///
    /// 允许范围为 0（默认）到 255，1 和 255 为保留值。
    pub fn set_master_preference(&mut self, master_preference: i32) -> Result<&mut Self, InvalidConfig> {
        validator::check_master_preference(master_preference)?;
        self.master_preference = master_preference;
        Ok(self)
    }

    /// 设置集群 ID 范围下界
    ///
    /// 新网络的集群 ID 在 `[cluster_low, cluster_high]` 内随机生成。
    /// 下界与上界相等时集群 ID 被固定为该值。
    pub fn set_cluster_low(&mut self, cluster_low: i32) -> Result<&mut Self, InvalidConfig> {
        validator::check_cluster_bound(cluster_low)?;
        self.cluster_low = cluster_low;
        Ok(self)
    }

    /// 设置集群 ID 范围上界，默认为 `0xFFFF`
    pub fn set_cluster_high(&mut self, cluster_high: i32) -> Result<&mut Self, InvalidConfig> {
        validator::check_cluster_bound(cluster_high)?;
        self.cluster_high = cluster_high;
        Ok(self)
    }

    /// 根据当前设置构建 [`ConfigRequest`]
    pub fn build(&self) -> Result<ConfigRequest, InvalidConfig> {
        validator::check_cluster_ordering(self.cluster_low, self.cluster_high)?;

        let request = ConfigRequest::from_raw(
            self.support_alt_band,
            self.master_preference,
            self.cluster_low,
            self.cluster_high,
        );
        debug!(%request, "配置请求构建完成");
        Ok(request)
    }
}

impl Default for ConfigRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ConfigRequest> for ConfigRequestBuilder {
    fn from(request: ConfigRequest) -> Self {
        Self {
            support_alt_band: request.support_alt_band(),
            master_preference: request.master_preference(),
            cluster_low: request.cluster_low(),
            cluster_high: request.cluster_high(),
        }
    }
}
