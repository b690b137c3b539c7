//! 定长二进制编解码
//!
//! 线格式为 4 个小端有符号 32 位整数，依次为：备用频段（1/0）、主设备偏好值、
//! 集群 ID 下界、集群 ID 上界。共 16 字节，没有版本号或长度前缀。

use crate::request::ConfigRequest;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use infrastructure_common::InvalidConfig;
use tracing::trace;

/// 编码后的固定长度（字节）
pub const ENCODED_LEN: usize = 16;

/// 将配置请求追加写入缓冲区
pub fn encode_into(request: &ConfigRequest, buf: &mut impl BufMut) {
    buf.put_i32_le(i32::from(request.support_alt_band()));
    buf.put_i32_le(request.master_preference());
    buf.put_i32_le(request.cluster_low());
    buf.put_i32_le(request.cluster_high());
}

/// 编码配置请求
pub fn encode(request: &ConfigRequest) -> Bytes {
    let mut buf = BytesMut::with_capacity(ENCODED_LEN);
    encode_into(request, &mut buf);
    trace!(%request, "配置请求已编码");
    buf.freeze()
}

/// 解码配置请求
///
/// 恰好消费 16 字节，缓冲区中其余字节保持不动。备用频段字段非 0 即为 `true`。
///
/// 解码**不做校验**：损坏或恶意的数据可能得到违反不变量的值
/// （例如 `cluster_low > cluster_high`）。需要保证合法性时使用 [`decode_validated`]，
/// 或对结果调用 [`ConfigRequest::validate`]。
pub fn decode(buf: &mut impl Buf) -> Result<ConfigRequest, InvalidConfig> {
    if buf.remaining() < ENCODED_LEN {
        return Err(InvalidConfig::TruncatedInput {
            expected: ENCODED_LEN,
            actual: buf.remaining(),
        });
    }

    let request = ConfigRequest::from_raw(
        buf.get_i32_le() != 0,
        buf.get_i32_le(),
        buf.get_i32_le(),
        buf.get_i32_le(),
    );
    trace!(%request, "配置请求已解码");
    Ok(request)
}

/// 解码并执行完整校验
pub fn decode_validated(buf: &mut impl Buf) -> Result<ConfigRequest, InvalidConfig> {
    let request = decode(buf)?;
    request.validate()?;
    Ok(request)
}
