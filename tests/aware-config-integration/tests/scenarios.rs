//! 配置请求端到端场景测试
use aware_config::codec;
use aware_config::{ConfigRequest, ConfigRequestBuilder, InvalidConfig, CLUSTER_ID_MAX, CLUSTER_ID_MIN};
use config_impl::{ConfigRequestBinder, FileFormat};
use infrastructure_common::{init_logging, LoggingConfig};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        init_logging(&LoggingConfig::development().with_level(tracing::Level::TRACE)).ok();
    });
}

#[test]
fn test_reserved_preference_rejected_at_setter() {
    init_test_logger();
    let result = ConfigRequestBuilder::new().set_master_preference(1).map(|b| b.build());
    assert_eq!(
        result.unwrap_err(),
        InvalidConfig::ReservedOrOutOfRangePreference { value: 1 }
    );
}

#[test]
fn test_low_above_high_rejected_at_build() {
    init_test_logger();
    let result = ConfigRequestBuilder::new()
        .set_cluster_low(100)
        .and_then(|b| b.set_cluster_high(50))
        .and_then(|b| b.build());
    assert_eq!(
        result,
        Err(InvalidConfig::ClusterLowExceedsHigh { low: 100, high: 50 })
    );
}

#[test]
fn test_equal_bounds_pin_cluster_id() {
    init_test_logger();
    let request = ConfigRequestBuilder::new()
        .set_cluster_low(10)
        .and_then(|b| b.set_cluster_high(10))
        .and_then(|b| b.build())
        .unwrap();
    assert_eq!(request.cluster_low(), 10);
    assert_eq!(request.cluster_high(), 10);
}

#[test]
fn test_empty_builder_yields_default() {
    init_test_logger();
    let request = ConfigRequestBuilder::new().build().unwrap();
    assert_eq!(request, ConfigRequest::default());
    assert!(!request.is_non_default());
    assert!(!request.support_alt_band());
    assert_eq!(request.master_preference(), 0);
    assert_eq!(request.cluster_low(), CLUSTER_ID_MIN);
    assert_eq!(request.cluster_high(), CLUSTER_ID_MAX);
}

#[test]
fn test_full_request_roundtrips_through_codec() {
    init_test_logger();
    let request = ConfigRequestBuilder::new()
        .set_support_alt_band(true)
        .set_master_preference(254)
        .and_then(|b| b.set_cluster_low(0))
        .and_then(|b| b.set_cluster_high(65535))
        .and_then(|b| b.build())
        .unwrap();

    let mut encoded = codec::encode(&request);
    assert_eq!(encoded.len(), codec::ENCODED_LEN);

    let decoded = codec::decode(&mut encoded).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(decoded.fingerprint(), request.fingerprint());
    assert!(decoded.validate().is_ok());
}

/// 绑定 -> 编码 -> 校验解码，整条链路保持一致
#[test]
fn test_bound_request_survives_transport() {
    init_test_logger();
    let request = ConfigRequestBinder::new()
        .add_str(
            "[aware]\nsupport_alt_band = true\nmaster_preference = 128\ncluster_low = 256\ncluster_high = 512",
            FileFormat::Toml,
        )
        .with_section("aware")
        .bind()
        .unwrap();

    let mut encoded = codec::encode(&request);
    let decoded = codec::decode_validated(&mut encoded).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(
        decoded.to_string(),
        "ConfigRequest [support_alt_band=true, master_preference=128, cluster_low=256, cluster_high=512]"
    );
}
