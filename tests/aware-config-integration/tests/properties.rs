//! 配置请求性质验证
//!
//! 使用 proptest 在整个 i32 取值空间内验证校验规则、相等性与编解码往返。

use aware_config::codec;
use aware_config::validator::check_master_preference;
use aware_config::{ConfigRequest, ConfigRequestBuilder, InvalidConfig, CLUSTER_ID_MAX, CLUSTER_ID_MIN};
use bytes::BufMut;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(request: &ConfigRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.hash(&mut hasher);
    hasher.finish()
}

fn valid_preference() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), 2..=254i32]
}

fn cluster_id() -> impl Strategy<Value = i32> {
    CLUSTER_ID_MIN..=CLUSTER_ID_MAX
}

prop_compose! {
    fn valid_request()(
        support_alt_band in any::<bool>(),
        master_preference in valid_preference(),
        a in cluster_id(),
        b in cluster_id(),
    ) -> ConfigRequest {
        ConfigRequest::new(support_alt_band, master_preference, a.min(b), a.max(b))
            .expect("生成的字段均合法")
    }
}

proptest! {
    #[test]
    fn prop_master_preference_accepts_exactly_valid_range(p in prop_oneof![any::<i32>(), -5..=260i32]) {
        let expected = (0..=255).contains(&p) && p != 1 && p != 255;
        prop_assert_eq!(check_master_preference(p).is_ok(), expected);
    }

    #[test]
    fn prop_build_succeeds_iff_ordered(low in cluster_id(), high in cluster_id()) {
        let result = ConfigRequestBuilder::new()
            .set_cluster_low(low)
            .and_then(|b| b.set_cluster_high(high))
            .and_then(|b| b.build());

        if low <= high {
            let request = result.unwrap();
            prop_assert_eq!((request.cluster_low(), request.cluster_high()), (low, high));
        } else {
            prop_assert_eq!(result, Err(InvalidConfig::ClusterLowExceedsHigh { low, high }));
        }
    }

    #[test]
    fn prop_equality_is_consistent_with_hash(a in valid_request(), b in valid_request()) {
        let a_copy = a;
        prop_assert_eq!(a, a_copy);
        prop_assert_eq!(hash_of(&a), hash_of(&a_copy));
        prop_assert_eq!(a.fingerprint(), a_copy.fingerprint());
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_eq!(a.fingerprint(), b.fingerprint());
        }
    }

    #[test]
    fn prop_non_default_iff_differs_from_default(request in valid_request()) {
        prop_assert_eq!(request.is_non_default(), request != ConfigRequest::default());
    }

    #[test]
    fn prop_codec_roundtrip(request in valid_request()) {
        let mut encoded = codec::encode(&request);
        prop_assert_eq!(encoded.len(), codec::ENCODED_LEN);
        prop_assert_eq!(codec::decode(&mut encoded), Ok(request));
    }

    #[test]
    fn prop_decode_validated_matches_validate(
        flag in any::<i32>(),
        preference in -2..=300i32,
        low in -2..=70000i32,
        high in -2..=70000i32,
    ) {
        let mut buf = Vec::with_capacity(codec::ENCODED_LEN);
        buf.put_i32_le(flag);
        buf.put_i32_le(preference);
        buf.put_i32_le(low);
        buf.put_i32_le(high);

        let raw = codec::decode(&mut buf.as_slice()).unwrap();
        prop_assert_eq!(raw.support_alt_band(), flag != 0);

        let validated = codec::decode_validated(&mut buf.as_slice());
        match raw.validate() {
            Ok(()) => prop_assert_eq!(validated, Ok(raw)),
            Err(e) => prop_assert_eq!(validated, Err(e)),
        }
    }

    #[test]
    fn prop_new_agrees_with_builder(
        preference in -2..=300i32,
        low in -2..=70000i32,
        high in -2..=70000i32,
    ) {
        let built = ConfigRequestBuilder::new()
            .set_master_preference(preference)
            .and_then(|b| b.set_cluster_low(low))
            .and_then(|b| b.set_cluster_high(high))
            .and_then(|b| b.build());
        prop_assert_eq!(built, ConfigRequest::new(false, preference, low, high));
    }
}
