//! Property-based tests for the encode/decode round trip.
//!
//! Generated inputs cover primitives, strings with arbitrary Unicode and
//! control characters, collections, options and nested records.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_jsonkit::{from_str, to_string, to_string_compact, Config, Window};
use std::collections::{BTreeMap, HashMap};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(default)]
struct Seller {
    id: i32,
    name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(default)]
struct Product {
    id: u64,
    name: String,
    price: f64,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seller: Option<Seller>,
}

fn seller() -> impl Strategy<Value = Seller> {
    (any::<i32>(), ".*").prop_map(|(id, name)| Seller { id, name })
}

fn product() -> impl Strategy<Value = Product> {
    (
        any::<u64>(),
        ".*",
        -1.0e12f64..1.0e12f64,
        prop::collection::vec("[a-z]{0,8}", 0..5),
        proptest::option::of(seller()),
    )
        .prop_map(|(id, name, price, tags, seller)| Product {
            id,
            name,
            price,
            tags,
            seller,
        })
}

proptest! {
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_f64(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_f32(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_string(s in "\\PC*") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_string_with_controls(s in "[\\x00-\\x1f\"\\\\a-z]*") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    #[test]
    fn prop_string_map(m in prop::collection::hash_map(".*", any::<i64>(), 0..10)) {
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_integer_key_map(m in prop::collection::btree_map(any::<u16>(), any::<bool>(), 0..10)) {
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_products(products in prop::collection::vec(product(), 0..5)) {
        prop_assert!(roundtrip(&products));
    }

    #[test]
    fn prop_config(
        timeout in any::<f32>().prop_filter("finite", |f| f.is_finite()),
        plugins_path in ".*",
        (width, height, x, y) in any::<(i32, i32, i32, i32)>(),
    ) {
        let config = Config {
            timeout,
            plugins_path,
            window: Window { width, height, x, y },
        };
        prop_assert!(roundtrip(&config));
    }

    #[test]
    fn prop_map_keys_sorted(m in prop::collection::hash_map("[a-z]{1,6}", any::<u8>(), 0..10)) {
        let json = to_string_compact(&m).unwrap();
        let sorted: BTreeMap<_, _> = m.iter().collect();
        let expected = serde_json::to_string(&sorted).unwrap();
        prop_assert_eq!(json, expected);
    }

    #[test]
    fn prop_decode_never_panics(s in "\\PC{0,64}") {
        let _ = from_str::<serde_jsonkit::JsonValue>(&s);
        let _ = from_str::<HashMap<String, i32>>(&s);
    }
}
