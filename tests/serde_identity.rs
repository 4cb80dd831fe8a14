//! JSON round-trip tests: absent values travel as `null`, present values as
//! the payload's own encoding, and every value decodes back to itself.

#![cfg(feature = "rand")]

mod common;

use opt::{Opt, Zeroable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Zeroable)]
struct Inner {
    test: String,
    test2: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Thing {
    bool: opt::Bool,
    byte: opt::Byte,
    float32: opt::F32,
    float64: opt::F64,
    int8: opt::I8,
    int16: opt::I16,
    int32: opt::I32,
    int64: opt::I64,
    char: opt::Char,
    string: opt::Text,
    uint8: opt::U8,
    uint16: opt::U16,
    uint32: opt::U32,
    uint64: opt::U64,
    inner: Opt<Inner>,
}

impl Thing {
    fn random(rng: &mut StdRng) -> Self {
        Thing {
            bool: rng.random(),
            byte: rng.random(),
            float32: rng.random(),
            float64: rng.random(),
            int8: rng.random(),
            int16: rng.random(),
            int32: rng.random(),
            int64: rng.random(),
            char: rng.random(),
            string: Opt::sample_with(rng, common::random_text),
            uint8: rng.random(),
            uint16: rng.random(),
            uint32: rng.random(),
            uint64: rng.random(),
            inner: Opt::sample_with(rng, |rng| Inner {
                test: common::random_text(rng),
                test2: rng.random(),
            }),
        }
    }
}

#[test]
fn test_present_int_encodes_bare() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Opt::some(5))?, "5");
    Ok(())
}

#[test]
fn test_absent_int_encodes_null() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Opt::<i32>::none())?, "null");
    let decoded: Opt<i32> = serde_json::from_str("null")?;
    assert_eq!(decoded, Opt::none());
    Ok(())
}

#[test]
fn test_struct_payload_encoding() -> anyhow::Result<()> {
    let present = Opt::some(Inner {
        test: "a".to_string(),
        test2: 2,
    });
    assert_eq!(serde_json::to_string(&present)?, r#"{"test":"a","test2":2}"#);

    let decoded: Opt<Inner> = serde_json::from_str(r#"{"test":"","test2":0}"#)?;
    assert!(decoded.is_present());
    assert!(decoded.value_or_zero().is_zero());
    Ok(())
}

#[test]
fn test_marshal_identity() -> anyhow::Result<()> {
    common::init_logger();

    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let thing = Thing::random(&mut rng);

        let data = serde_json::to_string(&thing)?;
        let decoded: Thing = serde_json::from_str(&data)?;

        assert_eq!(decoded, thing, "seed {} serialized to {}", seed, data);
    }
    Ok(())
}

#[test]
fn test_decode_error_surfaces() {
    common::init_logger();

    let result = serde_json::from_str::<Thing>(r#"{"int8": 1000}"#);
    assert!(result.is_err());

    let result = serde_json::from_str::<Opt<Inner>>(r#"{"test": 5}"#);
    assert!(result.is_err());
}

#[test]
fn test_missing_fields_decode_absent() -> anyhow::Result<()> {
    let decoded: Thing = serde_json::from_str(r#"{"int32": 7}"#)?;
    assert_eq!(decoded.int32, Opt::some(7));
    assert!(decoded.string.is_absent());
    assert!(decoded.inner.is_absent());
    Ok(())
}
