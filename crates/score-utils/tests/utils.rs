// Public API checks across modules, the way an execution engine calls them.

use num_bigint::BigInt;
use score_utils::{
    Error,
    config::{Config, ConfigModel},
    prelude::*,
};
use serde_json::json;

const ENGINE_TOML: &str = r#"
[builtin_scores]
system = "cx0000000000000000000000000000000000000000"
governance = "cx0000000000000000000000000000000000000001"
chain = "cx0000000000000000000000000000000000000002"
"#;

fn load() -> Result<ConfigModel, Error> {
    Ok(Config::from_toml(ENGINE_TOML)?)
}

#[test]
fn configured_builtin_table_is_injected() {
    let config = load().expect("engine config loads");
    let scores = &config.builtin_scores;

    assert!(is_builtin_score(scores, "cx0000000000000000000000000000000000000002"));
    assert!(!is_builtin_score(scores, "cx0000000000000000000000000000000000000003"));
    assert!(!is_builtin_score(&BuiltinScores::default(), "cx0000000000000000000000000000000000000002"));
}

#[test]
fn bad_config_surfaces_as_crate_error() {
    let result: Result<ConfigModel, Error> =
        Config::from_toml("[builtin_scores]\nsystem = \"cx1\"").map_err(Error::from);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn integer_codec_round_trips_through_crate_error() -> Result<(), Error> {
    for n in [-1_i64, 0, 1, -128, 127, 128, i64::MIN, i64::MAX] {
        let big = BigInt::from(n);
        let bytes = int_to_bytes(&big)?;

        assert_eq!(bytes.len(), byte_length_of_int(&big));
        assert_eq!(int_from_bytes(&bytes), big);
    }

    Ok(())
}

#[test]
fn hashing_a_signed_integer() {
    // engines hash the canonical byte form, so -128 and 65408 must differ
    let a = int_to_bytes(&BigInt::from(-128)).expect("encodes");
    let b = int_to_bytes(&BigInt::from(65_408)).expect("encodes");

    assert_eq!(a, vec![0xff, 0x80]);
    assert_eq!(b, vec![0x00, 0xff, 0x80]);
    assert_ne!(sha3_256(&a), sha3_256(&b));
}

#[test]
fn rpc_method_names_and_responses() {
    assert_eq!(to_camel_case("get_score_status"), "getScoreStatus");

    let failure = json!({ "error": { "code": -32000, "message": "reverted" } });
    let success = json!({ "result": "0x1", "error": null });

    assert!(check_error_response(&failure));
    assert!(!check_error_response(&success));
    assert!(!is_lowercase_hex_value(&success["result"]));
    assert!(is_lowercase_hex_string(success["result"].as_str().unwrap_or_default().trim_start_matches("0x")));
}

#[test]
fn parameter_annotations_resolve_to_main_types() {
    let params = [
        (TypeAnnotation::plain(PlainType::Address), PlainType::Address),
        (TypeAnnotation::optional(PlainType::Int.into()), PlainType::Int),
        (TypeAnnotation::list(PlainType::Bytes.into()), PlainType::List),
    ];

    for (annotation, expected) in params {
        assert_eq!(
            get_main_type_from_annotation(&annotation),
            Some(TypeAnnotation::Plain(expected)),
            "{annotation}"
        );
    }
}
