use std::collections::BTreeMap;

use rstest::rstest;
use uidnorm_codec::uidnorm_id::{AbstractUid, Uid, UidKind};
use uidnorm_codec::{
    CacheableSupports, CodecError, Context, Denormalized, Denormalizer, NormalizationFormat,
    Normalizer, NormalizerConfig, UidNormalizer,
};

fn uid(text: &str, kind: UidKind) -> Uid {
    Uid::parse(text, kind).unwrap()
}

fn context_for(format: Option<&str>) -> Context {
    match format {
        Some(format) => Context::new().with_format(format),
        None => Context::new(),
    }
}

// =============================================================================
// Encoding
// =============================================================================

#[rstest]
#[case::v1(
    "9b7541de-6f87-11ea-ab3c-9da9a81562fc",
    UidKind::UuidV1,
    "LCQS8f2p5SDSiAt9V7ZYnF",
    "4VEN0XWVW727NAPF4XN6M1ARQW"
)]
#[case::v3(
    "e576629b-ff34-3642-9c08-1f5219f0d45b",
    UidKind::UuidV3,
    "VLRwe3qfi66uUAE3mYQ4Dp",
    "75ESH9QZSM6S19R20ZA8CZ1N2V"
)]
#[case::v4(
    "4126dbc1-488e-4f6e-aadd-775dcbac482e",
    UidKind::UuidV4,
    "93d88pS3fdrDXNR2XxU9nu",
    "214VDW2J4E9XQANQBQBQ5TRJ1E"
)]
#[case::v5(
    "18cdf3d3-ea1b-5b23-a9c5-40abd0e2df22",
    UidKind::UuidV5,
    "44epMFQYZ9byVSGis5dofo",
    "0RSQSX7TGVBCHTKHA0NF8E5QS2"
)]
#[case::v6(
    "1ea6ecef-eb9a-66fe-b62b-957b45f17e43",
    UidKind::UuidV6,
    "4nXtvo2iuyYefrqTMhvogn",
    "0YMVPEZTWTCVZBCAWNFD2Z2ZJ3"
)]
fn test_encode_uuid_in_every_format(
    #[case] canonical: &str,
    #[case] kind: UidKind,
    #[case] base58: &str,
    #[case] base32: &str,
    #[values(None, Some("canonical"), Some("base_58"), Some("base_32"), Some("rfc_4122"))]
    format: Option<&str>,
) {
    let normalizer = UidNormalizer::new();
    let value = uid(canonical, UidKind::Uuid);
    assert_eq!(value.kind(), kind);

    let expected = match format {
        None | Some("canonical") | Some("rfc_4122") => canonical,
        Some("base_58") => base58,
        Some("base_32") => base32,
        Some(other) => unreachable!("unexpected format {other}"),
    };
    assert_eq!(normalizer.encode(&value, &context_for(format)).unwrap(), expected);
}

#[rstest]
#[case(None, "01E4BYF64YZ97MDV6RH0HAMN6X")]
#[case(Some("canonical"), "01E4BYF64YZ97MDV6RH0HAMN6X")]
#[case(Some("base_58"), "1BKuy2YWf8Yf9vSkA2wDpg")]
#[case(Some("base_32"), "01E4BYF64YZ97MDV6RH0HAMN6X")]
#[case(Some("rfc_4122"), "017117e7-989e-fa4f-46ec-d88822aa54dd")]
fn test_encode_ulid_in_every_format(#[case] format: Option<&str>, #[case] expected: &str) {
    let normalizer = UidNormalizer::new();
    let value = uid("01E4BYF64YZ97MDV6RH0HAMN6X", UidKind::Ulid);
    assert_eq!(normalizer.encode(&value, &context_for(format)).unwrap(), expected);
}

#[test]
fn test_encode_with_format_passed_in_config() {
    let normalizer =
        UidNormalizer::with_config(NormalizerConfig::new(NormalizationFormat::Rfc4122));
    let ulid = uid("01ETWV01C0GYQ5N92ZK7QRGB10", UidKind::Ulid);

    assert_eq!(
        normalizer.encode(&ulid, &Context::new()).unwrap(),
        "0176b9b0-0580-87ae-5aa4-5f99ef882c20"
    );
    assert_eq!(
        normalizer
            .encode(&ulid, &Context::new().with_format("canonical"))
            .unwrap(),
        "01ETWV01C0GYQ5N92ZK7QRGB10"
    );
}

#[rstest]
#[case("9b7541de-6f87-11ea-ab3c-9da9a81562fc", UidKind::Uuid)]
#[case("01E4BYF64YZ97MDV6RH0HAMN6X", UidKind::Ulid)]
fn test_encode_with_invalid_format(#[case] text: &str, #[case] kind: UidKind) {
    let normalizer = UidNormalizer::new();
    let result = normalizer.encode(&uid(text, kind), &Context::new().with_format("ccc"));

    let err = result.unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err.to_string(), "The \"ccc\" format is not valid.");
}

#[test]
fn test_supports_normalization() {
    let normalizer = UidNormalizer::new();
    assert!(normalizer.supports_normalization(&uid(
        "9b7541de-6f87-11ea-ab3c-9da9a81562fc",
        UidKind::Uuid
    )));
    assert!(normalizer.supports_normalization(&uid("01E4BYF64YZ97MDV6RH0HAMN6X", UidKind::Ulid)));
    assert!(!normalizer.supports_normalization(&String::from("01E4BYF64YZ97MDV6RH0HAMN6X")));
    assert!(!normalizer.supports_normalization(&()));
}

// =============================================================================
// Decoding
// =============================================================================

#[rstest]
#[case("9b7541de-6f87-11ea-ab3c-9da9a81562fc", "UuidV1")]
#[case("e576629b-ff34-3642-9c08-1f5219f0d45b", "UuidV3")]
#[case("4126dbc1-488e-4f6e-aadd-775dcbac482e", "UuidV4")]
#[case("18cdf3d3-ea1b-5b23-a9c5-40abd0e2df22", "UuidV5")]
#[case("1ea6ecef-eb9a-66fe-b62b-957b45f17e43", "UuidV6")]
#[case("1ea6ecef-eb9a-66fe-b62b-957b45f17e43", "AbstractUid")]
#[case("01E4BYF64YZ97MDV6RH0HAMN6X", "Ulid")]
fn test_denormalize(#[case] text: &str, #[case] type_name: &str) {
    let normalizer = UidNormalizer::new();
    assert!(normalizer.supports_denormalization(text, type_name));

    let kind = UidKind::from_type_name(type_name).unwrap();
    let expected = uid(text, kind);

    let immediate = normalizer.denormalize(text, type_name, &Context::new()).unwrap();
    assert_eq!(immediate, Denormalized::Value(expected));

    let collected = normalizer
        .denormalize(text, type_name, &Context::new().collecting())
        .unwrap();
    let result = collected.as_result().unwrap();
    assert!(result.is_successful());
    assert_eq!(result.value(), Some(&expected));
}

#[test]
fn test_decode_ulid_literal() {
    let normalizer = UidNormalizer::new();
    let decoded = normalizer
        .decode("01ETWV01C0GYQ5N92ZK7QRGB10", UidKind::Ulid)
        .unwrap();
    assert_eq!(decoded, uid("01ETWV01C0GYQ5N92ZK7QRGB10", UidKind::Ulid));
}

#[rstest]
#[case(UidKind::UuidV1)]
#[case(UidKind::UuidV3)]
#[case(UidKind::UuidV4)]
#[case(UidKind::UuidV5)]
#[case(UidKind::UuidV6)]
#[case(UidKind::AbstractUid)]
#[case(UidKind::Uuid)]
#[case(UidKind::Ulid)]
fn test_denormalize_returns_failure_result(#[case] kind: UidKind) {
    let normalizer = UidNormalizer::new();
    let ctx = Context::new().collecting();

    let outcome = normalizer
        .denormalize("not-an-uuid", kind.type_name(), &ctx)
        .unwrap();
    let result = outcome.as_result().unwrap();

    assert!(!result.is_successful());
    assert_eq!(
        result.violation_messages(),
        BTreeMap::from([(
            String::new(),
            vec![format!(
                "The data is not a valid \"{}\" string representation.",
                kind.type_name()
            )]
        )])
    );
}

#[rstest]
#[case(UidKind::UuidV4)]
#[case(UidKind::AbstractUid)]
#[case(UidKind::Ulid)]
fn test_denormalize_raises_without_collecting(#[case] kind: UidKind) {
    let normalizer = UidNormalizer::new();
    let err = normalizer
        .denormalize("not-an-uuid", kind.type_name(), &Context::new())
        .unwrap_err();

    assert!(err.is_validation_error());
    assert_eq!(
        err,
        CodecError::NotNormalizable {
            message: format!(
                "The data is not a valid \"{}\" string representation.",
                kind.type_name()
            )
        }
    );
}

#[rstest]
#[case::base58("LCQS8f2p5SDSiAt9V7ZYnF", UidKind::Uuid)]
#[case::base32("4VEN0XWVW727NAPF4XN6M1ARQW", UidKind::Uuid)]
#[case::simple_hex("9b7541de6f8711eaab3c9da9a81562fc", UidKind::Uuid)]
#[case::rfc4122_for_ulid("017117e7-989e-fa4f-46ec-d88822aa54dd", UidKind::Ulid)]
#[case::empty("", UidKind::Ulid)]
fn test_decode_accepts_only_canonical_text(#[case] text: &str, #[case] kind: UidKind) {
    let normalizer = UidNormalizer::new();
    assert!(normalizer.decode(text, kind).is_err());
}

#[test]
fn test_supports_denormalization_for_non_uid() {
    let normalizer = UidNormalizer::new();
    assert!(!normalizer.supports_denormalization("foo", "stdClass"));
    assert!(!normalizer.supports_denormalization(
        "9b7541de-6f87-11ea-ab3c-9da9a81562fc",
        "String"
    ));
}

#[test]
fn test_supports_denormalization_ignores_data() {
    let normalizer = UidNormalizer::new();
    for kind in UidKind::ALL {
        assert!(normalizer.supports_denormalization("garbage", kind.type_name()));
    }
}

#[test]
fn test_supports_answers_are_cacheable() {
    const CACHEABLE: bool = <UidNormalizer as CacheableSupports>::CACHEABLE_SUPPORTS;
    assert!(CACHEABLE);
}
