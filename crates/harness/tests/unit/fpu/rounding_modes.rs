use fpuconf_core::HarnessError;
use fpuconf_core::fpu::RoundingMode;
use rstest::rstest;

#[rstest]
#[case("-rnear_even", RoundingMode::Rne, 0)]
#[case("-rminMag", RoundingMode::Rtz, 1)]
#[case("-rmin", RoundingMode::Rdn, 2)]
#[case("-rmax", RoundingMode::Rup, 3)]
#[case("-rnear_maxMag", RoundingMode::Rmm, 4)]
fn test_selector_resolves(#[case] selector: &str, #[case] mode: RoundingMode, #[case] bits: u64) {
    let resolved = RoundingMode::from_selector(selector).unwrap();
    assert_eq!(resolved, mode);
    assert_eq!(resolved.bits(), bits);
    assert_eq!(resolved.selector(), selector);
    assert_eq!(RoundingMode::from_bits(bits), Some(mode));
}

#[rstest]
#[case("rnear_even")]
#[case("-rnear")]
#[case("-RNEAR_EVEN")]
#[case("")]
fn test_unknown_selector_is_usage_error(#[case] selector: &str) {
    let err = RoundingMode::from_selector(selector).unwrap_err();
    assert!(matches!(err, HarnessError::Usage(_)));
    assert_eq!(err.exit_code(), -1);
}

#[test]
fn test_reserved_encodings() {
    assert_eq!(RoundingMode::from_bits(5), None);
    assert_eq!(RoundingMode::from_bits(6), None);
    assert_eq!(RoundingMode::from_bits(7), None);
}

#[test]
fn test_default_and_display() {
    assert_eq!(RoundingMode::default(), RoundingMode::Rne);
    assert_eq!(RoundingMode::Rmm.to_string(), "-rnear_maxMag");
}
