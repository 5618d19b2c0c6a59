use fpuconf_core::config::Precision;
use rstest::rstest;

use super::check_model;

#[rstest]
#[case("eq", "3f800000 3f800000 1 0")]
#[case("eq", "3f800000 40000000 0 0")]
#[case("lt", "3f800000 40000000 1 0")]
#[case("le", "40000000 3f800000 0 0")]
#[case("le", "3f800000 3f800000 1 0")]
#[case("lt", "80000000 0 0 0")]
#[case("eq", "0 80000000 1 0")]
#[case("lt", "ff800000 7f800000 1 0")]
#[case::eq_quiet_nan("eq", "7fc00000 3f800000 0 0")]
#[case::eq_signaling_nan("eq", "7f800001 3f800000 0 10")]
#[case::le_quiet_nan("le", "7fc00000 3f800000 0 10")]
#[case::lt_quiet_nan("lt", "3f800000 7fc00000 0 10")]
fn test_fcmp_single(#[case] op: &str, #[case] record: &str) {
    check_model("fcmp", "-rnear_even", Some(op), Precision::F32, record);
}

#[test]
fn test_fcmp_double() {
    check_model(
        "fcmp",
        "-rmin",
        Some("lt"),
        Precision::F64,
        "bff0000000000000 3ff0000000000000 1 0",
    );
}
