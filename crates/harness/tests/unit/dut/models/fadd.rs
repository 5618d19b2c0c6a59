use fpuconf_core::config::Precision;
use rstest::rstest;

use super::check_model;

#[rstest]
#[case::one_plus_two("-rnear_even", "add", "3f800000 40000000 40400000 0")]
#[case::overflow_rne("-rnear_even", "add", "7f7fffff 7f7fffff 7f800000 5")]
#[case::overflow_rtz("-rminMag", "add", "7f7fffff 7f7fffff 7f7fffff 5")]
#[case::overflow_rdn("-rmin", "add", "7f7fffff 7f7fffff 7f7fffff 5")]
#[case::overflow_rup("-rmax", "add", "7f7fffff 7f7fffff 7f800000 5")]
#[case::neg_overflow_rdn("-rmin", "add", "ff7fffff ff7fffff ff800000 5")]
#[case::neg_overflow_rup("-rmax", "add", "ff7fffff ff7fffff ff7fffff 5")]
#[case::below_half_rne("-rnear_even", "add", "3f800000 33000000 3f800000 1")]
#[case::below_half_rup("-rmax", "add", "3f800000 33000000 3f800001 1")]
#[case::below_half_rmm("-rnear_maxMag", "add", "3f800000 33000000 3f800000 1")]
#[case::tie_rne("-rnear_even", "add", "3f800000 33800000 3f800000 1")]
#[case::tie_rmm("-rnear_maxMag", "add", "3f800000 33800000 3f800001 1")]
#[case::negative_rdn("-rmin", "add", "bf800000 b3000000 bf800001 1")]
#[case::negative_rtz("-rminMag", "add", "bf800000 b3000000 bf800000 1")]
#[case::inf_minus_inf("-rnear_even", "sub", "7f800000 7f800000 7fc00000 10")]
#[case::signaling_nan("-rnear_even", "add", "7f800001 3f800000 7fc00000 10")]
#[case::quiet_nan("-rnear_even", "add", "7fc00001 3f800000 7fc00000 0")]
#[case::inf_plus_finite("-rnear_even", "add", "7f800000 ff7fffff 7f800000 0")]
#[case::cancel_rne("-rnear_even", "sub", "3f800000 3f800000 0 0")]
#[case::cancel_rdn("-rmin", "sub", "3f800000 3f800000 80000000 0")]
#[case::neg_zeros("-rnear_even", "add", "80000000 80000000 80000000 0")]
#[case::mixed_zeros_rne("-rnear_even", "add", "0 80000000 0 0")]
#[case::mixed_zeros_rdn("-rmin", "add", "0 80000000 80000000 0")]
#[case::subnormal_exact("-rnear_even", "sub", "00800000 00000001 007fffff 0")]
fn test_fadd_single(#[case] rm: &str, #[case] op: &str, #[case] record: &str) {
    check_model("fadd", rm, Some(op), Precision::F32, record);
}

// 0.1 + 0.2 lies exactly halfway between two doubles.
#[rstest]
#[case("-rnear_even", "3fd3333333333334")]
#[case("-rnear_maxMag", "3fd3333333333334")]
#[case("-rminMag", "3fd3333333333333")]
#[case("-rmin", "3fd3333333333333")]
#[case("-rmax", "3fd3333333333334")]
fn test_fadd_double_tie(#[case] rm: &str, #[case] result: &str) {
    let record = format!("3fb999999999999a 3fc999999999999a {result} 1");
    check_model("fadd", rm, Some("add"), Precision::F64, &record);
}

#[test]
fn test_fadd_double_exact() {
    check_model(
        "fadd",
        "-rnear_even",
        Some("sub"),
        Precision::F64,
        "4008000000000000 3ff0000000000000 4000000000000000 0",
    );
}
