use fpuconf_core::config::Precision;
use rstest::rstest;

use super::check_model;

#[rstest]
#[case::exact("-rnear_even", "3ff0000000000000 3f800000 0")]
#[case::tie_rne("-rnear_even", "3ff0000010000000 3f800000 1")]
#[case::tie_rmm("-rnear_maxMag", "3ff0000010000000 3f800001 1")]
#[case::tie_rup("-rmax", "3ff0000010000000 3f800001 1")]
#[case::tie_rtz("-rminMag", "3ff0000010000000 3f800000 1")]
#[case::largest_single("-rnear_even", "47efffffe0000000 7f7fffff 0")]
#[case::overflow_rne("-rnear_even", "4c70000000000000 7f800000 5")]
#[case::overflow_rtz("-rminMag", "4c70000000000000 7f7fffff 5")]
#[case::underflow_rne("-rnear_even", "3370000000000000 0 3")]
#[case::underflow_rup("-rmax", "3370000000000000 1 3")]
#[case::signaling_nan("-rnear_even", "7ff0000000000001 7fc00000 10")]
#[case::quiet_nan("-rnear_even", "7ff8000000000000 7fc00000 0")]
#[case::neg_infinity("-rnear_even", "fff0000000000000 ff800000 0")]
#[case::neg_zero("-rnear_even", "8000000000000000 80000000 0")]
#[case::rounds_to_min_normal_rne("-rnear_even", "380fffffe8000000 00800000 3")]
#[case::rounds_to_min_normal_rtz("-rminMag", "380fffffe8000000 007fffff 3")]
#[case::rounds_to_min_normal_rdn("-rmin", "380fffffe8000000 007fffff 3")]
#[case::rounds_to_min_normal_rup("-rmax", "380fffffe8000000 00800000 1")]
#[case::rounds_to_min_normal_rmm("-rnear_maxMag", "380fffffe8000000 00800000 3")]
fn test_fptofp_narrow(#[case] rm: &str, #[case] record: &str) {
    check_model("fptofp", rm, None, Precision::F32, record);
}

#[rstest]
#[case("3f800000 3ff0000000000000 0")]
#[case("00000001 36a0000000000000 0")]
#[case("7f800001 7ff8000000000000 10")]
fn test_fptofp_widen(#[case] record: &str) {
    check_model("fptofp", "-rnear_even", None, Precision::F64, record);
}

#[rstest]
#[case(Precision::F32, "-rnear_even", "ui32_to_f", "ffffffff 4f800000 1")]
#[case(Precision::F32, "-rminMag", "ui32_to_f", "ffffffff 4f7fffff 1")]
#[case(Precision::F32, "-rnear_even", "ui32_to_f", "0 0 0")]
#[case(Precision::F32, "-rnear_even", "i32_to_f", "ffffffff bf800000 0")]
#[case(Precision::F32, "-rnear_even", "i32_to_f", "80000000 cf000000 0")]
#[case(Precision::F32, "-rnear_even", "i32_to_f", "01000001 4b800000 1")]
#[case(Precision::F32, "-rnear_maxMag", "i32_to_f", "01000001 4b800001 1")]
#[case(Precision::F32, "-rmin", "i32_to_f", "feffffff cb800001 1")]
#[case(Precision::F32, "-rnear_even", "i64_to_f", "8000000000000000 df000000 0")]
#[case(Precision::F32, "-rnear_even", "ui64_to_f", "ffffffffffffffff 5f800000 1")]
#[case(Precision::F64, "-rnear_even", "i32_to_f", "ffffffff bff0000000000000 0")]
#[case(Precision::F64, "-rnear_even", "i64_to_f", "0020000000000001 4340000000000000 1")]
#[case(Precision::F64, "-rnear_maxMag", "i64_to_f", "0020000000000001 4340000000000001 1")]
fn test_inttofp(
    #[case] precision: Precision,
    #[case] rm: &str,
    #[case] op: &str,
    #[case] record: &str,
) {
    check_model("inttofp", rm, Some(op), precision, record);
}
