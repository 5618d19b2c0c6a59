use fpuconf_core::config::Precision;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

/// Adder results across rounding modes, specials, and signed zeros.
pub mod fadd;

/// Comparator predicates and invalid flag.
pub mod fcmp;

/// Float-to-float and integer-to-float conversions.
pub mod conversions;



/// Runs one record against the family's model and requires a pass.
fn check_model(family: &str, rm: &str, op: Option<&str>, precision: Precision, record: &str) {
    let ctx = TestContext::new(family, rm, op).with_config(|c| c.precision = precision);
    let outcome = ctx.run_model(record);
    assert_eq!(outcome.report, "cnt = 1 error=0\n", "record: {record}");
}
