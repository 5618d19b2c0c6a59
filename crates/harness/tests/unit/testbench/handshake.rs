use fpuconf_core::dut::ports;
use fpuconf_core::fpu::{Arity, OpFamily};
use fpuconf_core::testbench::runner::{HandshakeRunner, Runner};
use fpuconf_core::testbench::sequencer::ClockSequencer;
use fpuconf_core::{Dut, HarnessError, OperationConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::vector;
use crate::common::harness::TestContext;
use crate::common::mocks::{Response, ScriptedDivider};

fn divide(rm: &str, op: &str) -> OperationConfig {
    OperationConfig::resolve(OpFamily::DivSqrt, rm, Some(op)).unwrap()
}

#[rstest]
#[case(1, 2)]
#[case(5, 6)]
#[case(40, 41)]
fn test_cycles_counted_from_issue(#[case] latency: u32, #[case] cycles: u64) {
    let mut dut = ScriptedDivider::new([Response::after(latency, 0x3f00_0000, 0)]);
    let mut seq = ClockSequencer::new();
    let v = vector("3f800000 40000000 3f000000 0", Arity::Binary);

    let result = HandshakeRunner::new(100)
        .run(&mut seq, &mut dut, &v, &divide("-rnear_even", "div"))
        .unwrap();
    assert_eq!(result.result, 0x3f00_0000);
    assert_eq!(result.flags, 0);
    assert_eq!(result.cycles, cycles);
    assert_eq!(seq.cycle(), cycles);
    assert_eq!(dut.accepted, vec![(0x3f80_0000, 0x4000_0000, 0, 0)]);
}

#[test]
fn test_valid_and_ready_held_high() {
    let mut dut = ScriptedDivider::new([Response::after(3, 0, 0)]);
    let v = vector("3f800000 40000000 3f000000 0", Arity::Binary);
    let _ = HandshakeRunner::new(10)
        .run(&mut ClockSequencer::new(), &mut dut, &v, &divide("-rmin", "div"))
        .unwrap();
    assert_eq!(dut.get(ports::IN_VALID).unwrap(), 1);
    assert_eq!(dut.get(ports::OUT_READY).unwrap(), 1);
}

#[test]
fn test_timeout_after_budget() {
    let mut dut = ScriptedDivider::stuck();
    let mut seq = ClockSequencer::new();
    let v = vector("3f800000 40400000 3eaaaaab 1", Arity::Binary);
    let err = HandshakeRunner::new(8)
        .run(&mut seq, &mut dut, &v, &divide("-rnear_even", "div"))
        .unwrap_err();
    match err {
        HarnessError::DeviceTimeout {
            device,
            index,
            cycles,
        } => {
            assert_eq!(device, "SCRIPTED_FDIV");
            assert_eq!(index, 0);
            assert_eq!(cycles, 8);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(seq.cycle(), 9);
}

#[test]
fn test_sqrt_selects_unit_and_rounding() {
    let mut dut = ScriptedDivider::new([Response::after(2, 0x3fb5_04f4, 1)]);
    let v = vector("40000000 0 3fb504f4 1", Arity::Binary);
    let result = HandshakeRunner::new(10)
        .run(&mut ClockSequencer::new(), &mut dut, &v, &divide("-rmax", "sqrt"))
        .unwrap();
    assert_eq!(dut.accepted, vec![(0x4000_0000, 0, 1, 3)]);
    assert_eq!((result.result, result.flags), (0x3fb5_04f4, 1));
}

#[test]
fn test_divide_by_zero_record() {
    let ctx = TestContext::new("fdiv", "-rnear_even", Some("div"));
    let mut dut = ScriptedDivider::new([Response::after(4, 0x7fc0_0000, 0x10)]);
    let outcome = ctx.run(&mut dut, "3f800000 00000000 7fc00000 00000010\n");
    assert_eq!(outcome.report, "cnt = 1 error=0\n");
    assert_eq!(outcome.stats().max_latency, 5);
}

#[test]
fn test_back_to_back_vectors() {
    let ctx = TestContext::new("fdiv", "-rminMag", Some("div"));
    let mut dut = ScriptedDivider::new([
        Response::after(3, 0x3f00_0000, 0),
        Response::after(7, 0x3eaa_aaaa, 1),
        Response::after(1, 0x7f80_0000, 8),
    ]);
    let stream = "\
3f800000 40000000 3f000000 0
3f800000 40400000 3eaaaaaa 1
3f800000 00000000 7f800000 8
";
    let outcome = ctx.run(&mut dut, stream);
    let stats = outcome.stats();
    assert_eq!(stats.processed, 3);
    assert_eq!(stats.max_latency, 8);
    assert_eq!(stats.total_latency, 4 + 8 + 2);
    assert_eq!(dut.accepted.len(), 3);
    assert!(dut.accepted.iter().all(|&(_, _, sqrt, rm)| sqrt == 0 && rm == 1));
}
