use fpuconf_core::HarnessError;
use fpuconf_core::dut::ports::{self, ClockEdge, PortMap};

fn port_map() -> PortMap {
    PortMap::new("UNIT", &[ports::A, ports::B], &[ports::RESULT])
}

#[test]
fn test_inputs_hold_values_and_default_to_zero() {
    let mut map = port_map();
    assert_eq!(map.get(ports::A).unwrap(), 0);
    map.set(ports::A, 0x3f80_0000).unwrap();
    assert_eq!(map.get(ports::A).unwrap(), 0x3f80_0000);
    assert_eq!(map.input(ports::A), 0x3f80_0000);
}

#[test]
fn test_clock_and_reset_always_present() {
    let mut map = PortMap::new("BARE", &[], &[]);
    map.set(ports::CLOCK, 1).unwrap();
    map.set(ports::RESET, 1).unwrap();
    assert!(map.input_bit(ports::CLOCK));
    assert!(map.input_bit(ports::RESET));
}

#[test]
fn test_unknown_input_rejected_with_names() {
    let mut map = port_map();
    let err = map.set("io_c", 1).unwrap_err();
    match err {
        HarnessError::UnknownPort { device, port } => {
            assert_eq!(device, "UNIT");
            assert_eq!(port, "io_c");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_outputs_are_read_only_from_outside() {
    let mut map = port_map();
    assert!(matches!(
        map.set(ports::RESULT, 1),
        Err(HarnessError::UnknownPort { .. })
    ));
    map.drive(ports::RESULT, 7);
    assert_eq!(map.get(ports::RESULT).unwrap(), 7);
    map.clear_outputs();
    assert_eq!(map.get(ports::RESULT).unwrap(), 0);
}

#[test]
fn test_drive_ignores_undeclared_outputs() {
    let mut map = port_map();
    map.drive(ports::FFLAGS, 1);
    assert!(map.get(ports::FFLAGS).is_err());
}

#[test]
fn test_clock_edge_detects_only_rising() {
    let mut map = port_map();
    let mut edge = ClockEdge::default();
    assert!(!edge.rising(&map));
    map.set(ports::CLOCK, 1).unwrap();
    assert!(edge.rising(&map));
    assert!(!edge.rising(&map));
    map.set(ports::CLOCK, 0).unwrap();
    assert!(!edge.rising(&map));
    map.set(ports::CLOCK, 1).unwrap();
    assert!(edge.rising(&map));
}
