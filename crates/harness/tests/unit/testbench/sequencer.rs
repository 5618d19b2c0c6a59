use std::cell::RefCell;
use std::rc::Rc;

use fpuconf_core::Dut;
use fpuconf_core::dut::ports;
use fpuconf_core::fpu::OpFamily;
use fpuconf_core::testbench::observer::{StepObserver, TraceObserver};
use fpuconf_core::testbench::sequencer::ClockSequencer;
use pretty_assertions::assert_eq;

use crate::common::mocks::{Event, RecordingDevice};

fn set(port: &str, value: u64) -> Event {
    Event::Set(port.to_string(), value)
}

fn period() -> Vec<Event> {
    vec![
        set(ports::CLOCK, 0),
        Event::Eval,
        set(ports::CLOCK, 1),
        Event::Eval,
    ]
}

/// Records the cycle numbers it is called with.
struct CycleLog(Rc<RefCell<Vec<u64>>>);

impl StepObserver for CycleLog {
    fn on_step(&mut self, cycle: u64, _dut: &dyn Dut) {
        self.0.borrow_mut().push(cycle);
    }
}

#[test]
fn test_step_is_low_eval_high_eval() {
    let mut seq = ClockSequencer::new();
    let mut dut = RecordingDevice::new();
    seq.step(&mut dut).unwrap();
    assert_eq!(dut.events, period());
    assert_eq!(dut.rising_edges, 1);
    assert_eq!(seq.cycle(), 1);
}

#[test]
fn test_reset_sequence() {
    let mut seq = ClockSequencer::new();
    let mut dut = RecordingDevice::new();
    seq.reset(&mut dut, 2).unwrap();

    let mut expected = vec![set(ports::RESET, 1)];
    expected.extend(period());
    expected.extend(period());
    expected.push(set(ports::RESET, 0));
    expected.extend(period());
    assert_eq!(dut.events, expected);
    assert_eq!(dut.reset_edges, 2);
    assert_eq!(dut.rising_edges, 3);
    assert_eq!(seq.cycle(), 3);
    assert_eq!(dut.input(ports::RESET), Some(0));
}

#[test]
fn test_reset_without_assert_cycles() {
    let mut seq = ClockSequencer::new();
    let mut dut = RecordingDevice::new();
    seq.reset(&mut dut, 0).unwrap();
    assert_eq!(dut.reset_edges, 0);
    assert_eq!(dut.rising_edges, 1);
}

#[test]
fn test_observers_see_every_cycle() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut seq = ClockSequencer::default();
    seq.add_observer(Box::new(CycleLog(Rc::clone(&log))));
    let mut dut = RecordingDevice::new();
    seq.reset(&mut dut, 3).unwrap();
    seq.step(&mut dut).unwrap();
    assert_eq!(*log.borrow(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_trace_observer_tolerates_missing_ports() {
    let mut seq = ClockSequencer::new();
    seq.add_observer(Box::new(TraceObserver::for_family(OpFamily::DivSqrt)));
    let mut dut = fpuconf_core::dut::models::build(OpFamily::Add, Default::default());
    seq.reset(dut.as_mut(), 1).unwrap();
    assert_eq!(seq.cycle(), 2);
}

#[test]
fn test_debug_reports_observer_count() {
    let mut seq = ClockSequencer::new();
    seq.add_observer(Box::new(TraceObserver::new(vec![ports::RESULT])));
    assert_eq!(
        format!("{seq:?}"),
        "ClockSequencer { cycle: 0, observers: 1 }"
    );
}
