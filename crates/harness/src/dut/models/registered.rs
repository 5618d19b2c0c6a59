//! Single-cycle registered device shell.
//!
//! Combinational datapaths are wrapped in an output register: on every rising clock edge the
//! datapath is evaluated against the current inputs and its outputs are latched. While
//! `reset` is high the register clears instead.

use crate::common::Result;
use crate::dut::Dut;
use crate::dut::ports::{self, ClockEdge, PortMap};

/// A combinational datapath with a fixed port list.
pub trait Datapath {
    /// Device name reported through [`Dut::name`].
    const NAME: &'static str;
    /// Input port names, excluding `clock` and `reset`.
    const INPUTS: &'static [&'static str];
    /// Output port names.
    const OUTPUTS: &'static [&'static str];

    /// Computes the outputs for the current inputs.
    fn evaluate(&self, io: &PortMap) -> Vec<(&'static str, u64)>;
}

/// A [`Datapath`] behind an output register clocked on the rising edge.
#[derive(Debug, Clone)]
pub struct RegisteredModel<D> {
    datapath: D,
    ports: PortMap,
    edge: ClockEdge,
}

impl<D: Datapath> RegisteredModel<D> {
    /// Wraps `datapath`; all ports start at zero.
    pub fn new(datapath: D) -> Self {
        Self {
            datapath,
            ports: PortMap::new(D::NAME, D::INPUTS, D::OUTPUTS),
            edge: ClockEdge::default(),
        }
    }
}

impl<D: Datapath> Dut for RegisteredModel<D> {
    fn name(&self) -> &str {
        D::NAME
    }

    fn set(&mut self, port: &str, value: u64) -> Result<()> {
        self.ports.set(port, value)
    }

    fn get(&self, port: &str) -> Result<u64> {
        self.ports.get(port)
    }

    fn eval(&mut self) {
        if !self.edge.rising(&self.ports) {
            return;
        }
        if self.ports.input_bit(ports::RESET) {
            self.ports.clear_outputs();
            return;
        }
        for (port, value) in self.datapath.evaluate(&self.ports) {
            self.ports.drive(port, value);
        }
    }
}
