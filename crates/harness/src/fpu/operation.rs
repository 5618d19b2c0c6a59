//! Operation families and operation selectors.
//!
//! Each device family (adder, comparator, format converter, integer converter, divider)
//! accepts a fixed set of operation names. This module owns those lookup tables and
//! resolves a command-line invocation into an [`OperationConfig`] once, before the run
//! starts. Everything downstream receives the resolved value, never the strings.

use std::fmt;

use crate::common::{HarnessError, Result};

use super::rounding_modes::RoundingMode;

/// Number of operand fields a vector record carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// One operand: `a result flags`.
    Unary,
    /// Two operands: `a b result flags`.
    Binary,
}

impl Arity {
    /// Number of hex fields in one record for this arity.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Unary => 3,
            Self::Binary => 4,
        }
    }
}

/// How a family's result becomes available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latency {
    /// Result registered one clock period after the operands are applied.
    Fixed,
    /// Result announced by an output-valid handshake after a data-dependent number of cycles.
    Handshake,
}

/// Device family under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpFamily {
    /// Adder/subtractor (`FADD`).
    Add,
    /// Comparator (`FCMP`).
    Compare,
    /// Float-to-float format converter (`FPToFP`).
    FpToFp,
    /// Integer-to-float converter (`IntToFP`).
    IntToFp,
    /// Iterative divider / square root (`FDIV`).
    DivSqrt,
}

impl OpFamily {
    /// Family names accepted on the command line.
    pub const NAMES: [(&'static str, Self); 5] = [
        ("fadd", Self::Add),
        ("fcmp", Self::Compare),
        ("fptofp", Self::FpToFp),
        ("inttofp", Self::IntToFp),
        ("fdiv", Self::DivSqrt),
    ];

    /// Resolves a family name such as `fadd`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Usage`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, family)| family)
            .ok_or_else(|| HarnessError::Usage(format!("unknown family: {name}")))
    }

    /// Command-line name of the family.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, family)| *family == self)
            .map_or("?", |&(n, _)| n)
    }

    /// Operations selectable for this family, in selector-index order.
    ///
    /// The float-to-float converter has exactly one operation and takes no selector.
    pub const fn operations(self) -> &'static [Operation] {
        match self {
            Self::Add => &[Operation::Add, Operation::Sub],
            Self::Compare => &[Operation::Eq, Operation::Le, Operation::Lt],
            Self::FpToFp => &[Operation::Convert],
            Self::IntToFp => &[
                Operation::Ui32ToF,
                Operation::I32ToF,
                Operation::Ui64ToF,
                Operation::I64ToF,
            ],
            Self::DivSqrt => &[Operation::Div, Operation::Sqrt],
        }
    }

    /// Whether the invocation must name an operation.
    pub const fn takes_operation(self) -> bool {
        !matches!(self, Self::FpToFp)
    }

    /// Record layout for this family.
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Compare | Self::DivSqrt => Arity::Binary,
            Self::FpToFp | Self::IntToFp => Arity::Unary,
        }
    }

    /// Result timing for this family.
    pub const fn latency(self) -> Latency {
        match self {
            Self::DivSqrt => Latency::Handshake,
            _ => Latency::Fixed,
        }
    }
}

impl fmt::Display for OpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// a + b.
    Add,
    /// a − b.
    Sub,
    /// Quiet equality.
    Eq,
    /// Signaling less-or-equal.
    Le,
    /// Signaling less-than.
    Lt,
    /// a / b.
    Div,
    /// √a (operand b is ignored by the device).
    Sqrt,
    /// Float-to-float format conversion.
    Convert,
    /// Unsigned 32-bit integer to float.
    Ui32ToF,
    /// Signed 32-bit integer to float.
    I32ToF,
    /// Unsigned 64-bit integer to float.
    Ui64ToF,
    /// Signed 64-bit integer to float.
    I64ToF,
}

impl Operation {
    /// Selector spelling of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Eq => "eq",
            Self::Le => "le",
            Self::Lt => "lt",
            Self::Div => "div",
            Self::Sqrt => "sqrt",
            Self::Convert => "cvt",
            Self::Ui32ToF => "ui32_to_f",
            Self::I32ToF => "i32_to_f",
            Self::Ui64ToF => "ui64_to_f",
            Self::I64ToF => "i64_to_f",
        }
    }

    /// Family the operation belongs to.
    pub const fn family(self) -> OpFamily {
        match self {
            Self::Add | Self::Sub => OpFamily::Add,
            Self::Eq | Self::Le | Self::Lt => OpFamily::Compare,
            Self::Div | Self::Sqrt => OpFamily::DivSqrt,
            Self::Convert => OpFamily::FpToFp,
            Self::Ui32ToF | Self::I32ToF | Self::Ui64ToF | Self::I64ToF => OpFamily::IntToFp,
        }
    }

    /// Position of the operation in its family's selector list.
    ///
    /// Devices encode control bits from this index (e.g. `sign = index & 1`).
    pub fn selector_index(self) -> u64 {
        self.family()
            .operations()
            .iter()
            .position(|&op| op == self)
            .map_or(0, |i| i as u64)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved run configuration: what to compute and how to round it.
///
/// Static for the whole run; applied to the device's control inputs before the vector loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationConfig {
    /// Operation under test.
    pub op: Operation,
    /// Rounding mode driven onto the device.
    pub rounding_mode: RoundingMode,
}

impl OperationConfig {
    /// Builds a configuration from already-resolved values.
    pub const fn new(op: Operation, rounding_mode: RoundingMode) -> Self {
        Self { op, rounding_mode }
    }

    /// Resolves command-line strings for `family`.
    ///
    /// `op` must be present for every family except the float-to-float converter, which
    /// rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Usage`] for an unknown rounding mode or operation, a missing
    /// operation, or an operation given to a family that takes none.
    pub fn resolve(family: OpFamily, rounding_mode: &str, op: Option<&str>) -> Result<Self> {
        let rounding_mode = RoundingMode::from_selector(rounding_mode)?;
        let op = match (family.takes_operation(), op) {
            (true, Some(name)) => family
                .operations()
                .iter()
                .copied()
                .find(|candidate| candidate.name() == name)
                .ok_or_else(|| HarnessError::Usage(format!("unknown op: {name}")))?,
            (true, None) => {
                return Err(HarnessError::Usage(format!(
                    "{family} requires an operation: {}",
                    Self::operation_list(family)
                )));
            }
            (false, Some(name)) => {
                return Err(HarnessError::Usage(format!(
                    "{family} takes no operation, got: {name}"
                )));
            }
            (false, None) => Operation::Convert,
        };
        Ok(Self::new(op, rounding_mode))
    }

    /// Family of the configured operation.
    pub const fn family(&self) -> OpFamily {
        self.op.family()
    }

    fn operation_list(family: OpFamily) -> String {
        family
            .operations()
            .iter()
            .copied()
            .map(Operation::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
