//! Correctly rounded floating-point kernels with IEEE 754 exception flags.
//!
//! The host FPU only rounds to nearest-even, so every kernel here works the same way:
//! Two strategies are used:
//! 1. **Addition:** The host's nearest-even sum plus its TwoSum error, stepped one ulp for
//!    directed modes or away from zero on an exact tie.
//! 2. **Everything else:** An exact integer significand (quotient, integer square root,
//!    widened source value) with a sticky bit, rounded to the destination format in software.
//!
//! Flags follow RISC-V: NaN results are canonical, and underflow is raised when the result
//! is inexact and tiny after rounding with an unbounded exponent range.

use std::cmp::Ordering;
use std::ops::{Add, Div, Neg, Sub};

use crate::common::constants::{CANONICAL_NAN_F32, CANONICAL_NAN_F64};
use crate::fpu::{FpFlags, RoundingMode};

/// Host float formats the kernels operate on.
pub trait Ieee:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Positive zero.
    const ZERO: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Significand precision in bits, implicit bit included.
    const SIGNIFICAND_BITS: u32;
    /// Exponent bias of the encoding.
    const EXPONENT_BIAS: i32;
    /// Encoding width in bits.
    const WIDTH: u32;
    /// Canonical quiet NaN as a port value.
    const CANONICAL_NAN: u64;
    /// Quiet bit of the significand, as a port value.
    const QUIET_BIT: u64;

    /// Interprets the low bits of a port value.
    fn from_port(bits: u64) -> Self;
    /// Zero-extended port value.
    fn to_port(self) -> u64;

    /// NaN test.
    fn is_nan(self) -> bool;
    /// Infinity test.
    fn is_infinite(self) -> bool;
    /// Sign bit test.
    fn is_sign_negative(self) -> bool;
    /// Magnitude.
    fn abs(self) -> Self;
    /// Next representable value towards +∞.
    fn next_up(self) -> Self;

    /// Next representable value towards −∞.
    fn next_down(self) -> Self {
        -(-self).next_up()
    }

    /// NaN with the quiet bit clear.
    fn is_signaling(self) -> bool {
        self.is_nan() && self.to_port() & Self::QUIET_BIT == 0
    }
}

macro_rules! impl_ieee {
    ($float:ty, $bits:ty, $nan:expr) => {
        impl Ieee for $float {
            const ZERO: Self = 0.0;
            const MAX: Self = <$float>::MAX;
            const MIN_POSITIVE: Self = <$float>::MIN_POSITIVE;
            const INFINITY: Self = <$float>::INFINITY;
            const SIGNIFICAND_BITS: u32 = <$float>::MANTISSA_DIGITS;
            const EXPONENT_BIAS: i32 = <$float>::MAX_EXP - 1;
            const WIDTH: u32 = <$bits>::BITS;
            const CANONICAL_NAN: u64 = $nan as u64;
            const QUIET_BIT: u64 = 1 << (<$float>::MANTISSA_DIGITS - 2);

            fn from_port(bits: u64) -> Self {
                <$float>::from_bits(bits as $bits)
            }

            fn to_port(self) -> u64 {
                self.to_bits() as u64
            }

            fn is_nan(self) -> bool {
                <$float>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$float>::is_infinite(self)
            }

            fn is_sign_negative(self) -> bool {
                <$float>::is_sign_negative(self)
            }

            fn abs(self) -> Self {
                <$float>::abs(self)
            }

            fn next_up(self) -> Self {
                if <$float>::is_nan(self) || self == <$float>::INFINITY {
                    return self;
                }
                if self == 0.0 {
                    return <$float>::from_bits(1);
                }
                let bits = self.to_bits();
                if self > 0.0 {
                    <$float>::from_bits(bits + 1)
                } else {
                    <$float>::from_bits(bits - 1)
                }
            }
        }
    };
}

impl_ieee!(f32, u32, CANONICAL_NAN_F32);
impl_ieee!(f64, u64, CANONICAL_NAN_F64);

/// A nearest-even result and where the exact value lies relative to it.
#[derive(Clone, Copy, Debug)]
struct Nearest<F> {
    value: F,
    /// `exact.cmp(value)`.
    error: Ordering,
    /// The exact value is halfway between `value` and its neighbour in `error`'s direction.
    tie: bool,
}

impl<F: Ieee> Nearest<F> {
    const fn exact(value: F) -> Self {
        Self {
            value,
            error: Ordering::Equal,
            tie: false,
        }
    }
}

fn sign_of<F: Ieee>(value: F) -> Ordering {
    value.partial_cmp(&F::ZERO).unwrap_or(Ordering::Equal)
}

fn step_toward<F: Ieee>(value: F, direction: Ordering) -> F {
    match direction {
        Ordering::Greater => value.next_up(),
        Ordering::Less => value.next_down(),
        Ordering::Equal => value,
    }
}

/// True when the exact value lies further from zero than `value`.
fn exact_is_larger<F: Ieee>(value: F, error: Ordering) -> bool {
    if value.is_sign_negative() {
        error == Ordering::Less
    } else {
        error == Ordering::Greater
    }
}

fn round<F: Ieee>(nearest: Nearest<F>, rm: RoundingMode) -> (u64, FpFlags) {
    let Nearest { value, error, tie } = nearest;
    if error == Ordering::Equal {
        return (value.to_port(), FpFlags::NONE);
    }
    let rounded = match rm {
        RoundingMode::Rne => value,
        RoundingMode::Rmm if tie && exact_is_larger(value, error) => step_toward(value, error),
        RoundingMode::Rmm => value,
        RoundingMode::Rtz if exact_is_larger(value, error) => value,
        RoundingMode::Rtz => step_toward(value, error),
        RoundingMode::Rdn if error == Ordering::Less => value.next_down(),
        RoundingMode::Rup if error == Ordering::Greater => value.next_up(),
        RoundingMode::Rdn | RoundingMode::Rup => value,
    };
    // An inexact sum is never tiny: sums within the subnormal range are exact.
    let flags = if rounded.is_infinite() {
        FpFlags::OF | FpFlags::NX
    } else {
        FpFlags::NX
    };
    (rounded.to_port(), flags)
}

/// An exact magnitude `significand · 2^exponent`.
///
/// With `sticky` set, the true magnitude lies strictly between that value and
/// `(significand + 1) · 2^exponent`.
#[derive(Clone, Copy, Debug)]
struct Exact {
    negative: bool,
    significand: u128,
    exponent: i32,
    sticky: bool,
}

/// Integer significand and exponent of a finite value: `|x| = significand · 2^exponent`.
fn unpack<F: Ieee>(x: F) -> (u64, i32) {
    let fraction_bits = F::SIGNIFICAND_BITS - 1;
    let bits = x.to_port();
    let fraction = bits & ((1 << fraction_bits) - 1);
    let biased = (bits >> fraction_bits) & ((1 << (F::WIDTH - 1 - fraction_bits)) - 1);
    let min_exponent = 1 - F::EXPONENT_BIAS - fraction_bits as i32;
    if biased == 0 {
        (fraction, min_exponent)
    } else {
        (fraction | 1 << fraction_bits, min_exponent + biased as i32 - 1)
    }
}

/// Drops the low `shift` bits of `significand` and rounds; a negative shift widens exactly.
///
/// Returns the rounded integer and whether anything nonzero was dropped.
fn shift_round(
    significand: u128,
    sticky: bool,
    shift: i32,
    negative: bool,
    rm: RoundingMode,
) -> (u128, bool) {
    let (kept, half, below) = match u32::try_from(shift) {
        Err(_) | Ok(0) => (significand << shift.unsigned_abs(), false, sticky),
        Ok(s) if s > 128 => (0, false, significand != 0 || sticky),
        Ok(s) => {
            let dropped = significand & u128::MAX.checked_shr(128 - s).unwrap_or(0);
            let half_bit = 1u128 << (s - 1);
            (
                significand.checked_shr(s).unwrap_or(0),
                dropped & half_bit != 0,
                dropped & (half_bit - 1) != 0 || sticky,
            )
        }
    };
    let inexact = half || below;
    let increment = match rm {
        RoundingMode::Rne => half && (below || kept & 1 == 1),
        RoundingMode::Rmm => half,
        RoundingMode::Rtz => false,
        RoundingMode::Rdn => negative && inexact,
        RoundingMode::Rup => !negative && inexact,
    };
    (kept + u128::from(increment), inexact)
}

/// Rounds an exact value to the format of `F`.
///
/// Tininess is decided on the value rounded to full precision with an unbounded exponent,
/// before it is rounded again onto the subnormal grid.
fn round_exact<F: Ieee>(exact: Exact, rm: RoundingMode) -> (u64, FpFlags) {
    let Exact {
        negative,
        significand,
        exponent,
        sticky,
    } = exact;
    let sign = if negative { 1 << (F::WIDTH - 1) } else { 0 };
    if significand == 0 {
        return (sign, FpFlags::NONE);
    }

    let precision = F::SIGNIFICAND_BITS as i32;
    let top = 127 - significand.leading_zeros() as i32;
    let magnitude = top + exponent;
    let min_normal = 1 - F::EXPONENT_BIAS;
    let tiny = magnitude < min_normal - 1
        || (magnitude == min_normal - 1 && {
            let (kept, _) = shift_round(significand, sticky, top + 1 - precision, negative, rm);
            kept >> precision == 0
        });

    let lsb = (magnitude - (precision - 1)).max(min_normal - (precision - 1));
    let (kept, inexact) = shift_round(significand, sticky, lsb - exponent, negative, rm);
    // `kept` carries the implicit bit, which adds one to the exponent field.
    let field = lsb + (precision - 1) + F::EXPONENT_BIAS - 1;
    let encoded = ((field as u128) << (precision - 1)) + kept;
    let infinity = ((2 * F::EXPONENT_BIAS + 1) as u128) << (precision - 1);
    if encoded >= infinity {
        return overflow::<F>(negative, rm);
    }

    let mut flags = FpFlags::NONE;
    if inexact {
        flags |= FpFlags::NX;
        if tiny {
            flags |= FpFlags::UF;
        }
    }
    (sign | encoded as u64, flags)
}

/// Result of an operation whose nearest-even result overflowed.
fn overflow<F: Ieee>(negative: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let to_infinity = match rm {
        RoundingMode::Rne | RoundingMode::Rmm => true,
        RoundingMode::Rtz => false,
        RoundingMode::Rdn => negative,
        RoundingMode::Rup => !negative,
    };
    let magnitude = if to_infinity { F::INFINITY } else { F::MAX };
    let value = if negative { -magnitude } else { magnitude };
    (value.to_port(), FpFlags::OF | FpFlags::NX)
}

fn nan<F: Ieee>(invalid: bool) -> (u64, FpFlags) {
    let flags = if invalid { FpFlags::NV } else { FpFlags::NONE };
    (F::CANONICAL_NAN, flags)
}

/// `a + b`, or `a − b` when `subtract` is set.
pub fn add<F: Ieee>(a: F, b: F, subtract: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let b = if subtract { -b } else { b };
    if a.is_nan() || b.is_nan() {
        return nan::<F>(a.is_signaling() || b.is_signaling());
    }
    let sum = a + b;
    if sum.is_nan() {
        return nan::<F>(true);
    }
    if a.is_infinite() || b.is_infinite() {
        return (sum.to_port(), FpFlags::NONE);
    }
    if sum.is_infinite() {
        return overflow::<F>(sum.is_sign_negative(), rm);
    }

    // TwoSum: `error` is exactly (a + b) − sum.
    let b_virtual = sum - a;
    let error = (a - (sum - b_virtual)) + (b - b_virtual);
    let direction = sign_of(error);

    if direction == Ordering::Equal {
        if sum == F::ZERO {
            return (exact_zero_sum(a, b, rm).to_port(), FpFlags::NONE);
        }
        return round(Nearest::exact(sum), rm);
    }
    let neighbour = step_toward(sum, direction);
    let tie = neighbour - sum == error + error;
    round(
        Nearest {
            value: sum,
            error: direction,
            tie,
        },
        rm,
    )
}

/// Sign of an exactly-zero sum: operands' common sign when both are zeros of the same
/// sign, otherwise −0 only when rounding down.
fn exact_zero_sum<F: Ieee>(a: F, b: F, rm: RoundingMode) -> F {
    let same_signed_zeros =
        a == F::ZERO && b == F::ZERO && a.is_sign_negative() == b.is_sign_negative();
    let negative = if same_signed_zeros {
        a.is_sign_negative()
    } else {
        rm == RoundingMode::Rdn
    };
    if negative { -F::ZERO } else { F::ZERO }
}

/// `a / b`.
pub fn div<F: Ieee>(a: F, b: F, rm: RoundingMode) -> (u64, FpFlags) {
    if a.is_nan() || b.is_nan() {
        return nan::<F>(a.is_signaling() || b.is_signaling());
    }
    let a_zero = a == F::ZERO;
    let b_zero = b == F::ZERO;
    if (a_zero && b_zero) || (a.is_infinite() && b.is_infinite()) {
        return nan::<F>(true);
    }
    let negative = a.is_sign_negative() != b.is_sign_negative();
    if b_zero {
        let infinity = if negative { -F::INFINITY } else { F::INFINITY };
        return (infinity.to_port(), FpFlags::DZ);
    }
    if a_zero || a.is_infinite() || b.is_infinite() {
        return ((a / b).to_port(), FpFlags::NONE);
    }

    // Both significands normalized to bit 63 leave at least 64 quotient bits.
    let (dividend, dividend_exp) = unpack(a);
    let (divisor, divisor_exp) = unpack(b);
    let dividend_shift = dividend.leading_zeros();
    let divisor_shift = divisor.leading_zeros();
    let dividend = u128::from(dividend << dividend_shift) << 64;
    let divisor = u128::from(divisor << divisor_shift);
    round_exact::<F>(
        Exact {
            negative,
            significand: dividend / divisor,
            exponent: (dividend_exp - dividend_shift as i32) - (divisor_exp - divisor_shift as i32)
                - 64,
            sticky: dividend % divisor != 0,
        },
        rm,
    )
}

/// `√a`.
pub fn sqrt<F: Ieee>(a: F, rm: RoundingMode) -> (u64, FpFlags) {
    if a.is_nan() {
        return nan::<F>(a.is_signaling());
    }
    if a == F::ZERO {
        return (a.to_port(), FpFlags::NONE);
    }
    if a.is_sign_negative() {
        return nan::<F>(true);
    }
    if a.is_infinite() {
        return (a.to_port(), FpFlags::NONE);
    }

    // Radicand scaled to the top of a u128 with an even exponent: the integer root keeps
    // at least 63 bits.
    let (significand, exponent) = unpack(a);
    let mut shift = 64 + significand.leading_zeros() as i32;
    if (exponent - shift) % 2 != 0 {
        shift -= 1;
    }
    let radicand = u128::from(significand) << shift;
    let root = radicand.isqrt();
    round_exact::<F>(
        Exact {
            negative: false,
            significand: root,
            exponent: (exponent - shift) / 2,
            sticky: root * root != radicand,
        },
        rm,
    )
}

/// Outcome of a comparison: the three predicates and the flags raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// `a == b`.
    pub eq: bool,
    /// `a <= b`.
    pub le: bool,
    /// `a < b`.
    pub lt: bool,
    /// NV when an operand is a signaling NaN, or any NaN if `signaling` was requested.
    pub flags: FpFlags,
}

/// Compares `a` with `b`.
pub fn compare<F: Ieee>(a: F, b: F, signaling: bool) -> Comparison {
    let unordered = a.is_nan() || b.is_nan();
    let invalid = a.is_signaling() || b.is_signaling() || (signaling && unordered);
    Comparison {
        eq: a == b,
        le: a <= b,
        lt: a < b,
        flags: if invalid { FpFlags::NV } else { FpFlags::NONE },
    }
}

/// Integer to float.
pub fn from_int<F: Ieee>(value: i128, rm: RoundingMode) -> (u64, FpFlags) {
    if value == 0 {
        return (0, FpFlags::NONE);
    }
    round_exact::<F>(
        Exact {
            negative: value < 0,
            significand: value.unsigned_abs(),
            exponent: 0,
            sticky: false,
        },
        rm,
    )
}

/// Double to single precision.
pub fn narrow(x: f64, rm: RoundingMode) -> (u64, FpFlags) {
    if x.is_nan() {
        return nan::<f32>(Ieee::is_signaling(x));
    }
    if x.is_infinite() || x == 0.0 {
        return ((x as f32).to_port(), FpFlags::NONE);
    }
    let (significand, exponent) = unpack(x);
    round_exact::<f32>(
        Exact {
            negative: x.is_sign_negative(),
            significand: u128::from(significand),
            exponent,
            sticky: false,
        },
        rm,
    )
}

/// Single to double precision; always exact.
pub fn widen(x: f32) -> (u64, FpFlags) {
    if x.is_nan() {
        return nan::<f64>(Ieee::is_signaling(x));
    }
    (f64::from(x).to_port(), FpFlags::NONE)
}
