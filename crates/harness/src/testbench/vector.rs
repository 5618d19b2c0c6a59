//! Reference vector parsing.
//!
//! A vector stream is line-oriented text, one record per line, whitespace-separated hex
//! fields with an optional `0x` prefix:
//!
//! ```text
//! a b expected_result expected_flags   (two-operand families)
//! a   expected_result expected_flags   (one-operand families)
//! ```
//!
//! Blank lines are skipped. Anything else that does not fit the layout is a
//! [`HarnessError::MalformedRecord`]; a record is never partially applied.

use std::io::BufRead;

use crate::common::{HarnessError, Result};
use crate::fpu::{Arity, FpFlags};

/// One reference record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// Zero-based position among the records of the stream.
    pub index: usize,
    /// One-based line number in the stream.
    pub line: usize,
    /// First (or only) operand.
    pub a: u64,
    /// Second operand, present for two-operand families.
    pub b: Option<u64>,
    /// Result bits the reference produced.
    pub expected_result: u64,
    /// Flags the reference raised.
    pub expected_flags: FpFlags,
}

impl TestVector {
    /// Operands in record order, for display.
    pub fn operands(&self) -> impl Iterator<Item = u64> + '_ {
        std::iter::once(self.a).chain(self.b)
    }
}

/// Pulls [`TestVector`]s from a buffered text stream.
#[derive(Debug)]
pub struct VectorReader<R> {
    input: R,
    buffer: Vec<u8>,
    arity: Arity,
    line: usize,
    index: usize,
}

impl<R: BufRead> VectorReader<R> {
    /// Reads records of the given arity from `input`.
    pub fn new(input: R, arity: Arity) -> Self {
        Self {
            input,
            buffer: Vec::new(),
            arity,
            line: 0,
            index: 0,
        }
    }

    /// Returns the next record, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::MalformedRecord`] for a record that is not UTF-8, has the
    /// wrong field count, a non-hex field, or flags outside the 5-bit range, and
    /// [`HarnessError::Io`] if the stream fails.
    pub fn next_vector(&mut self) -> Result<Option<TestVector>> {
        loop {
            self.buffer.clear();
            if self.input.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = std::str::from_utf8(&self.buffer)
                .map_err(|_| HarnessError::malformed(self.line, "record is not valid UTF-8"))?;
            if text.trim().is_empty() {
                continue;
            }
            let vector = parse_record(text, self.arity, self.line, self.index)?;
            self.index += 1;
            return Ok(Some(vector));
        }
    }
}

impl<R: BufRead> Iterator for VectorReader<R> {
    type Item = Result<TestVector>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_vector().transpose()
    }
}

fn parse_record(text: &str, arity: Arity, line: usize, index: usize) -> Result<TestVector> {
    let fields = text.split_whitespace().collect::<Vec<_>>();
    if fields.len() != arity.field_count() {
        return Err(HarnessError::malformed(
            line,
            format!(
                "expected {} fields, found {}",
                arity.field_count(),
                fields.len()
            ),
        ));
    }
    let values = fields
        .iter()
        .map(|field| parse_hex(field).map_err(|reason| HarnessError::malformed(line, reason)))
        .collect::<Result<Vec<_>>>()?;

    let (a, b, expected_result, raw_flags) = match (arity, values.as_slice()) {
        (Arity::Unary, &[a, result, flags]) => (a, None, result, flags),
        (Arity::Binary, &[a, b, result, flags]) => (a, Some(b), result, flags),
        _ => return Err(HarnessError::malformed(line, "record layout mismatch")),
    };
    let expected_flags = FpFlags::from_bits(raw_flags).ok_or_else(|| {
        HarnessError::malformed(line, format!("flags value {raw_flags:x} exceeds 5 bits"))
    })?;

    Ok(TestVector {
        index,
        line,
        a,
        b,
        expected_result,
        expected_flags,
    })
}

fn parse_hex(field: &str) -> std::result::Result<u64, String> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("`{field}` is not a hex value"));
    }
    u64::from_str_radix(digits, 16).map_err(|e| format!("`{field}`: {e}"))
}
