use std::io::{Error, ErrorKind};

use long_emul::Int64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type EmulatedOp = fn(Int64, Int64) -> Option<Int64>;
type NativeOp = fn(i64, i64) -> Option<i64>;

/// A binary operation and its native `i64` counterpart, `None` when the
/// operation is undefined for the operands.
struct BinaryOperation {
    name: &'static str,
    emulated: EmulatedOp,
    native: NativeOp,
}

const BINARY_OPERATIONS: [BinaryOperation; 12] = [
    BinaryOperation {
        name: "add",
        emulated: |a, b| Some(a + b),
        native: |a, b| Some(a.wrapping_add(b)),
    },
    BinaryOperation {
        name: "sub",
        emulated: |a, b| Some(a - b),
        native: |a, b| Some(a.wrapping_sub(b)),
    },
    BinaryOperation {
        name: "mul",
        emulated: |a, b| Some(a * b),
        native: |a, b| Some(a.wrapping_mul(b)),
    },
    BinaryOperation {
        name: "div",
        emulated: Int64::checked_div,
        native: |a, b| (b != 0).then(|| a.wrapping_div(b)),
    },
    BinaryOperation {
        name: "rem",
        emulated: Int64::checked_rem,
        native: |a, b| (b != 0).then(|| a.wrapping_rem(b)),
    },
    BinaryOperation {
        name: "div_approx",
        emulated: |a, b| a.div_rem_approx(b).ok().map(|(q, _)| q),
        native: |a, b| (b != 0).then(|| a.wrapping_div(b)),
    },
    BinaryOperation {
        name: "and",
        emulated: |a, b| Some(a & b),
        native: |a, b| Some(a & b),
    },
    BinaryOperation {
        name: "or",
        emulated: |a, b| Some(a | b),
        native: |a, b| Some(a | b),
    },
    BinaryOperation {
        name: "xor",
        emulated: |a, b| Some(a ^ b),
        native: |a, b| Some(a ^ b),
    },
    BinaryOperation {
        name: "shl",
        emulated: |a, b| Some(a << b.to_i32() as u32),
        native: |a, b| Some(a.wrapping_shl(b as u32)),
    },
    BinaryOperation {
        name: "shr",
        emulated: |a, b| Some(a >> b.to_i32() as u32),
        native: |a, b| Some(a.wrapping_shr(b as u32)),
    },
    BinaryOperation {
        name: "shru",
        emulated: |a, b| Some(a.unsigned_shr(b.to_i32() as u32)),
        native: |a, b| Some((a as u64).wrapping_shr(b as u32) as i64),
    },
];

/// Small values, values around the limb boundaries and the extremes.
fn edge_values() -> Vec<i64> {
    let mut values = vec![i64::MIN, i64::MIN + 1, i64::MAX, i64::MAX - 1];
    for i in -4..=4i64 {
        values.push(i);
    }
    // 2^63 is covered by MIN
    for exponent in 1..63 {
        let power = 1i64 << exponent;
        values.extend([power - 1, power, power + 1]);
        values.extend([-(power - 1), -power, -(power + 1)]);
    }
    values.sort_unstable();
    values.dedup();
    values
}

/// Checks every binary operation against the native `i64` on all pairs of edge
/// values, then on `iterations` random pairs.
pub fn check_operations(iterations: usize, seed: u64) -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(seed);

    let values = edge_values();
    let mut pairs = Vec::with_capacity(values.len() * values.len() + iterations);
    for &a in &values {
        for &b in &values {
            pairs.push((a, b));
        }
    }
    for _ in 0..iterations {
        let a = rng.gen::<i64>() >> rng.gen_range(0..64);
        let b = rng.gen::<i64>() >> rng.gen_range(0..64);
        pairs.push((a, b));
    }
    log::debug!(
        "{} edge values, {} operand pairs, seed {seed}",
        values.len(),
        pairs.len()
    );

    let mut failed_operations = Vec::new();
    for operation in &BINARY_OPERATIONS {
        let mut mismatches = 0usize;
        for &(a, b) in &pairs {
            let expected = (operation.native)(a, b);
            let actual = (operation.emulated)(Int64::from_i64(a), Int64::from_i64(b))
                .map(Int64::to_i64);
            if actual != expected {
                if mismatches == 0 {
                    log::error!(
                        "{}({a}, {b}): expected {expected:?}, got {actual:?}",
                        operation.name
                    );
                }
                mismatches += 1;
            }
        }

        if mismatches == 0 {
            log::info!("{}: {} pairs OK", operation.name, pairs.len());
        } else {
            log::error!("{}: {mismatches} mismatches", operation.name);
            failed_operations.push(operation.name);
        }
    }

    if failed_operations.is_empty() {
        Ok(())
    } else {
        Err(mismatch_error(&failed_operations))
    }
}

fn mismatch_error(failed_operations: &[&str]) -> Error {
    Error::other(format!("mismatches found in {failed_operations:?}"))
}

/// Formats `count` random values to decimal, parses them back and compares both
/// steps with the native `i64`.
pub fn check_decimal_round_trip(count: usize, seed: u64) -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut mismatches = 0usize;
    for _ in 0..count {
        let value = rng.gen::<i64>();
        let emulated = Int64::from_i64(value);
        let string = emulated.to_decimal_string();
        let parsed = Int64::from_decimal_str(&string);

        if string != value.to_string() || parsed != Ok(emulated) {
            log::error!("{value}: formatted as {string:?}, parsed as {parsed:?}");
            mismatches += 1;
        }
    }

    if mismatches == 0 {
        log::info!("decimal round trip: {count} values OK");
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidData,
            format!("{mismatches} of {count} values did not survive the round trip"),
        ))
    }
}
