use std::cmp::Ordering;
use std::io::{Error, ErrorKind};

use long_emul::Int64;

/// Operators accepted by [`eval`].
pub const OPERATORS: [&str; 12] = [
    "+", "-", "*", "/", "%", "&", "|", "^", "<<", ">>", ">>>", "cmp",
];

fn parse_operand(src: &str) -> Result<Int64, Error> {
    src.parse::<Int64>()
        .map_err(|err| Error::new(ErrorKind::InvalidInput, format!("{src:?}: {err}")))
}

/// Applies `op` to two decimal operands and returns the decimal result.
///
/// Shift counts are the low 32 bits of `rhs`, taken modulo 64. `cmp` returns -1, 0 or 1.
pub fn eval(lhs: &str, op: &str, rhs: &str) -> Result<String, Error> {
    let a = parse_operand(lhs)?;
    let b = parse_operand(rhs)?;
    let shift = b.to_i32() as u32;

    let divide_by_zero = |_| Error::new(ErrorKind::InvalidInput, "attempt to divide by zero");

    let result = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a.div_rem(b).map_err(divide_by_zero)?.0,
        "%" => a.div_rem(b).map_err(divide_by_zero)?.1,
        "&" => a & b,
        "|" => a | b,
        "^" => a ^ b,
        "<<" => a << shift,
        ">>" => a >> shift,
        ">>>" => a.unsigned_shr(shift),
        "cmp" => match a.cmp(&b) {
            Ordering::Less => Int64::NEG_ONE,
            Ordering::Equal => Int64::ZERO,
            Ordering::Greater => Int64::ONE,
        },
        _ => {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("unknown operator {op:?}, expected one of {OPERATORS:?}"),
            ))
        }
    };

    log::debug!("{a:?} {op} {b:?} = {result:?}");

    Ok(result.to_decimal_string())
}
