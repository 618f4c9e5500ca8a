use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::Int64;
use crate::error::{ParseErrorKind, ParseInt64Error};

/// Largest power of ten that fits in a 32-bit integer, each division by it
/// produces nine digits.
const CHUNK_DIVISOR: Int64 = Int64::from_i32(1_000_000_000);

/// The magnitude of `MIN` cannot be computed by negation.
const MIN_VALUE_DIGITS: &str = "9223372036854775808";

const TEN: Int64 = Int64::from_i32(10);

impl Int64 {
    /// Decimal representation, with a leading `-` for negative values.
    ///
    /// ```
    /// use long_emul::Int64;
    ///
    /// assert_eq!(Int64::MIN.to_decimal_string(), "-9223372036854775808");
    /// assert_eq!(Int64::from_i32(-10).to_decimal_string(), "-10");
    /// ```
    pub fn to_decimal_string(self) -> String {
        self.to_string()
    }

    /// Digits of a non negative value.
    fn magnitude_digits(self) -> String {
        let mut chunks = Vec::new();
        let mut rest = self;
        loop {
            let (quotient, remainder) = rest.div_rem_nonzero(CHUNK_DIVISOR);
            chunks.push(remainder.to_i32());
            if quotient.is_zero() {
                break;
            }
            rest = quotient;
        }

        let mut chunks = chunks.into_iter().rev();
        let mut digits = chunks.next().unwrap_or(0).to_string();
        for chunk in chunks {
            digits.push_str(&format!("{chunk:09}"));
        }
        digits
    }

    /// Parses an optionally signed decimal number.
    ///
    /// The digits are accumulated as a negative number, whose range is large
    /// enough to hold `MIN`, and checked against the limit of the sign before
    /// each multiplication and subtraction.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseInt64Error`] if `src` is empty or only a sign, contains
    /// anything else than ascii digits after the sign, or does not fit in 64 bits.
    pub fn from_decimal_str(src: &str) -> Result<Self, ParseInt64Error> {
        let (negative, digits) = match src.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            [b'+', rest @ ..] => (false, rest),
            bytes => (false, bytes),
        };

        if digits.is_empty() {
            return Err(ParseInt64Error {
                kind: ParseErrorKind::Empty,
            });
        }

        let (limit, overflow) = if negative {
            (Self::MIN, ParseErrorKind::NegOverflow)
        } else {
            (Self::MAX.wrapping_neg(), ParseErrorKind::PosOverflow)
        };
        let overflow = ParseInt64Error { kind: overflow };
        let multiply_limit = limit.div_rem_nonzero(TEN).0;

        let mut result = Self::ZERO;
        for &byte in digits {
            let digit = match byte {
                b'0'..=b'9' => Self::from_i32(i32::from(byte - b'0')),
                _ => {
                    return Err(ParseInt64Error {
                        kind: ParseErrorKind::InvalidDigit,
                    })
                }
            };
            if result < multiply_limit {
                return Err(overflow);
            }
            result = result.wrapping_mul(TEN);
            if result < limit.wrapping_add(digit) {
                return Err(overflow);
            }
            result = result.wrapping_sub(digit);
        }

        Ok(if negative {
            result
        } else {
            result.wrapping_neg()
        })
    }
}

impl Display for Int64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_min_value() {
            return f.pad_integral(false, "", MIN_VALUE_DIGITS);
        }
        let digits = self.abs().magnitude_digits();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl FromStr for Int64 {
    type Err = ParseInt64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}
