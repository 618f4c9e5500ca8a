use super::Int64;
use crate::error::DivideByZeroError;

impl Int64 {
    /// Truncating division, returns the quotient and the remainder.
    ///
    /// The quotient is rounded toward zero and the remainder has the sign of
    /// `self` (or is zero), so that `quotient * rhs + remainder == self`.
    /// `MIN / -1` wraps to `MIN` with a zero remainder.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    ///
    /// ```
    /// use long_emul::Int64;
    ///
    /// let (q, r) = Int64::from_i32(-7).div_rem(Int64::from_i32(2)).unwrap();
    /// assert_eq!(q, Int64::from_i32(-3));
    /// assert_eq!(r, Int64::from_i32(-1));
    ///
    /// assert!(Int64::ONE.div_rem(Int64::ZERO).is_err());
    /// ```
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self), DivideByZeroError> {
        if rhs.is_zero() {
            return Err(DivideByZeroError);
        }
        Ok(self.div_rem_nonzero(rhs))
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(_, remainder)| remainder)
    }

    /// `rhs` must not be zero.
    pub(crate) fn div_rem_nonzero(self, rhs: Self) -> (Self, Self) {
        if self.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }

        // MIN has no positive counterpart, so it cannot go through the
        // magnitude path below. Any other dividend is smaller in magnitude.
        if rhs.is_min_value() {
            return if self.is_min_value() {
                (Self::ONE, Self::ZERO)
            } else {
                (Self::ZERO, self)
            };
        }

        let dividend_negative = self.is_negative();
        let divisor_negative = rhs.is_negative();
        let quotient_negative = dividend_negative != divisor_negative;
        let divisor = rhs.abs();

        if let Some(exponent) = divisor.power_of_two_exponent() {
            if self.is_min_value() {
                let quotient = self.wrapping_shr(exponent);
                let quotient = if divisor_negative {
                    quotient.wrapping_neg()
                } else {
                    quotient
                };
                return (quotient, Self::ZERO);
            }

            let magnitude = self.abs();
            let quotient = magnitude.unsigned_shr(exponent);
            let remainder = magnitude.mask_right(exponent);
            return (
                quotient.negate_if(quotient_negative),
                remainder.negate_if(dividend_negative),
            );
        }

        // |MIN| = MAX + 1, as the divisor is not a power of two it does not
        // divide 2^63, dividing MAX gives the same quotient and a remainder
        // smaller by one.
        let min_substituted = self.is_min_value();
        let dividend = if min_substituted { Self::MAX } else { self.abs() };

        let (quotient, remainder) = Self::divide_magnitudes(dividend, divisor);

        let quotient = quotient.negate_if(quotient_negative);
        let mut remainder = remainder.negate_if(dividend_negative);
        if min_substituted {
            remainder = remainder.wrapping_sub(Self::ONE);
        }
        (quotient, remainder)
    }

    #[inline]
    const fn negate_if(self, condition: bool) -> Self {
        if condition {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Binary long division of two non negative values, one quotient bit per step.
    ///
    /// The divisor is aligned on the most significant bit of the dividend and
    /// shifted back right one bit at a time, it is subtracted whenever the
    /// difference stays non negative.
    fn divide_magnitudes(dividend: Self, divisor: Self) -> (Self, Self) {
        let dividend_lz = dividend.leading_zeros();
        let divisor_lz = divisor.leading_zeros();
        if dividend_lz > divisor_lz {
            return (Self::ZERO, dividend);
        }

        let gap = divisor_lz - dividend_lz;
        let mut shifted_divisor = divisor.wrapping_shl(gap);
        let mut quotient = Self::ZERO;
        let mut remainder = dividend;

        for bit in (0..=gap).rev() {
            let difference = remainder.wrapping_sub(shifted_divisor);
            if !difference.is_negative() {
                remainder = difference;
                quotient = quotient.with_bit_set(bit);
                if remainder.is_zero() {
                    break;
                }
            }
            shifted_divisor = shifted_divisor.unsigned_shr(1);
        }

        (quotient, remainder)
    }
}

impl std::ops::Div<Self> for Int64 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero, like the native integer types do.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl std::ops::DivAssign<Self> for Int64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl std::ops::Rem<Self> for Int64 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero, like the native integer types do.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Some(remainder) => remainder,
            None => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl std::ops::RemAssign<Self> for Int64 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}
