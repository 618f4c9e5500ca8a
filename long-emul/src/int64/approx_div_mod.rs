use super::Int64;
use crate::error::DivideByZeroError;

/// Number of estimate and correct steps before giving up on the float estimate.
const MAX_REFINEMENT_STEPS: usize = 64;

impl Int64 {
    /// Truncating division, same results as [`Int64::div_rem`].
    ///
    /// The quotient is estimated with a float division and the remainder is
    /// then computed exactly. While the remainder is not the truncating one,
    /// the quotient is corrected by an estimate of `remainder / rhs`, or by one
    /// when that estimate is zero. Divisions involving [`Int64::MIN`] or a power
    /// of two divisor go to the bit by bit algorithm, so do the ones that do not
    /// settle within a bounded number of steps.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn div_rem_approx(self, rhs: Self) -> Result<(Self, Self), DivideByZeroError> {
        if rhs.is_zero() {
            return Err(DivideByZeroError);
        }
        if self.is_zero()
            || self.is_min_value()
            || rhs.is_min_value()
            || rhs.abs().is_power_of_two()
        {
            return Ok(self.div_rem_nonzero(rhs));
        }

        let divisor = rhs.to_f64();
        let mut quotient = Self::ZERO;
        let mut remainder = self;

        for _ in 0..MAX_REFINEMENT_STEPS {
            if remainder.is_truncated_remainder(self, rhs) {
                return Ok((quotient, remainder));
            }

            let mut step = Self::from_f64((remainder.to_f64() / divisor).trunc());
            if step.is_zero() {
                step = if remainder.is_negative() == rhs.is_negative() {
                    Self::ONE
                } else {
                    Self::NEG_ONE
                };
            }

            quotient = quotient.wrapping_add(step);
            remainder = remainder.wrapping_sub(step.wrapping_mul(rhs));
        }

        Ok(self.div_rem_nonzero(rhs))
    }

    /// Whether `self` can be the remainder of a truncating division of `dividend` by
    /// `divisor`: zero or of the sign of the dividend, and smaller than the divisor in
    /// magnitude.
    ///
    /// `divisor` must not be [`Int64::MIN`].
    fn is_truncated_remainder(self, dividend: Self, divisor: Self) -> bool {
        if self.is_zero() {
            return true;
        }
        if self.is_negative() != dividend.is_negative() {
            return false;
        }
        self.abs() < divisor.abs()
    }
}
