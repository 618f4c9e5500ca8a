use super::{Int64, HIGH_LIMB_BITS, LIMB_BITS, LOW_MID_BITS, MASK, MASK_HIGH};

/// Mask applied to shift amounts, as native 64-bit shifts do.
const SHIFT_MASK: u32 = Int64::BITS - 1;

impl Int64 {
    /// Sign extends the high limb to a 32-bit signed integer.
    #[inline]
    const fn high_sign_extended(self) -> i32 {
        ((self.high << (u32::BITS - HIGH_LIMB_BITS)) as i32) >> (u32::BITS - HIGH_LIMB_BITS)
    }

    /// Left shift, the shift amount is taken modulo 64.
    ///
    /// Bits shifted out of a limb are shifted in the next one, bits shifted
    /// out of the high limb are discarded.
    pub const fn wrapping_shl(self, shift: u32) -> Self {
        let n = shift & SHIFT_MASK;
        if n == 0 {
            return self;
        }

        let (low, mid, high) = if n < LIMB_BITS {
            (
                self.low << n,
                (self.mid << n) | (self.low >> (LIMB_BITS - n)),
                (self.high << n) | (self.mid >> (LIMB_BITS - n)),
            )
        } else if n < LOW_MID_BITS {
            (
                0,
                self.low << (n - LIMB_BITS),
                (self.mid << (n - LIMB_BITS)) | (self.low >> (LOW_MID_BITS - n)),
            )
        } else {
            (0, 0, self.low << (n - LOW_MID_BITS))
        };

        Self::create(low, mid, high)
    }

    /// Arithmetic right shift, the shift amount is taken modulo 64.
    ///
    /// Vacated bits are filled with copies of the sign bit.
    pub const fn wrapping_shr(self, shift: u32) -> Self {
        let n = shift & SHIFT_MASK;
        if n == 0 {
            return self;
        }

        let high = self.high_sign_extended();
        let (fill_mid, fill_high) = if self.is_negative() {
            (MASK, MASK_HIGH)
        } else {
            (0, 0)
        };

        let (low, mid, high) = if n < LIMB_BITS {
            (
                (self.low >> n) | (self.mid << (LIMB_BITS - n)),
                (self.mid >> n) | ((high as u32) << (LIMB_BITS - n)),
                (high >> n) as u32,
            )
        } else if n < LOW_MID_BITS {
            (
                (self.mid >> (n - LIMB_BITS)) | ((high as u32) << (LOW_MID_BITS - n)),
                (high >> (n - LIMB_BITS)) as u32,
                fill_high,
            )
        } else {
            ((high >> (n - LOW_MID_BITS)) as u32, fill_mid, fill_high)
        };

        Self::create(low, mid, high)
    }

    /// Logical right shift, the shift amount is taken modulo 64.
    ///
    /// Vacated bits are filled with zeros whatever the sign of the value.
    pub const fn unsigned_shr(self, shift: u32) -> Self {
        let n = shift & SHIFT_MASK;
        if n == 0 {
            return self;
        }

        let (low, mid, high) = if n < LIMB_BITS {
            (
                (self.low >> n) | (self.mid << (LIMB_BITS - n)),
                (self.mid >> n) | (self.high << (LIMB_BITS - n)),
                self.high >> n,
            )
        } else if n < LOW_MID_BITS {
            (
                (self.mid >> (n - LIMB_BITS)) | (self.high << (LOW_MID_BITS - n)),
                self.high >> (n - LIMB_BITS),
                0,
            )
        } else {
            (self.high >> (n - LOW_MID_BITS), 0, 0)
        };

        Self::create(low, mid, high)
    }
}

impl std::ops::Shl<u32> for Int64 {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        self.wrapping_shl(rhs)
    }
}

impl std::ops::ShlAssign<u32> for Int64 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = self.wrapping_shl(rhs);
    }
}

/// Arithmetic shift, use [`Int64::unsigned_shr`] for the logical one.
impl std::ops::Shr<u32> for Int64 {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        self.wrapping_shr(rhs)
    }
}

impl std::ops::ShrAssign<u32> for Int64 {
    fn shr_assign(&mut self, rhs: u32) {
        *self = self.wrapping_shr(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(high: u32, low: u32) -> Int64 {
        Int64::from_halves(high as i32, low as i32)
    }

    #[test]
    fn test_shift_vectors() {
        assert_eq!(bits(0x12341234, 0x45674567) << 10, bits(0xd048d115, 0x9d159c00));
        assert_eq!(bits(0x12341234, 0x45674567) >> 10, bits(0x48d04, 0x8d1159d1));
        assert_eq!(
            bits(0x12341234, 0x45674567).unsigned_shr(10),
            bits(0x48d04, 0x8d1159d1)
        );
        assert_eq!(bits(0x92341234, 0x45674567) << 10, bits(0xd048d115, 0x9d159c00));
        assert_eq!(bits(0x92341234, 0x45674567) >> 10, bits(0xffe48d04, 0x8d1159d1));
        assert_eq!(bits(0xfffffff, 0xffffffff) >> 34, Int64::from_i32(67108863));
        assert_eq!(
            bits(0x92341234, 0x45674567).unsigned_shr(10),
            bits(0x248d04, 0x8d1159d1)
        );
    }

    #[test]
    fn test_shift_of_minus_one() {
        assert_eq!(Int64::NEG_ONE >> 10, Int64::NEG_ONE);
        assert_eq!(Int64::NEG_ONE >> 63, Int64::NEG_ONE);
        assert_eq!(Int64::NEG_ONE << 5, Int64::from_i32(-1 << 5));
        assert_eq!(Int64::NEG_ONE << 0, Int64::NEG_ONE);
        assert_eq!((Int64::NEG_ONE << 32) << 32, Int64::ZERO);
        assert_eq!(Int64::NEG_ONE.unsigned_shr(63), Int64::ONE);
    }

    #[test]
    fn test_shift_of_min_value() {
        assert_eq!(Int64::ONE << 63, Int64::MIN);
        assert_eq!(Int64::MIN << 0, Int64::MIN);
        assert_eq!(Int64::MIN << 1, Int64::ZERO);
        assert_eq!(Int64::MIN >> 1, bits(0x40000000, 0).wrapping_neg());
        assert_eq!(bits(8, 0).wrapping_neg() >> 1, bits(0xfffffffc, 0));
        assert_eq!(bits(8, 0).wrapping_neg().unsigned_shr(1), bits(0x7ffffffc, 0));
    }

    #[test]
    fn test_shift_across_every_limb_case() {
        let positive = bits(0x72345678, 0x9abcdef0);
        let negative = bits(0x92345678, 0x9abcdef0);
        let shr_cases = [
            (8, bits(0x00723456, 0x789abcde), bits(0xff923456, 0x789abcde)),
            (16, bits(0x00007234, 0x56789abc), bits(0xffff9234, 0x56789abc)),
            (24, bits(0x00000072, 0x3456789a), bits(0xffffff92, 0x3456789a)),
            (28, bits(0x00000007, 0x23456789), bits(0xfffffff9, 0x23456789)),
            (32, bits(0x00000000, 0x72345678), bits(0xffffffff, 0x92345678)),
            (36, bits(0x00000000, 0x07234567), bits(0xffffffff, 0xf9234567)),
            (40, bits(0x00000000, 0x00723456), bits(0xffffffff, 0xff923456)),
            (44, bits(0x00000000, 0x00072345), bits(0xffffffff, 0xfff92345)),
            (48, bits(0x00000000, 0x00007234), bits(0xffffffff, 0xffff9234)),
        ];
        for (shift, expected_positive, expected_negative) in shr_cases {
            assert_eq!(positive >> shift, expected_positive, "shift: {shift}");
            assert_eq!(positive.unsigned_shr(shift), expected_positive, "shift: {shift}");
            assert_eq!(negative >> shift, expected_negative, "shift: {shift}");
        }

        let shru_cases = [
            (8, bits(0x00923456, 0x789abcde)),
            (16, bits(0x00009234, 0x56789abc)),
            (24, bits(0x00000092, 0x3456789a)),
            (28, bits(0x00000009, 0x23456789)),
            (32, bits(0x00000000, 0x92345678)),
            (36, bits(0x00000000, 0x09234567)),
            (40, bits(0x00000000, 0x00923456)),
            (44, bits(0x00000000, 0x00092345)),
            (48, bits(0x00000000, 0x00009234)),
        ];
        for (shift, expected) in shru_cases {
            assert_eq!(negative.unsigned_shr(shift), expected, "shift: {shift}");
        }
    }

    #[test]
    fn test_shift_amount_is_masked() {
        let value = bits(0x12345678, 0x9abcdef0);
        assert_eq!(value << 64, value);
        assert_eq!(value >> 65, value >> 1);
        assert_eq!(value.unsigned_shr(127), value.unsigned_shr(63));
        // A negative count as a native 32-bit shift would see it
        assert_eq!(value << (-1i32 as u32), value << 63);

        let mut assigned = value;
        assigned <<= 4;
        assigned >>= 4;
        assert_eq!(assigned, bits(0x02345678, 0x9abcdef0));
    }
}
