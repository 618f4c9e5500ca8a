use super::{Int64, MASK, MASK_HIGH};

impl Int64 {
    #[inline]
    pub const fn bitand(self, rhs: Self) -> Self {
        Self::create(self.low & rhs.low, self.mid & rhs.mid, self.high & rhs.high)
    }

    #[inline]
    pub const fn bitor(self, rhs: Self) -> Self {
        Self::create(self.low | rhs.low, self.mid | rhs.mid, self.high | rhs.high)
    }

    #[inline]
    pub const fn bitxor(self, rhs: Self) -> Self {
        Self::create(self.low ^ rhs.low, self.mid ^ rhs.mid, self.high ^ rhs.high)
    }

    #[inline]
    pub const fn bitnot(self) -> Self {
        Self::create(!self.low & MASK, !self.mid & MASK, !self.high & MASK_HIGH)
    }
}

impl std::ops::Not for Int64 {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bitnot()
    }
}

impl std::ops::BitAnd<Self> for Int64 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::bitand(self, rhs)
    }
}

impl std::ops::BitAndAssign<Self> for Int64 {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = Self::bitand(*self, rhs);
    }
}

impl std::ops::BitOr<Self> for Int64 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::bitor(self, rhs)
    }
}

impl std::ops::BitOrAssign<Self> for Int64 {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = Self::bitor(*self, rhs);
    }
}

impl std::ops::BitXor<Self> for Int64 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::bitxor(self, rhs)
    }
}

impl std::ops::BitXorAssign<Self> for Int64 {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = Self::bitxor(*self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i64_with_odd_bits_set() -> i64 {
        let mut v = 0i64;

        for i in (1..=63).step_by(2) {
            v |= 1i64 << i;
        }

        v
    }

    fn i64_with_even_bits_set() -> i64 {
        let mut v = 0i64;

        // bit index are from 0 to 63
        for i in (0..=62).step_by(2) {
            v |= 1i64 << i;
        }

        v
    }

    #[test]
    fn test_bitand() {
        let all_even_bits_set = Int64::from_i64(i64_with_even_bits_set());
        let all_odd_bits_set = Int64::from_i64(i64_with_odd_bits_set());

        assert_ne!(all_odd_bits_set, all_even_bits_set);
        assert_eq!(all_odd_bits_set & all_odd_bits_set, all_odd_bits_set);
        assert_eq!(all_even_bits_set & all_even_bits_set, all_even_bits_set);
        assert_eq!(all_even_bits_set & all_odd_bits_set, Int64::ZERO);
    }

    #[test]
    fn test_bitor() {
        let all_even_bits_set = Int64::from_i64(i64_with_even_bits_set());
        let all_odd_bits_set = Int64::from_i64(i64_with_odd_bits_set());

        assert_eq!(all_odd_bits_set | all_odd_bits_set, all_odd_bits_set);
        assert_eq!(all_even_bits_set | all_odd_bits_set, Int64::NEG_ONE);
    }

    #[test]
    fn test_bitxor() {
        let all_even_bits_set = Int64::from_i64(i64_with_even_bits_set());
        let all_odd_bits_set = Int64::from_i64(i64_with_odd_bits_set());

        assert_eq!(all_odd_bits_set ^ all_odd_bits_set, Int64::ZERO);
        assert_eq!(all_even_bits_set ^ all_odd_bits_set, Int64::NEG_ONE);
    }

    #[test]
    fn test_bitnot() {
        assert_eq!(!Int64::NEG_ONE, Int64::ZERO);
        assert_eq!(!Int64::ZERO, Int64::NEG_ONE);
        assert_eq!(!Int64::MIN, Int64::MAX);
        assert_eq!(!Int64::from_i32(1234), Int64::from_i32(-1235));
        assert_eq!(
            !Int64::from_i32(0x1234).wrapping_shl(32),
            Int64::from_halves(0xffffedcb_u32 as i32, -1)
        );
    }

    #[test]
    fn test_small_values() {
        let n1 = Int64::from_i32(-1234);
        let n2 = Int64::from_i32(9876);
        assert_eq!(n1 & n2, Int64::from_i32(8708));
        assert_eq!(n1 | n2, Int64::from_i32(-66));
        assert_eq!(n1 ^ n2, Int64::from_i32(-8774));

        let mut acc = n1;
        acc &= n2;
        acc |= Int64::ONE;
        acc ^= Int64::TWO;
        assert_eq!(acc, Int64::from_i32((8708 | 1) ^ 2));
    }
}
