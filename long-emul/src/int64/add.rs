use super::{Int64, LIMB_BITS};

impl Int64 {
    /// Wrapping addition, the carry out of the high limb is discarded.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let sum0 = self.low + rhs.low;
        let sum1 = self.mid + rhs.mid + (sum0 >> LIMB_BITS);
        let sum2 = self.high + rhs.high + (sum1 >> LIMB_BITS);

        Self::create(sum0, sum1, sum2)
    }
}

impl std::ops::Add<Self> for Int64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl std::ops::AddAssign<Self> for Int64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl std::iter::Sum for Int64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(
            Int64::from_i32(1234) + Int64::from_i32(9876),
            Int64::from_i32(11110)
        );
        assert_eq!(
            Int64::from_i32(-1234) + Int64::from_i32(9876),
            Int64::from_i32(8642)
        );
        assert_eq!(
            Int64::from_i32(-1234) + Int64::from_i32(-9876),
            Int64::from_i32(-11110)
        );
        assert_eq!(
            Int64::from_halves(0x12345678, 0xabcdabcd_u32 as i32)
                + Int64::from_halves(0x77773333, 0x22224444),
            Int64::from_halves(0x89ab89ab_u32 as i32, 0xcdeff011_u32 as i32)
        );
    }

    #[test]
    fn test_carry_crosses_every_limb() {
        let low_full = Int64::from_i64((1 << 22) - 1);
        assert_eq!((low_full + Int64::ONE).to_i64(), 1 << 22);

        let low_mid_full = Int64::from_i64((1 << 44) - 1);
        assert_eq!((low_mid_full + Int64::ONE).to_i64(), 1 << 44);
    }

    #[test]
    fn test_add_wrap_around() {
        assert_eq!(Int64::MAX + Int64::ONE, Int64::MIN);
        assert_eq!(Int64::NEG_ONE + Int64::ONE, Int64::ZERO);
        assert_eq!(Int64::MIN + Int64::MIN, Int64::ZERO);
    }

    #[test]
    fn test_add_matches_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let a = rng.gen::<i64>();
            let b = rng.gen::<i64>();
            let mut sum = Int64::from_i64(a);
            sum += Int64::from_i64(b);
            assert_eq!(sum.to_i64(), a.wrapping_add(b));
        }
    }

    #[test]
    fn test_sum() {
        let total: Int64 = (1..=100).map(Int64::from_i32).sum();
        assert_eq!(total, Int64::from_i32(5050));
    }
}
