use super::{Int64, LIMB_BITS};

impl Int64 {
    /// Wrapping subtraction.
    ///
    /// The partial differences are computed as signed 32-bit integers, the
    /// arithmetic shift of a negative partial difference by the limb width is
    /// -1, which is exactly the borrow to propagate to the next limb.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let diff0 = self.low as i32 - rhs.low as i32;
        let diff1 = self.mid as i32 - rhs.mid as i32 + (diff0 >> LIMB_BITS);
        let diff2 = self.high as i32 - rhs.high as i32 + (diff1 >> LIMB_BITS);

        Self::create(diff0 as u32, diff1 as u32, diff2 as u32)
    }
}

impl std::ops::Sub<Self> for Int64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl std::ops::SubAssign<Self> for Int64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}
