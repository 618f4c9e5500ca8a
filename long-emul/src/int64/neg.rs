use super::Int64;

impl Int64 {
    /// Two's complement negation, `!self + 1`.
    ///
    /// The carry of the `+ 1` only reaches a limb when all the limbs below it
    /// are zero. [`Int64::MIN`] is its own negation.
    pub const fn wrapping_neg(self) -> Self {
        let neg0 = (!self.low).wrapping_add(1);
        let neg1 = (!self.mid).wrapping_add((self.low == 0) as u32);
        let neg2 = (!self.high).wrapping_add((self.low == 0 && self.mid == 0) as u32);

        Self::create(neg0, neg1, neg2)
    }
}

impl std::ops::Neg for Int64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}
