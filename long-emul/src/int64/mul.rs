use super::Int64;

/// Width of the chunks multiplied together, products of two chunks and the
/// sums of up to five of them stay below 2^31.
const CHUNK_BITS: u32 = 13;
const CHUNK_MASK: u32 = (1 << CHUNK_BITS) - 1;

/// The 64-bit pattern split in five 13-bit chunks, least significant first.
///
/// The last chunk only has 12 bits.
#[inline]
const fn chunks(value: Int64) -> [u32; 5] {
    [
        value.low & CHUNK_MASK,
        (value.low >> 13) | ((value.mid & 0xf) << 9),
        (value.mid >> 4) & CHUNK_MASK,
        (value.mid >> 17) | ((value.high & 0xff) << 5),
        (value.high & 0xfff00) >> 8,
    ]
}

impl Int64 {
    /// Wrapping multiplication.
    ///
    /// Schoolbook multiplication on 13-bit chunks, the partial products of
    /// chunks whose weight is 2^65 or above are never computed.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3, a4] = chunks(self);
        let [b0, b1, b2, b3, b4] = chunks(rhs);

        // pi accumulates the products of weight 2^(13 * i)
        let mut p0 = 0;
        let mut p1 = 0;
        let mut p2 = 0;
        let mut p3 = 0;
        let mut p4 = 0;

        if b0 != 0 {
            p0 = a0 * b0;
            p1 = a1 * b0;
            p2 = a2 * b0;
            p3 = a3 * b0;
            p4 = a4 * b0;
        }
        if b1 != 0 {
            p1 += a0 * b1;
            p2 += a1 * b1;
            p3 += a2 * b1;
            p4 += a3 * b1;
        }
        if b2 != 0 {
            p2 += a0 * b2;
            p3 += a1 * b2;
            p4 += a2 * b2;
        }
        if b3 != 0 {
            p3 += a0 * b3;
            p4 += a1 * b3;
        }
        if b4 != 0 {
            p4 += a0 * b4;
        }

        // Realign the products on the 22-bit limbs, each carry is what exceeds
        // 22 bits in the previous column
        let c0 = p0 + ((p1 & 0x1ff) << 13);
        let c1 = (p1 >> 9) + ((p2 & 0x3ffff) << 4) + ((p3 & 0x1f) << 17) + (c0 >> 22);
        let c2 = (p2 >> 18) + (p3 >> 5) + ((p4 & 0xfff) << 8) + (c1 >> 22);

        Self::create(c0, c1, c2)
    }
}

impl std::ops::Mul<Self> for Int64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl std::ops::MulAssign<Self> for Int64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(rhs);
    }
}

impl std::iter::Product for Int64 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}
