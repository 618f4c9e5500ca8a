use super::{Int64, LIMB_BITS, LOW_MID_BITS, MASK_HIGH};
use crate::numeric::CastFrom;

const TWO_PWR_22_DBL: f64 = (1u32 << LIMB_BITS) as f64;
const TWO_PWR_44_DBL: f64 = TWO_PWR_22_DBL * TWO_PWR_22_DBL;
const TWO_PWR_63_DBL: f64 = TWO_PWR_44_DBL * (1u32 << 19) as f64;

impl Int64 {
    /// Sign extends a 32-bit integer.
    pub const fn from_i32(value: i32) -> Self {
        let high = if value < 0 { MASK_HIGH } else { 0 };
        Self::create(value as u32, (value >> LIMB_BITS) as u32, high)
    }

    /// Builds a value from its most and least significant 32 bits.
    ///
    /// ```
    /// use long_emul::Int64;
    ///
    /// let value = Int64::from_halves(0xdeadbeef_u32 as i32, 0x12341234);
    /// assert_eq!(format!("{value:x}"), "deadbeef12341234");
    /// ```
    pub fn from_halves(high: i32, low: i32) -> Self {
        let low = Self::create(low as u32, (low as u32) >> LIMB_BITS, 0);
        Self::from_i32(high).wrapping_shl(32) | low
    }

    /// The 32 most significant bits.
    pub fn high_bits(self) -> i32 {
        self.wrapping_shr(32).to_i32()
    }

    /// The 32 least significant bits, same as [`Int64::to_i32`].
    pub fn low_bits(self) -> i32 {
        self.to_i32()
    }

    /// Converts a float, truncating toward zero.
    ///
    /// NaN is converted to zero, values out of the range of the type saturate
    /// to [`Int64::MIN`] or [`Int64::MAX`], this is the behaviour of `f64 as i64`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        if value < -TWO_PWR_63_DBL {
            return Self::MIN;
        }
        if value >= TWO_PWR_63_DBL {
            return Self::MAX;
        }

        let negative = value < 0.0;
        let mut magnitude = value.abs().floor();

        let high = (magnitude / TWO_PWR_44_DBL).floor();
        magnitude -= high * TWO_PWR_44_DBL;
        let mid = (magnitude / TWO_PWR_22_DBL).floor();
        let low = magnitude - mid * TWO_PWR_22_DBL;

        // -2^63 produces a high limb of 2^19, which is the bit pattern of MIN, and MIN
        // is its own negation
        let result = Self::create(low as u32, mid as u32, high as u32);
        if negative {
            result.wrapping_neg()
        } else {
            result
        }
    }

    /// Converts to the nearest float, ties to even.
    pub fn to_f64(self) -> f64 {
        let negative = self.is_negative();
        // For MIN the negation is MIN itself, whose limbs read as 2^63
        let magnitude = if negative { self.wrapping_neg() } else { self };

        let value = magnitude.low as f64
            + magnitude.mid as f64 * TWO_PWR_22_DBL
            + magnitude.high as f64 * TWO_PWR_44_DBL;

        if negative {
            -value
        } else {
            value
        }
    }

    /// Keeps the 32 least significant bits, like `as i32` does.
    pub const fn to_i32(self) -> i32 {
        (self.low | (self.mid << LIMB_BITS)) as i32
    }

    /// Converts from a native 64-bit integer, for hosts that have one.
    pub const fn from_i64(value: i64) -> Self {
        let bits = value as u64;
        Self::create(
            bits as u32,
            (bits >> LIMB_BITS) as u32,
            (bits >> LOW_MID_BITS) as u32,
        )
    }

    /// Converts to a native 64-bit integer, for hosts that have one.
    pub const fn to_i64(self) -> i64 {
        let bits = self.low as u64
            | (self.mid as u64) << LIMB_BITS
            | (self.high as u64) << LOW_MID_BITS;
        bits as i64
    }

    /// Reinterprets the limbs as an unsigned 64-bit integer, for hosts that have one.
    pub const fn to_u64(self) -> u64 {
        self.to_i64() as u64
    }

    /// Reinterprets an unsigned 64-bit integer, for hosts that have one.
    pub const fn from_u64(value: u64) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<i32> for Int64 {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<i16> for Int64 {
    fn from(value: i16) -> Self {
        Self::from_i32(value.into())
    }
}

impl From<i8> for Int64 {
    fn from(value: i8) -> Self {
        Self::from_i32(value.into())
    }
}

impl From<u32> for Int64 {
    fn from(value: u32) -> Self {
        Self::create(value, value >> LIMB_BITS, 0)
    }
}

impl From<bool> for Int64 {
    fn from(value: bool) -> Self {
        if value {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}

impl From<Int64> for f64 {
    fn from(value: Int64) -> Self {
        value.to_f64()
    }
}

impl CastFrom<i32> for Int64 {
    fn cast_from(input: i32) -> Self {
        Self::from_i32(input)
    }
}

impl CastFrom<u32> for Int64 {
    fn cast_from(input: u32) -> Self {
        Self::from(input)
    }
}

impl CastFrom<f64> for Int64 {
    fn cast_from(input: f64) -> Self {
        Self::from_f64(input)
    }
}

impl CastFrom<Int64> for i32 {
    fn cast_from(input: Int64) -> Self {
        input.to_i32()
    }
}

impl CastFrom<Int64> for u32 {
    fn cast_from(input: Int64) -> Self {
        input.to_i32() as u32
    }
}

impl CastFrom<Int64> for f64 {
    fn cast_from(input: Int64) -> Self {
        input.to_f64()
    }
}
