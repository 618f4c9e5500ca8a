//! The [`Int64`] type and its limb layout.
//!
//! Operations are split by family, the same way the limb algorithms are:
//!
//! - `conversion`: native integers and floats to and from limbs
//! - `bitwise` / `shift`: limb-wise boolean operations and cross-limb shifts
//! - `add` / `sub` / `neg` / `comparison`: carry and borrow propagation
//! - `mul`: 13-bit chunked schoolbook multiplication
//! - `div_mod` / `approx_div_mod`: truncating division
//! - `decimal`: base 10 formatting and parsing

mod add;
mod approx_div_mod;
mod bitwise;
mod comparison;
mod conversion;
mod decimal;
mod div_mod;
mod mul;
mod neg;
mod shift;
mod sub;


use serde::{Deserialize, Serialize};

use crate::error::LimbOutOfRangeError;

/// Number of bits in the `low` and `mid` limbs.
pub const LIMB_BITS: u32 = 22;
/// Number of bits in the `high` limb.
pub const HIGH_LIMB_BITS: u32 = 20;
/// Bit position of the `high` limb, that is, number of bits in `low` and `mid` together.
pub const LOW_MID_BITS: u32 = 2 * LIMB_BITS;

pub(crate) const MASK: u32 = (1 << LIMB_BITS) - 1;
pub(crate) const MASK_HIGH: u32 = (1 << HIGH_LIMB_BITS) - 1;
/// Position of the sign bit inside the `high` limb.
pub(crate) const SIGN_BIT: u32 = HIGH_LIMB_BITS - 1;
pub(crate) const SIGN_BIT_VALUE: u32 = 1 << SIGN_BIT;

const _: () = assert!(2 * LIMB_BITS + HIGH_LIMB_BITS == 64);

/// A 64-bit two's complement signed integer stored in three limbs.
///
/// The limbs always satisfy `low < 2^22`, `mid < 2^22` and `high < 2^20`, and
/// `high‖mid‖low` is the bit pattern of the value. The sign of the value is
/// the most significant bit of `high`.
///
/// All the operations are pure: they take their operands by value and return a
/// new [`Int64`], overflow wraps around like it does for native integers.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Int64Limbs", into = "Int64Limbs")]
pub struct Int64 {
    low: u32,
    mid: u32,
    high: u32,
}

/// Serialized form of an [`Int64`].
#[derive(Copy, Clone, Serialize, Deserialize)]
struct Int64Limbs {
    low: u32,
    mid: u32,
    high: u32,
}

impl From<Int64> for Int64Limbs {
    fn from(value: Int64) -> Self {
        Self {
            low: value.low,
            mid: value.mid,
            high: value.high,
        }
    }
}

impl TryFrom<Int64Limbs> for Int64 {
    type Error = LimbOutOfRangeError;

    fn try_from(limbs: Int64Limbs) -> Result<Self, Self::Error> {
        Self::from_limbs(limbs.low, limbs.mid, limbs.high)
    }
}

impl Int64 {
    pub const BITS: u32 = 64;
    pub const ZERO: Self = Self::create(0, 0, 0);
    pub const ONE: Self = Self::create(1, 0, 0);
    pub const TWO: Self = Self::create(2, 0, 0);
    pub const NEG_ONE: Self = Self::create(MASK, MASK, MASK_HIGH);
    /// `-2^63`, the only value that is its own negation (besides zero).
    pub const MIN: Self = Self::create(0, 0, SIGN_BIT_VALUE);
    /// `2^63 - 1`
    pub const MAX: Self = Self::create(MASK, MASK, MASK_HIGH >> 1);

    /// Builds a value from limbs, discarding the bits that do not fit.
    #[inline]
    pub(crate) const fn create(low: u32, mid: u32, high: u32) -> Self {
        Self {
            low: low & MASK,
            mid: mid & MASK,
            high: high & MASK_HIGH,
        }
    }

    /// Builds a value from its three limbs.
    ///
    /// # Errors
    ///
    /// Returns an error if `low` or `mid` do not fit in 22 bits, or if `high` does not fit in
    /// 20 bits.
    ///
    /// ```
    /// use long_emul::Int64;
    ///
    /// let value = Int64::from_limbs(0, 0, 1 << 19).unwrap();
    /// assert_eq!(value, Int64::MIN);
    /// assert!(Int64::from_limbs(0, 0, 1 << 20).is_err());
    /// ```
    pub fn from_limbs(low: u32, mid: u32, high: u32) -> Result<Self, LimbOutOfRangeError> {
        let check = |limb: &'static str, value: u32, bits: u32| {
            if value >> bits == 0 {
                Ok(())
            } else {
                Err(LimbOutOfRangeError { limb, value, bits })
            }
        };
        check("low", low, LIMB_BITS)?;
        check("mid", mid, LIMB_BITS)?;
        check("high", high, HIGH_LIMB_BITS)?;
        Ok(Self { low, mid, high })
    }

    /// Bits `[0, 22)` of the value.
    #[inline]
    pub const fn low(self) -> u32 {
        self.low
    }

    /// Bits `[22, 44)` of the value.
    #[inline]
    pub const fn mid(self) -> u32 {
        self.mid
    }

    /// Bits `[44, 64)` of the value.
    #[inline]
    pub const fn high(self) -> u32 {
        self.high
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.low | self.mid | self.high) == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        (self.high & SIGN_BIT_VALUE) != 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    #[inline]
    pub(crate) const fn is_min_value(self) -> bool {
        self.high == SIGN_BIT_VALUE && self.mid == 0 && self.low == 0
    }

    /// Returns `-1`, `0` or `1` depending on the sign of the value.
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Absolute value, [`Int64::MIN`] is returned unchanged as it has no positive counterpart.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Number of leading zeros of the 64-bit pattern.
    pub const fn leading_zeros(self) -> u32 {
        // The limbs are stored in u32, so the unused upper bits are
        // subtracted from what the native leading_zeros reports
        if self.high != 0 {
            self.high.leading_zeros() - (u32::BITS - HIGH_LIMB_BITS)
        } else if self.mid != 0 {
            HIGH_LIMB_BITS + self.mid.leading_zeros() - (u32::BITS - LIMB_BITS)
        } else if self.low != 0 {
            HIGH_LIMB_BITS + LIMB_BITS + self.low.leading_zeros() - (u32::BITS - LIMB_BITS)
        } else {
            Self::BITS
        }
    }

    /// Number of trailing zeros of the 64-bit pattern.
    pub const fn trailing_zeros(self) -> u32 {
        if self.low != 0 {
            self.low.trailing_zeros()
        } else if self.mid != 0 {
            LIMB_BITS + self.mid.trailing_zeros()
        } else if self.high != 0 {
            LOW_MID_BITS + self.high.trailing_zeros()
        } else {
            Self::BITS
        }
    }

    pub const fn count_ones(self) -> u32 {
        self.low.count_ones() + self.mid.count_ones() + self.high.count_ones()
    }

    /// Returns `Some(n)` if the 64-bit pattern has exactly one bit set, at position `n`.
    ///
    /// Note that this looks at the bit pattern, so [`Int64::MIN`] is `Some(63)`.
    pub const fn power_of_two_exponent(self) -> Option<u32> {
        if self.count_ones() == 1 {
            Some(self.trailing_zeros())
        } else {
            None
        }
    }

    /// Whether the 64-bit pattern, read as unsigned, is a power of two.
    pub const fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    /// Returns the value with bit `bit` set, `bit` must be in `[0, 64)`.
    #[inline]
    pub(crate) const fn with_bit_set(self, bit: u32) -> Self {
        if bit >= LOW_MID_BITS {
            Self {
                high: self.high | (1 << (bit - LOW_MID_BITS)),
                ..self
            }
        } else if bit >= LIMB_BITS {
            Self {
                mid: self.mid | (1 << (bit - LIMB_BITS)),
                ..self
            }
        } else {
            Self {
                low: self.low | (1 << bit),
                ..self
            }
        }
    }

    /// Keeps only the `bits` least significant bits, `bits` must be in `[0, 64)`.
    pub(crate) const fn mask_right(self, bits: u32) -> Self {
        if bits < LIMB_BITS {
            Self::create(self.low & ((1 << bits) - 1), 0, 0)
        } else if bits < LOW_MID_BITS {
            Self::create(self.low, self.mid & ((1 << (bits - LIMB_BITS)) - 1), 0)
        } else {
            Self::create(
                self.low,
                self.mid,
                self.high & ((1 << (bits - LOW_MID_BITS)) - 1),
            )
        }
    }

    /// Returns a bit representation of the value, where blocks of length `block_length` are
    /// separated by whitespaces to increase the readability.
    pub fn to_bits_string(&self, block_length: usize) -> String {
        let mut strn = format!("{self:064b}");
        if block_length > 0 {
            for i in (1..(Self::BITS as usize).div_ceil(block_length)).rev() {
                strn.insert(i * block_length, ' ');
            }
        }
        strn
    }
}

impl std::fmt::Debug for Int64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Int64")
            .field("value", &format_args!("{self}"))
            .field("high", &format_args!("{:#07x}", self.high))
            .field("mid", &format_args!("{:#08x}", self.mid))
            .field("low", &format_args!("{:#08x}", self.low))
            .finish()
    }
}

macro_rules! impl_radix_fmt {
    ($($Trait: ident => $digit_bits: literal, $digits: literal),* $(,)?) => {
        $(
            impl std::fmt::$Trait for Int64 {
                /// Formats the unsigned 64-bit pattern, like the native integers do.
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    const DIGITS: &[u8] = $digits;
                    let mask = Int64::from_i32((1 << $digit_bits) - 1);

                    let mut buf = [0u8; 64];
                    let mut pos = buf.len();
                    let mut x = *self;
                    loop {
                        pos -= 1;
                        buf[pos] = DIGITS[(x & mask).to_i32() as usize];
                        x = x.unsigned_shr($digit_bits);
                        if x.is_zero() {
                            break;
                        }
                    }
                    // Only ascii digits were written
                    let digits = std::str::from_utf8(&buf[pos..]).map_err(|_| std::fmt::Error)?;
                    let prefix = match $digit_bits {
                        1 => "0b",
                        _ => "0x",
                    };
                    f.pad_integral(true, prefix, digits)
                }
            }
        )*
    };
}

impl_radix_fmt!(
    LowerHex => 4, b"0123456789abcdef",
    UpperHex => 4, b"0123456789ABCDEF",
    Binary => 1, b"01",
);

#[cfg(test)]
impl rand::distributions::Distribution<Int64> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Int64 {
        Int64::create(rng.gen(), rng.gen(), rng.gen())
    }
}
