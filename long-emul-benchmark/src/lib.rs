//! Inputs shared by the long-emul benchmarks.

use long_emul::Int64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed of the operand generators, so that every run measures the same inputs.
pub const BENCH_SEED: u64 = 0x6c6f_6e67;

/// Number of operands processed by one benchmark iteration.
pub const BATCH_SIZE: usize = 1024;

/// Magnitude of the generated operands, in bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OperandWidth {
    /// Fits in the low limb
    Narrow,
    /// Fits in the low and mid limbs
    Medium,
    /// Any 64-bit pattern
    Full,
}

impl OperandWidth {
    pub const ALL: [Self; 3] = [Self::Narrow, Self::Medium, Self::Full];

    pub fn bits(self) -> u32 {
        match self {
            Self::Narrow => 21,
            Self::Medium => 43,
            Self::Full => 64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Full => "full",
        }
    }

    /// A random signed value whose magnitude fits in [`Self::bits`] bits.
    pub fn sample<R: Rng>(self, rng: &mut R) -> Int64 {
        let value = rng.gen::<i64>() >> (i64::BITS - self.bits());
        Int64::from_i64(value)
    }
}

/// `BATCH_SIZE` pairs of operands, the second one is never zero.
pub fn operand_pairs(lhs: OperandWidth, rhs: OperandWidth) -> Vec<(Int64, Int64)> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    (0..BATCH_SIZE)
        .map(|_| {
            let a = lhs.sample(&mut rng);
            let mut b = rhs.sample(&mut rng);
            while b.is_zero() {
                b = rhs.sample(&mut rng);
            }
            (a, b)
        })
        .collect()
}

/// Decimal representations of `BATCH_SIZE` values of the given width.
pub fn decimal_strings(width: OperandWidth) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    (0..BATCH_SIZE)
        .map(|_| width.sample(&mut rng).to_decimal_string())
        .collect()
}
