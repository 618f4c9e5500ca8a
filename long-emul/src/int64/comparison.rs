use std::cmp::Ordering;

use super::Int64;

impl Int64 {
    /// Signed comparison.
    ///
    /// Once the signs are known to be equal, comparing the limbs as unsigned
    /// from the most significant one gives the order for both signs.
    pub const fn compare(self, rhs: Self) -> Ordering {
        if self.low == rhs.low && self.mid == rhs.mid && self.high == rhs.high {
            return Ordering::Equal;
        }

        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let (lhs_limb, rhs_limb) = if self.high != rhs.high {
            (self.high, rhs.high)
        } else if self.mid != rhs.mid {
            (self.mid, rhs.mid)
        } else {
            (self.low, rhs.low)
        };

        if lhs_limb < rhs_limb {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Ord for Int64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for Int64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_compare_signs_and_limbs() {
        let ordered = [
            Int64::MIN,
            Int64::MIN + Int64::ONE,
            Int64::from_i64(-(1 << 44)),
            Int64::from_i64(-(1 << 22)),
            Int64::NEG_ONE,
            Int64::ZERO,
            Int64::ONE,
            Int64::from_i64(1 << 22),
            Int64::from_i64((1 << 44) - 1),
            Int64::from_i64(1 << 44),
            Int64::MAX,
        ];
        for (i, lhs) in ordered.iter().enumerate() {
            for (j, rhs) in ordered.iter().enumerate() {
                assert_eq!(lhs.compare(*rhs), i.cmp(&j), "lhs: {lhs:?} rhs: {rhs:?}");
            }
        }
    }

    #[test]
    fn test_comparison_operators() {
        let small = Int64::from_i32(10);
        let large = Int64::from_halves(1, 0);
        assert!(small < large);
        assert!(large > small);
        assert!(small <= small);
        assert!(Int64::NEG_ONE < Int64::ZERO);
        assert_eq!(Int64::MAX.max(Int64::MIN), Int64::MAX);
        assert_eq!(Int64::MAX.min(Int64::MIN), Int64::MIN);
    }

    #[test]
    fn test_compare_matches_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let a = rng.gen::<i64>();
            // Shared high bits so that the lower limbs decide often enough
            let b = if rng.gen() { a ^ rng.gen_range(0..1 << 44) } else { rng.gen() };
            assert_eq!(Int64::from_i64(a).cmp(&Int64::from_i64(b)), a.cmp(&b));
        }
    }

    #[test]
    fn test_sort() {
        let mut rng = rand::thread_rng();
        let mut native = (0..256).map(|_| rng.gen::<i64>()).collect::<Vec<_>>();
        let mut emulated = native.iter().copied().map(Int64::from_i64).collect::<Vec<_>>();
        native.sort_unstable();
        emulated.sort_unstable();
        assert_eq!(emulated.into_iter().map(Int64::to_i64).collect::<Vec<_>>(), native);
    }
}
