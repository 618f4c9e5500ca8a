//! Software emulation of 64-bit two's complement signed integers.
//!
//! This crate is meant for targets where the only numeric primitives are
//! double precision floats and narrow (32-bit) integers. An [`Int64`] is stored as
//! three unsigned limbs:
//!
//! ```text
//!  63        44 43        22 21         0
//! +------------+------------+------------+
//! |  high (20) |  mid (22)  |  low (22)  |
//! +------------+------------+------------+
//! ```
//!
//! Every intermediate value computed by the operations of this crate fits in a
//! 32-bit integer, and results have exactly the semantics of a machine `i64`:
//! wrapping overflow, two's complement negation, arithmetic and logical right
//! shifts, and division that truncates toward zero.
//!
//! ```
//! use long_emul::Int64;
//!
//! let a = Int64::from_i32(1_000_000_000);
//! let b = a * a;
//! assert_eq!(b.to_decimal_string(), "1000000000000000000");
//!
//! let (q, r) = Int64::MIN.div_rem(Int64::NEG_ONE).unwrap();
//! assert_eq!(q, Int64::MIN);
//! assert_eq!(r, Int64::ZERO);
//! ```

pub mod error;
pub mod int64;
pub mod numeric;

pub use error::{DivideByZeroError, Error, LimbOutOfRangeError, ParseErrorKind, ParseInt64Error};
pub use int64::Int64;
pub use numeric::{CastFrom, CastInto};
