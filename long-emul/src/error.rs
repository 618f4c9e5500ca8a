use std::fmt::{Display, Formatter};

/// Error returned when dividing by zero
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DivideByZeroError;

impl Display for DivideByZeroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt to divide by zero")
    }
}

impl std::error::Error for DivideByZeroError {}

/// Error returned when a limb given to [`crate::Int64::from_limbs`]
/// does not fit in its bit width.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LimbOutOfRangeError {
    pub limb: &'static str,
    pub value: u32,
    pub bits: u32,
}

impl Display for LimbOutOfRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} limb value {:#x} does not fit in {} bits",
            self.limb, self.value, self.bits
        )
    }
}

impl std::error::Error for LimbOutOfRangeError {}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The input was empty, or only contained a sign
    Empty,
    /// The input contained a character that is not an ascii digit
    InvalidDigit,
    /// The value is greater than [`crate::Int64::MAX`]
    PosOverflow,
    /// The value is smaller than [`crate::Int64::MIN`]
    NegOverflow,
}

/// Error returned when parsing a decimal string into an [`crate::Int64`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseInt64Error {
    pub(crate) kind: ParseErrorKind,
}

impl ParseInt64Error {
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl Display for ParseInt64Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            ParseErrorKind::InvalidDigit => write!(f, "invalid digit found in string"),
            ParseErrorKind::PosOverflow => write!(f, "number too large to fit in a 64-bit integer"),
            ParseErrorKind::NegOverflow => write!(f, "number too small to fit in a 64-bit integer"),
        }
    }
}

impl std::error::Error for ParseInt64Error {}

#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DivideByZero,
    LimbOutOfRange(LimbOutOfRangeError),
    Parse(ParseInt64Error),
}

impl From<DivideByZeroError> for Error {
    fn from(_: DivideByZeroError) -> Self {
        Self::DivideByZero
    }
}

impl From<LimbOutOfRangeError> for Error {
    fn from(value: LimbOutOfRangeError) -> Self {
        Self::LimbOutOfRange(value)
    }
}

impl From<ParseInt64Error> for Error {
    fn from(value: ParseInt64Error) -> Self {
        Self::Parse(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DivideByZero => {
                write!(f, "{DivideByZeroError}")
            }
            Error::LimbOutOfRange(err) => {
                write!(f, "{err}")
            }
            Error::Parse(err) => {
                write!(f, "{err}")
            }
        }
    }
}

impl std::error::Error for Error {}
