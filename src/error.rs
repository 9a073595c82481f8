// MIT/Apache2 License

use std::fmt;

/// Sum error type for polygon path operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected before any geometry was computed.
    InvalidArgument(InvalidArgument),
}

/// An argument outside of the domain an operation accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A polygon needs more than two sides.
    TooFewSides { sides: u32 },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(arg) => write!(f, "Invalid argument: {}", arg),
        }
    }
}

impl fmt::Display for InvalidArgument {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSides { sides } => {
                write!(f, "polygon must have more than 2 sides, got {}", sides)
            }
        }
    }
}

impl From<InvalidArgument> for Error {
    #[inline]
    fn from(arg: InvalidArgument) -> Self {
        Self::InvalidArgument(arg)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
