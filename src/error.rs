use core::{error, fmt};
use std::borrow::Cow;

/// Everything that can go wrong while building or running a check, other than
/// the property itself being false (which is a [`crate::check::CheckResult`],
/// not an error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration detected before any sampling (empty frequency
    /// table, inverted range, zero try budget, ...). Never silently corrected.
    Argument(Cow<'static, str>),
    /// A filtered generator could not produce a conforming value within its
    /// retry budget.
    Exhausted { retries: usize },
    /// An explicit generator failure (see [`crate::fail`]).
    Failure(Cow<'static, str>),
    /// The predicate panicked during evaluation. The panic message is included
    /// when the payload is a string.
    Predicate(Option<Cow<'static, str>>),
}

impl Error {
    pub(crate) fn argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Argument(message.into())
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Argument(message) | Self::Failure(message) => Some(&**message),
            Self::Predicate(message) => message.as_deref(),
            Self::Exhausted { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Argument(message) => write!(f, "invalid argument: {message}"),
            Self::Exhausted { retries } => {
                write!(f, "no conforming value generated within {retries} retries")
            }
            Self::Failure(message) => write!(f, "generator failure: {message}"),
            Self::Predicate(Some(message)) => write!(f, "predicate panicked: {message}"),
            Self::Predicate(None) => write!(f, "predicate panicked"),
        }
    }
}

impl error::Error for Error {}
