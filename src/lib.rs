#![forbid(unsafe_code)]

pub mod arbitrary;
pub mod check;
pub mod choose;
pub mod constant;
pub mod error;
pub mod fail;
pub mod filter;
pub mod flatten;
pub mod frequency;
pub mod generate;
pub mod map;
pub mod prelude;
pub mod random;
pub mod sample;
pub mod utility;

pub use crate::{
    arbitrary::Arbitrary,
    check::{CheckResult, Condition, Property},
    error::Error,
    generate::Generate,
    random::Random,
    sample::Sample,
};

use crate::{
    arbitrary::Function,
    choose::{Choose, Uniform},
    constant::Constant,
    fail::Fail,
    frequency::Frequency,
};
use std::borrow::Cow;

/// A generator that always returns `value`, ignoring randomness.
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant(value)
}

/// A uniform generator over the inclusive range `[low, high]`. An inverted
/// range is an invalid argument, never silently swapped.
pub fn choose<T: Uniform>(low: T, high: T) -> Result<Choose<T>, Error> {
    Choose::new(low, high)
}

/// A generator that picks one of the weighted alternatives with probability
/// proportional to its weight, then delegates to it.
pub fn frequency<G: Generate>(
    choices: impl IntoIterator<Item = (u32, G)>,
) -> Result<Frequency<G>, Error> {
    Frequency::new(choices.into_iter().collect())
}

/// A generator that always fails with `message`.
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}

/// An [`Arbitrary`] built from a `size -> generator` function.
pub fn sized<G: Generate, F: Fn(usize) -> G>(arbitrary: F) -> Function<F> {
    Function(arbitrary)
}
