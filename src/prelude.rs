pub use crate::{
    arbitrary::{Arbitrary, Lift},
    check::{CheckResult, Checker, Condition, ForAll, Property, Proposition},
    choose, constant,
    error::Error,
    fail, frequency, sized,
    generate::{Generate, State},
    random::Random,
    sample::Sample,
};
