use crate::{
    arbitrary::Arbitrary,
    error::Error,
    generate::{Generate, State},
    random::{self, Random},
};
use core::{any::Any, fmt, panic::AssertUnwindSafe};
use std::{borrow::Cow, panic::catch_unwind};

/// Default minimum number of genuine successes required to satisfy a check.
pub const SUCCESSES: usize = 100;
/// Default maximum discard ratio: the try bound is `successes * discards`.
pub const DISCARDS: usize = 10;

/// A named, not yet quantified property.
#[derive(Clone, Debug)]
pub struct Property {
    name: Cow<'static, str>,
}

/// A property with its arbitraries bound but no predicate attached yet.
/// `arbitrary` is typically a tuple of arbitraries; the tuple impls make the
/// arity a structural concern rather than a behavioral one.
#[derive(Clone, Debug)]
pub struct ForAll<A> {
    name: Cow<'static, str>,
    arbitrary: A,
}

/// A fully bound, checkable property. Immutable: `implies` returns a new
/// proposition rather than mutating in place.
pub struct Proposition<A, P> {
    name: Cow<'static, str>,
    arbitrary: A,
    predicate: P,
}

/// Verdict of one predicate evaluation. A false precondition discards the
/// sample instead of counting it for or against the property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    pub precondition: bool,
    pub holds: bool,
}

/// Holds a bound proposition and the configuration of its check loop.
pub struct Checker<A, P> {
    proposition: Proposition<A, P>,
    /// Source of randomness; supply one with a fixed seed for reproduction.
    pub random: Random,
    /// Minimum number of genuine successes. Defaults to [`SUCCESSES`].
    pub successes: usize,
    /// Maximum discard ratio. Defaults to [`DISCARDS`].
    pub discards: usize,
}

/// Terminal outcome of a check. Constructed only by the check loop; the
/// variant structure guarantees that a falsification always carries its
/// counterexample and an erroneous check always carries its cause.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckResult<T> {
    Satisfied {
        name: Cow<'static, str>,
        /// Number of successful predicate evaluations.
        count: usize,
        /// True iff every considered sample was discarded by a precondition,
        /// making satisfaction vacuous.
        exhausted: bool,
    },
    Falsified {
        name: Cow<'static, str>,
        count: usize,
        /// The exact generated arguments that falsified the predicate.
        sample: T,
    },
    Erroneous {
        name: Cow<'static, str>,
        count: usize,
        error: Error,
        /// The offending sample, absent when generation itself failed.
        sample: Option<T>,
    },
}

impl Condition {
    /// "Ex falso quodlibet": the precondition failed, so the sample proves
    /// nothing either way.
    pub const VACUOUS: Self = Self {
        precondition: false,
        holds: true,
    };

    pub const fn test(holds: bool) -> Self {
        Self {
            precondition: true,
            holds,
        }
    }
}

impl Property {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Binds the arbitraries this property quantifies over.
    pub fn for_all<A: Arbitrary>(self, arbitrary: A) -> ForAll<A> {
        ForAll {
            name: self.name,
            arbitrary,
        }
    }
}

impl<A: Arbitrary> ForAll<A> {
    /// Attaches the predicate, producing a checkable proposition.
    pub fn such_that<F: Fn(&A::Item) -> bool>(
        self,
        predicate: F,
    ) -> Proposition<A, impl Fn(&A::Item) -> Condition> {
        Proposition {
            name: self.name,
            arbitrary: self.arbitrary,
            predicate: move |item: &A::Item| Condition::test(predicate(item)),
        }
    }
}

impl<A: Arbitrary, P: Fn(&A::Item) -> Condition> Proposition<A, P> {
    /// Turns the current predicate into a precondition of `postcondition`:
    /// samples it rejects are discarded as vacuous rather than counted.
    pub fn implies<F: Fn(&A::Item) -> bool>(
        self,
        postcondition: F,
    ) -> Proposition<A, impl Fn(&A::Item) -> Condition> {
        let precondition = self.predicate;
        Proposition {
            name: self.name,
            arbitrary: self.arbitrary,
            predicate: move |item: &A::Item| {
                let condition = precondition(item);
                if condition.precondition && condition.holds {
                    Condition::test(postcondition(item))
                } else {
                    Condition::VACUOUS
                }
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checker(self) -> Checker<A, P> {
        Checker {
            proposition: self,
            random: Random::with_seed(random::seed()),
            successes: SUCCESSES,
            discards: DISCARDS,
        }
    }

    /// Checks with the default configuration, after applying the
    /// [`environment`] overrides.
    pub fn check(self) -> Result<CheckResult<A::Item>, Error> {
        let mut checker = self.checker();
        environment::update(&mut checker);
        checker.check()
    }
}

impl<A: Arbitrary, P: Fn(&A::Item) -> Condition> Checker<A, P> {
    /// Runs the check loop to completion.
    ///
    /// Configuration errors surface as `Err` before any value is generated.
    /// Generation and predicate faults never escape: they terminate the loop
    /// as [`CheckResult::Erroneous`].
    pub fn check(self) -> Result<CheckResult<A::Item>, Error> {
        let Self {
            proposition,
            random,
            successes,
            discards,
        } = self;
        if successes == 0 {
            return Err(Error::argument("at least one success must be required"));
        }
        if discards == 0 {
            return Err(Error::argument("the discard ratio must be positive"));
        }
        let tries = successes
            .checked_mul(discards)
            .ok_or_else(|| Error::argument("the try bound overflows"))?;

        let name = proposition.name;
        let mut success = 0;
        let mut state = State::new(0, random);
        for index in 0..tries {
            if success >= successes {
                break;
            }
            state.resize(index);
            let item = match proposition.arbitrary.arbitrary(index).generate(&mut state) {
                Ok(item) => item,
                Err(error) => {
                    return Ok(CheckResult::Erroneous {
                        name,
                        count: success,
                        error,
                        sample: None,
                    })
                }
            };
            match evaluate(&proposition.predicate, &item) {
                Err(error) => {
                    return Ok(CheckResult::Erroneous {
                        name,
                        count: success,
                        error,
                        sample: Some(item),
                    })
                }
                Ok(Condition {
                    precondition: false, ..
                }) => continue,
                Ok(Condition { holds: true, .. }) => success += 1,
                Ok(_) => {
                    return Ok(CheckResult::Falsified {
                        name,
                        count: success,
                        sample: item,
                    })
                }
            }
        }
        // Reaching the try bound with zero genuine successes means every
        // sample was discarded: vacuously satisfied, flagged exhausted.
        Ok(CheckResult::Satisfied {
            name,
            count: success,
            exhausted: success == 0,
        })
    }
}

impl<T> CheckResult<T> {
    pub fn name(&self) -> &str {
        match self {
            Self::Satisfied { name, .. }
            | Self::Falsified { name, .. }
            | Self::Erroneous { name, .. } => name,
        }
    }

    /// Number of successful predicate evaluations before termination.
    pub fn count(&self) -> usize {
        match self {
            Self::Satisfied { count, .. }
            | Self::Falsified { count, .. }
            | Self::Erroneous { count, .. } => *count,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Satisfied { exhausted: true, .. })
    }

    pub fn is_falsified(&self) -> bool {
        matches!(self, Self::Falsified { .. })
    }

    pub fn is_erroneous(&self) -> bool {
        matches!(self, Self::Erroneous { .. })
    }

    pub fn sample(&self) -> Option<&T> {
        match self {
            Self::Satisfied { .. } => None,
            Self::Falsified { sample, .. } => Some(sample),
            Self::Erroneous { sample, .. } => sample.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Erroneous { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for CheckResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Satisfied {
                name,
                count,
                exhausted,
            } => write!(
                f,
                "Satisfied(name = {name}, count = {count}, exhausted = {exhausted})"
            ),
            Self::Falsified {
                name,
                count,
                sample,
            } => write!(
                f,
                "Falsified(name = {name}, count = {count}, sample = {sample:?})"
            ),
            Self::Erroneous {
                name,
                count,
                error,
                sample,
            } => write!(
                f,
                "Erroneous(name = {name}, count = {count}, error = {error}, sample = {sample:?})"
            ),
        }
    }
}

fn evaluate<T, P: Fn(&T) -> Condition>(predicate: &P, item: &T) -> Result<Condition, Error> {
    match catch_unwind(AssertUnwindSafe(|| predicate(item))) {
        Ok(condition) => Ok(condition),
        Err(payload) => Err(Error::Predicate(message(payload))),
    }
}

fn message(payload: Box<dyn Any + Send>) -> Option<Cow<'static, str>> {
    let payload = match payload.downcast::<&'static str>() {
        Ok(message) => return Some(Cow::Borrowed(*message)),
        Err(payload) => payload,
    };
    match payload.downcast::<String>() {
        Ok(message) => Some(Cow::Owned(*message)),
        Err(_) => None,
    }
}

pub mod environment {
    use super::Checker;
    use std::{env, str::FromStr};

    pub fn seed() -> Option<u64> {
        parse("PROVISO_SEED")
    }

    pub fn successes() -> Option<usize> {
        parse("PROVISO_SUCCESSES")
    }

    pub fn discards() -> Option<usize> {
        parse("PROVISO_DISCARDS")
    }

    pub fn update<A, P>(checker: &mut Checker<A, P>) {
        if let Some(value) = seed() {
            checker.random = crate::random::Random::with_seed(value);
        }
        if let Some(value) = successes() {
            checker.successes = value;
        }
        if let Some(value) = discards() {
            checker.discards = value;
        }
    }

    fn parse<T: FromStr>(key: &str) -> Option<T> {
        match env::var(key) {
            Ok(value) => value.parse().ok(),
            Err(_) => None,
        }
    }
}
