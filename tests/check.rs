pub mod common;
use common::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn true_predicate_is_satisfied_without_exhaustion() -> Result {
    let result = Property::new("tautology")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|_| true)
        .check()?;
    assert!(result.is_satisfied());
    assert!(!result.is_exhausted());
    assert!(result.count() > 0);
    Ok(())
}

#[test]
fn false_predicate_is_falsified_with_a_sample_in_range() -> Result {
    let result = Property::new("contradiction")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|_| false)
        .check()?;
    assert!(result.is_falsified());
    assert_eq!(result.count(), 0);
    let sample = *result.sample().unwrap();
    assert!((-5..=5).contains(&sample));
    Ok(())
}

#[test]
fn panicking_predicate_is_erroneous_with_its_message() -> Result {
    silent();
    let result = Property::new("panics")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|_| panic!("woops"))
        .check()?;
    assert!(result.is_erroneous());
    assert_eq!(result.error(), Some(&Error::Predicate(Some("woops".into()))));
    assert!(result.sample().is_some());
    Ok(())
}

#[test]
fn generator_failure_is_erroneous_before_the_predicate_runs() {
    let result = Property::new("failing generator")
        .for_all(fail("boom").arbitrary())
        .such_that(|_: &i32| true)
        .check()
        .unwrap();
    assert!(result.is_erroneous());
    assert_eq!(result.error(), Some(&Error::Failure("boom".into())));
    assert_eq!(result.sample(), None);
    assert_eq!(result.count(), 0);
}

#[test]
fn false_precondition_is_vacuously_satisfied_and_exhausted() -> Result {
    let result = Property::new("vacuous")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|_| false)
        .implies(|_| true)
        .check()?;
    assert!(result.is_satisfied());
    assert!(result.is_exhausted());
    assert_eq!(result.count(), 0);
    Ok(())
}

#[test]
fn true_precondition_checks_the_postcondition() -> Result {
    let result = Property::new("implication holds")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|_| true)
        .implies(|&x| x >= -5)
        .check()?;
    assert!(result.is_satisfied());
    assert!(!result.is_exhausted());
    Ok(())
}

#[test]
fn failing_postcondition_under_a_true_precondition_is_falsified() -> Result {
    let result = Property::new("implication fails")
        .for_all(choose(0i32, 10)?.arbitrary())
        .such_that(|&x| x >= 3)
        .implies(|&x| x < 3)
        .check()?;
    assert!(result.is_falsified());
    assert!(*result.sample().unwrap() >= 3);
    Ok(())
}

#[test]
fn discards_mixed_with_successes_are_not_exhausted() -> Result {
    let result = Property::new("mixed discards")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|&x| x >= 0)
        .implies(|&x| x + 1 > 0)
        .check()?;
    assert!(result.is_satisfied());
    assert!(!result.is_exhausted());
    Ok(())
}

#[test]
fn chained_implications_keep_discarding_vacuous_samples() -> Result {
    let result = Property::new("chained")
        .for_all(choose(-5i32, 5)?.arbitrary())
        .such_that(|&x| x >= 0)
        .implies(|&x| x <= 5)
        .implies(|&x| x * x <= 25)
        .check()?;
    assert!(result.is_satisfied());
    assert!(!result.is_exhausted());
    Ok(())
}

#[test]
fn size_grows_with_the_try_number() {
    let result = Property::new("sizes")
        .for_all(sized(|size| constant(size)))
        .such_that(|&size| size < 5)
        .check()
        .unwrap();
    assert_eq!(
        result,
        CheckResult::Falsified {
            name: "sizes".into(),
            count: 5,
            sample: 5,
        }
    );
}

#[test]
fn zero_successes_is_an_invalid_argument_before_any_generation() {
    static DRAWS: AtomicUsize = AtomicUsize::new(0);
    let observed = constant(0i32).map(|value| {
        DRAWS.fetch_add(1, Ordering::Relaxed);
        value
    });
    let mut checker = Property::new("no successes")
        .for_all(observed.arbitrary())
        .such_that(|_| true)
        .checker();
    checker.successes = 0;
    let error = checker.check().unwrap_err();
    assert!(matches!(error, Error::Argument(_)));
    assert_eq!(DRAWS.load(Ordering::Relaxed), 0);
}

#[test]
fn zero_discard_ratio_is_an_invalid_argument_before_any_generation() {
    static DRAWS: AtomicUsize = AtomicUsize::new(0);
    let observed = constant(0i32).map(|value| {
        DRAWS.fetch_add(1, Ordering::Relaxed);
        value
    });
    let mut checker = Property::new("no discards")
        .for_all(observed.arbitrary())
        .such_that(|_| true)
        .checker();
    checker.discards = 0;
    let error = checker.check().unwrap_err();
    assert!(matches!(error, Error::Argument(_)));
    assert_eq!(DRAWS.load(Ordering::Relaxed), 0);
}

#[test]
fn overflowing_try_bound_is_an_invalid_argument() -> Result {
    let mut checker = Property::new("overflow")
        .for_all(choose(0u8, 1)?.arbitrary())
        .such_that(|_| true)
        .checker();
    checker.successes = usize::MAX;
    checker.discards = 2;
    assert!(matches!(checker.check(), Err(Error::Argument(_))));
    Ok(())
}

#[test]
fn checker_honors_its_configured_success_count() -> Result {
    let mut checker = Property::new("configured")
        .for_all(choose(0i32, 1)?.arbitrary())
        .such_that(|_| true)
        .checker();
    checker.successes = 17;
    let result = checker.check()?;
    assert_eq!(result.count(), 17);
    assert!(result.is_satisfied());
    Ok(())
}

#[test]
fn fixed_seed_checks_are_identical() -> Result {
    fn run(seed: u64) -> std::result::Result<CheckResult<(i64, i64)>, Error> {
        let mut checker = Property::new("deterministic")
            .for_all((
                choose(-100i64, 100)?.arbitrary(),
                choose(-100i64, 100)?.arbitrary(),
            ))
            .such_that(|&(a, b)| a + b < 150)
            .checker();
        checker.random = Random::with_seed(seed);
        checker.check()
    }
    assert_eq!(run(SEED)?, run(SEED)?);
    Ok(())
}

#[test]
fn ternary_properties_bind_and_check() -> Result {
    let result = Property::new("ternary")
        .for_all((
            choose(0i32, 10)?.arbitrary(),
            choose(0i32, 10)?.arbitrary(),
            choose(0i32, 10)?.arbitrary(),
        ))
        .such_that(|&(a, b, c)| a + b + c <= 30)
        .check()?;
    assert!(result.is_satisfied());
    Ok(())
}

#[test]
fn high_arity_properties_bind_and_check() -> Result {
    let result = Property::new("octonary")
        .for_all((
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
            choose(0u8, 1)?.arbitrary(),
        ))
        .such_that(|&(a, b, c, d, e, f, g, h)| {
            usize::from(a) + usize::from(b) + usize::from(c) + usize::from(d)
                + usize::from(e) + usize::from(f) + usize::from(g) + usize::from(h)
                <= 8
        })
        .check()?;
    assert!(result.is_satisfied());
    Ok(())
}

#[test]
fn filter_exhaustion_is_an_erroneous_check() -> Result {
    let result = Property::new("starved")
        .for_all(choose(0i32, 10)?.filter(Some(16), |_| false).arbitrary())
        .such_that(|_| true)
        .check()?;
    assert!(result.is_erroneous());
    assert_eq!(result.error(), Some(&Error::Exhausted { retries: 16 }));
    Ok(())
}

#[test]
fn check_results_render_a_one_line_verdict() {
    let result: CheckResult<i32> = CheckResult::Satisfied {
        name: "display".into(),
        count: 3,
        exhausted: false,
    };
    assert_eq!(
        result.to_string(),
        "Satisfied(name = display, count = 3, exhausted = false)"
    );
}
