pub mod common;
use common::*;
use proviso::{constant::Constant, fail::Fail};

#[test]
fn choose_stays_within_bounds() -> Result {
    for result in choose(-5i32, 5)?.samples(1000) {
        assert!((-5..=5).contains(&result?));
    }
    Ok(())
}

#[test]
fn degenerate_range_always_returns_its_bound() -> Result {
    for result in choose(7u8, 7)?.samples(100) {
        assert_eq!(result?, 7);
    }
    Ok(())
}

#[test]
fn choose_covers_char_ranges() -> Result {
    for result in choose('a', 'z')?.samples(300) {
        assert!(result?.is_ascii_lowercase());
    }
    Ok(())
}

#[test]
fn inverted_range_is_an_invalid_argument() {
    assert!(matches!(choose(5i32, -5), Err(Error::Argument(_))));
}

#[test]
fn frequency_approximates_its_weight_ratio() -> Result {
    let generator = frequency([(1, constant('x')), (4, constant('y'))])?;
    let total = 10_000;
    let low = generator
        .samples(total)
        .filter(|result| matches!(result, Ok('x')))
        .count();
    let ratio = low as f64 / total as f64;
    assert!((0.1..0.3).contains(&ratio), "observed ratio {ratio}");
    Ok(())
}

#[test]
fn empty_frequency_table_is_an_invalid_argument() {
    let table: Vec<(u32, Constant<u8>)> = Vec::new();
    assert!(matches!(frequency(table), Err(Error::Argument(_))));
}

#[test]
fn zero_frequency_weight_is_an_invalid_argument() {
    assert!(matches!(
        frequency([(0u32, constant(1u8))]),
        Err(Error::Argument(_))
    ));
}

#[test]
fn filter_resamples_until_the_predicate_holds() -> Result {
    let generator = choose(0u32, 100)?.filter(None, |value| value % 2 == 0);
    for result in generator.samples(500) {
        assert_eq!(result? % 2, 0);
    }
    Ok(())
}

#[test]
fn filter_budget_exhaustion_fails_generation() -> Result {
    let generator = choose(0u32, 100)?.filter(Some(8), |_| false);
    assert_eq!(generator.sample(0, SEED), Err(Error::Exhausted { retries: 8 }));
    Ok(())
}

#[test]
fn map_of_identity_is_observationally_unchanged() -> Result {
    let plain = choose(0u64, u64::MAX)?;
    let mapped = plain.map(|value| value);
    for size in [0, 1, 10] {
        assert_eq!(plain.sample(size, SEED)?, mapped.sample(size, SEED)?);
    }
    Ok(())
}

#[test]
fn flat_map_chains_dependent_generation() -> Result {
    let generator = choose(1u8, 5)?.flat_map(|low| constant(low * 2));
    for result in generator.samples(200) {
        let value = result?;
        assert!(value % 2 == 0 && (2..=10).contains(&value));
    }
    Ok(())
}

#[test]
fn constant_ignores_randomness() -> Result {
    for result in constant("fixed").samples(50) {
        assert_eq!(result?, "fixed");
    }
    Ok(())
}

#[test]
fn fail_always_reports_its_message() {
    let generator: Fail<bool> = fail("boom");
    assert_eq!(generator.sample(3, 42), Err(Error::Failure("boom".into())));
}

#[test]
fn tuple_generation_short_circuits_on_failure() {
    let failing: Fail<u8> = fail("late");
    let generator = (constant(1u8), failing);
    assert_eq!(generator.sample(0, 7), Err(Error::Failure("late".into())));
}

#[test]
fn samples_with_a_fixed_seed_repeat() -> Result {
    let generator = choose(0i64, 1_000_000)?;
    let first = generator
        .samples_with(64, SEED)
        .collect::<std::result::Result<Vec<_>, Error>>()?;
    let second = generator
        .samples_with(64, SEED)
        .collect::<std::result::Result<Vec<_>, Error>>()?;
    assert_eq!(first, second);
    Ok(())
}
