use crate::{
    error::Error,
    generate::{Generate, State},
    random::{self, Random},
};
use core::{iter::FusedIterator, ops::Range};

/// Diagnostic sampling of a generator outside of any property check.
pub trait Sample: Generate {
    /// Generates `count` values that are progressively larger in size.
    fn samples(&self, count: usize) -> Samples<'_, Self> {
        self.samples_with(count, random::seed())
    }

    fn samples_with(&self, count: usize, seed: u64) -> Samples<'_, Self> {
        Samples {
            generator: self,
            state: State::new(0, Random::with_seed(seed)),
            indices: 0..count,
        }
    }

    /// Generates a single value of the given size.
    fn sample(&self, size: usize, seed: u64) -> Result<Self::Item, Error> {
        self.generate(&mut State::new(size, Random::with_seed(seed)))
    }
}

impl<G: Generate + ?Sized> Sample for G {}

#[derive(Debug)]
pub struct Samples<'a, G: ?Sized> {
    generator: &'a G,
    state: State,
    indices: Range<usize>,
}

impl<G: Generate + ?Sized> Iterator for Samples<'_, G> {
    type Item = Result<G::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        self.state.resize(index);
        Some(self.generator.generate(&mut self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<G: Generate + ?Sized> ExactSizeIterator for Samples<'_, G> {
    fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<G: Generate + ?Sized> FusedIterator for Samples<'_, G> {}
