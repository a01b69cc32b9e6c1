use crate::{
    error::Error,
    generate::{Generate, State},
};

/// Default retry budget for [`Filter`].
pub const RETRIES: usize = 256;

#[derive(Clone, Debug, Default)]
pub struct Filter<G: ?Sized, F> {
    filter: F,
    retries: usize,
    generator: G,
}

impl<G: Generate, F: Fn(&G::Item) -> bool> Filter<G, F> {
    pub const fn new(generator: G, filter: F, retries: usize) -> Self {
        Self {
            generator,
            filter,
            retries,
        }
    }
}

impl<G: Generate + ?Sized, F: Fn(&G::Item) -> bool> Generate for Filter<G, F> {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        for _ in 0..self.retries {
            let item = self.generator.generate(state)?;
            if (self.filter)(&item) {
                return Ok(item);
            }
        }
        Err(Error::Exhausted {
            retries: self.retries,
        })
    }
}
