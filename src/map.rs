use crate::{
    error::Error,
    generate::{Generate, State},
};

#[derive(Clone, Debug, Default)]
pub struct Map<G: ?Sized, F> {
    map: F,
    generator: G,
}

impl<G: Generate, T, F: Fn(G::Item) -> T> Map<G, F> {
    pub const fn new(generator: G, map: F) -> Self {
        Self { generator, map }
    }
}

impl<G: Generate + ?Sized, T, F: Fn(G::Item) -> T> Generate for Map<G, F> {
    type Item = T;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        Ok((self.map)(self.generator.generate(state)?))
    }
}
