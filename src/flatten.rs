use crate::{
    error::Error,
    generate::{Generate, State},
};

#[derive(Clone, Debug, Default)]
pub struct Flatten<G: ?Sized>(pub G);

impl<G: Generate + ?Sized> Generate for Flatten<G>
where
    G::Item: Generate,
{
    type Item = <G::Item as Generate>::Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        self.0.generate(state)?.generate(state)
    }
}
