use crate::{
    error::Error,
    generate::{Generate, State},
};

/// Always produces the same value, ignoring randomness.
#[derive(Clone, Debug, Default)]
pub struct Constant<T: ?Sized>(pub T);

impl<T: Clone> Generate for Constant<T> {
    type Item = T;

    fn generate(&self, _state: &mut State) -> Result<Self::Item, Error> {
        Ok(self.0.clone())
    }
}
