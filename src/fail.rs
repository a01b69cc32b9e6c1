use crate::{
    error::Error,
    generate::{Generate, State},
};
use core::marker::PhantomData;
use std::borrow::Cow;

/// Always signals a generation failure carrying its message. Used to verify
/// that generator failures surface as erroneous check results rather than
/// being swallowed.
#[derive(Clone, Debug)]
pub struct Fail<T> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Generate for Fail<T> {
    type Item = T;

    fn generate(&self, _state: &mut State) -> Result<Self::Item, Error> {
        Err(Error::Failure(self.message.clone()))
    }
}
