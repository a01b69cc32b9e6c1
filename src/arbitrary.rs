use crate::{generate::Generate, tuples};

/// A size-parameterized factory of generators. The checker derives the size
/// from the try number, biasing early tries toward small values and later
/// tries toward structurally larger ones.
pub trait Arbitrary {
    type Item;
    type Generate: Generate<Item = Self::Item>;

    fn arbitrary(&self, size: usize) -> Self::Generate;
}

/// A `size -> generator` function as an [`Arbitrary`] (see [`crate::sized`]).
pub struct Function<F>(pub(crate) F);

impl<F: Clone> Clone for Function<F> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<G: Generate, F: Fn(usize) -> G> Arbitrary for Function<F> {
    type Item = G::Item;
    type Generate = G;

    fn arbitrary(&self, size: usize) -> Self::Generate {
        (self.0)(size)
    }
}

/// A generator lifted into a size-ignoring [`Arbitrary`]
/// (see [`Generate::arbitrary`]).
#[derive(Clone, Debug, Default)]
pub struct Lift<G: ?Sized>(pub G);

impl<G: Generate + Clone> Arbitrary for Lift<G> {
    type Item = G::Item;
    type Generate = G;

    fn arbitrary(&self, _size: usize) -> Self::Generate {
        self.0.clone()
    }
}

macro_rules! tuple {
    ($n:ident, $c:tt) => {
        impl Arbitrary for () {
            type Item = ();
            type Generate = ();

            fn arbitrary(&self, _size: usize) -> Self::Generate {}
        }
    };
    ($n:ident, $c:tt $(,$p:ident, $t:ident, $i:tt)+) => {
        impl<$($t: Arbitrary,)*> Arbitrary for ($($t,)*) {
            type Item = ($($t::Item,)*);
            type Generate = ($($t::Generate,)*);

            fn arbitrary(&self, size: usize) -> Self::Generate {
                ($(self.$i.arbitrary(size),)*)
            }
        }
    };
}

tuples!(tuple);
