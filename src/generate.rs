use crate::{
    arbitrary::Lift, error::Error, filter::Filter, flatten::Flatten, map::Map, random::Random,
    tuples,
};

/// Context threaded through a single generation pass: the random source plus
/// the current size, a non-negative bound on structural complexity that the
/// checker grows with the try number.
#[derive(Clone, Debug)]
pub struct State {
    size: usize,
    random: Random,
}

impl State {
    pub fn new(size: usize, random: Random) -> Self {
        Self { size, random }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn random(&mut self) -> &mut Random {
        &mut self.random
    }

    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    pub(crate) fn resize(&mut self, size: usize) {
        self.size = size;
    }
}

/// A composable lazy value generator. Generators mutate no shared state;
/// failure is signaled through the returned `Result`, never by panicking.
pub trait Generate {
    type Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error>;

    fn map<T, F: Fn(Self::Item) -> T>(self, map: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map::new(self, map)
    }

    fn flat_map<G: Generate, F: Fn(Self::Item) -> G>(self, bind: F) -> Flatten<Map<Self, F>>
    where
        Self: Sized,
    {
        self.map(bind).flatten()
    }

    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Generate,
    {
        Flatten(self)
    }

    /// Resamples until `filter` accepts a value or `retries` draws have been
    /// rejected, in which case generation fails with [`Error::Exhausted`].
    fn filter<F: Fn(&Self::Item) -> bool>(self, retries: Option<usize>, filter: F) -> Filter<Self, F>
    where
        Self: Sized,
    {
        Filter::new(self, filter, retries.unwrap_or(crate::filter::RETRIES))
    }

    /// Lifts this generator into a size-ignoring [`crate::Arbitrary`].
    fn arbitrary(self) -> Lift<Self>
    where
        Self: Sized,
    {
        Lift(self)
    }
}

impl<G: Generate + ?Sized> Generate for &G {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        G::generate(self, state)
    }
}

impl<G: Generate + ?Sized> Generate for &mut G {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        G::generate(self, state)
    }
}

macro_rules! tuple {
    ($n:ident, $c:tt) => {
        impl Generate for () {
            type Item = ();

            fn generate(&self, _state: &mut State) -> Result<Self::Item, Error> {
                Ok(())
            }
        }
    };
    ($n:ident, $c:tt $(,$p:ident, $t:ident, $i:tt)+) => {
        impl<$($t: Generate,)*> Generate for ($($t,)*) {
            type Item = ($($t::Item,)*);

            // The first failing member short-circuits the whole tuple.
            fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
                Ok(($(self.$i.generate(state)?,)*))
            }
        }
    };
}

tuples!(tuple);
