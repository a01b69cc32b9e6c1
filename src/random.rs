use core::ops::RangeBounds;
use fastrand::Rng;

/// Seedable source of uniform primitive randomness. Two sources created with
/// the same seed produce the same sequence of draws.
#[derive(Debug, Clone)]
pub struct Random(Rng);

impl Random {
    pub fn new(seed: Option<u64>) -> Self {
        Self(seed.map_or_else(Rng::new, Rng::with_seed))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    pub fn seed(&self) -> u64 {
        self.0.get_seed()
    }
}

pub(crate) fn seed() -> u64 {
    fastrand::u64(..)
}

macro_rules! range {
    ($type:ident) => {
        impl Random {
            pub fn $type<R: RangeBounds<$type>>(&mut self, range: R) -> $type {
                self.0.$type(range)
            }
        }
    };
    ($($type:ident),*) => {$(range!($type);)*}
}

range!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);
