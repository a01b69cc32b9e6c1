use crate::{
    error::Error,
    generate::{Generate, State},
    random::Random,
};
use core::fmt;

/// Uniform generator over the inclusive range `[low, high]`. Construction
/// rejects `low > high` instead of swapping the bounds.
#[derive(Clone, Copy, Debug)]
pub struct Choose<T> {
    low: T,
    high: T,
}

/// Primitives that can be drawn uniformly from an inclusive range.
pub trait Uniform: Copy + PartialOrd + fmt::Debug {
    fn draw(low: Self, high: Self, random: &mut Random) -> Self;
}

impl<T: Uniform> Choose<T> {
    pub fn new(low: T, high: T) -> Result<Self, Error> {
        if low > high {
            Err(Error::Argument(
                format!("inverted range: low {low:?} exceeds high {high:?}").into(),
            ))
        } else {
            Ok(Self { low, high })
        }
    }

    pub const fn low(&self) -> T {
        self.low
    }

    pub const fn high(&self) -> T {
        self.high
    }
}

impl<T: Uniform> Generate for Choose<T> {
    type Item = T;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        if self.low == self.high {
            Ok(self.low)
        } else {
            Ok(T::draw(self.low, self.high, state.random()))
        }
    }
}

macro_rules! uniform {
    ($($type:ident),*) => {$(
        impl Uniform for $type {
            fn draw(low: Self, high: Self, random: &mut Random) -> Self {
                random.$type(low..=high)
            }
        }
    )*}
}

uniform!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);
