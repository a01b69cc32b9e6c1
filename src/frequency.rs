use crate::{
    error::Error,
    generate::{Generate, State},
};

/// Selects one of its alternatives with probability proportional to its
/// weight using a single draw, then delegates to it. Weights are validated at
/// construction: the table must be nonempty and every weight positive.
#[derive(Clone, Debug)]
pub struct Frequency<G> {
    choices: Vec<(u32, G)>,
    total: u32,
}

impl<G> Frequency<G> {
    pub fn new(choices: Vec<(u32, G)>) -> Result<Self, Error> {
        if choices.is_empty() {
            return Err(Error::argument("frequency requires at least one alternative"));
        }
        let mut total = 0u32;
        for (weight, _) in &choices {
            if *weight == 0 {
                return Err(Error::argument("frequency weights must be positive"));
            }
            total = total
                .checked_add(*weight)
                .ok_or_else(|| Error::argument("frequency weights overflow"))?;
        }
        Ok(Self { choices, total })
    }
}

impl<G: Generate> Generate for Frequency<G> {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Result<Self::Item, Error> {
        let mut draw = state.random().u32(0..self.total);
        for (weight, generator) in &self.choices {
            if draw < *weight {
                return generator.generate(state);
            }
            draw -= *weight;
        }
        unreachable!("the table is nonempty and the draw is less than the weight total");
    }
}
