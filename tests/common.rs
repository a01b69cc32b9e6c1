pub use proviso::prelude::*;
use std::{error, result};

pub type Result = result::Result<(), Box<dyn error::Error>>;
pub const SEED: u64 = 0x5EED;

/// Suppresses panic output for tests whose predicate is expected to panic.
pub fn silent() {
    std::panic::set_hook(Box::new(|_| {}));
}
