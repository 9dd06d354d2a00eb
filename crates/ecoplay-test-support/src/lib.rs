//! Shared test doubles for the Ecoplay engines.

mod clock;
mod rng;

pub use clock::{FixedClock, ManualClock};
pub use rng::{MockRng, SequenceRng};
