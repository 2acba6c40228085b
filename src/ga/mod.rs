//! Genetic Algorithm Module
//!
//! Chord individuals, consonance fitness, and the generation loop:
//! - Chord/pitch-range types and gene sampling
//! - Fitness scoring against a target chord
//! - The Evolver running evaluate/select/crossover/mutate cycles

pub mod chord;
pub mod evolver;
pub mod fitness;

pub use chord::{Chord, PitchRange, COLOUR_HIGH, COLOUR_LOW};
pub use evolver::{Evolver, Generation};
pub use fitness::{consonance_score, distance_to_target};
