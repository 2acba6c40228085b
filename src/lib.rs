//! Evochord - Genetic Chord Evolution for Installations
//!
//! Evochord evolves populations of musical pitch/colour tuples toward a
//! target chord and streams each generation's best candidate to an external
//! visual/audio patch over OSC (UDP).
//!
//! # Architecture
//!
//! Two halves, wired together by the CLI:
//! - Evolver: owns a population of candidate chords and runs the
//!   evaluate/select/crossover/mutate cycle
//! - Emitter: serializes chords into OSC messages and fire-and-forgets
//!   them to the patch; the patch is an opaque consumer

pub mod cli;
pub mod config;
pub mod error;
pub mod ga;
pub mod osc;

pub use error::{EvoChordError, Result};
