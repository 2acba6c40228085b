//! Chord individuals and gene ranges
//!
//! A chord is one genetic individual: an ordered pitch sequence with a
//! parallel colour/intensity sequence of the same length. Pitches are MIDI
//! note numbers drawn from a configurable range; colours are fixed to the
//! full 0..=127 MIDI value range and mapped to visuals by the patch.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoChordError, Result};

/// Lowest colour/intensity gene value
pub const COLOUR_LOW: u8 = 0;

/// Highest colour/intensity gene value
pub const COLOUR_HIGH: u8 = 127;

/// Inclusive MIDI note range for pitch genes
///
/// Construction rejects empty ranges (`low > high`); a `PitchRange` in hand
/// always contains at least one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRange {
    pub low: u8,
    pub high: u8,
}

impl PitchRange {
    /// Create a pitch range, failing on an empty range
    pub fn new(low: u8, high: u8) -> Result<Self> {
        if low > high {
            return Err(EvoChordError::EmptyPitchRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Whether `note` lies within the range
    pub fn contains(&self, note: u8) -> bool {
        note >= self.low && note <= self.high
    }

    /// Number of notes in the range
    pub fn width(&self) -> u32 {
        u32::from(self.high) - u32::from(self.low) + 1
    }

    /// Draw a uniform random note from the range
    pub fn sample(&self, rng: &mut impl Rng) -> u8 {
        rng.random_range(self.low..=self.high)
    }

    /// Draw a uniform random note different from `current`
    ///
    /// A single-note range has nothing else to offer and returns `current`.
    pub fn sample_excluding(&self, current: u8, rng: &mut impl Rng) -> u8 {
        sample_excluding(self.low, self.high, current, rng)
    }
}

impl Default for PitchRange {
    /// C3..=B4, the playable register of the installation
    fn default() -> Self {
        Self { low: 48, high: 71 }
    }
}

/// Draw a random colour gene
pub fn random_colour(rng: &mut impl Rng) -> u8 {
    rng.random_range(COLOUR_LOW..=COLOUR_HIGH)
}

/// Draw a random colour gene different from `current`
pub fn mutate_colour(current: u8, rng: &mut impl Rng) -> u8 {
    sample_excluding(COLOUR_LOW, COLOUR_HIGH, current, rng)
}

/// Uniform draw from `low..=high` excluding `current`
///
/// Samples an offset in `1..width` and rotates, so no rejection loop is
/// needed. Returns `current` when the range holds a single value.
fn sample_excluding(low: u8, high: u8, current: u8, rng: &mut impl Rng) -> u8 {
    debug_assert!(current >= low && current <= high);
    let width = u32::from(high) - u32::from(low) + 1;
    if width <= 1 {
        return current;
    }
    let offset = rng.random_range(1..width);
    let pos = (u32::from(current) - u32::from(low) + offset) % width;
    (u32::from(low) + pos) as u8
}

/// One genetic individual: parallel pitch and colour sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pitches: Vec<u8>,
    colours: Vec<u8>,
}

impl Chord {
    /// Create a chord from parallel pitch and colour sequences
    ///
    /// Fails when the sequences differ in length.
    pub fn new(pitches: Vec<u8>, colours: Vec<u8>) -> Result<Self> {
        if pitches.len() != colours.len() {
            return Err(EvoChordError::ChordLengthMismatch {
                pitches: pitches.len(),
                colours: colours.len(),
            });
        }
        Ok(Self { pitches, colours })
    }

    /// Internal constructor for breeding paths that preserve the invariant
    pub(crate) fn from_parts(pitches: Vec<u8>, colours: Vec<u8>) -> Self {
        debug_assert_eq!(pitches.len(), colours.len());
        Self { pitches, colours }
    }

    /// Generate a random chord of `len` notes within `range`
    pub fn random(len: usize, range: PitchRange, rng: &mut impl Rng) -> Self {
        let pitches = (0..len).map(|_| range.sample(rng)).collect();
        let colours = (0..len).map(|_| random_colour(rng)).collect();
        Self { pitches, colours }
    }

    pub fn pitches(&self) -> &[u8] {
        &self.pitches
    }

    pub fn colours(&self) -> &[u8] {
        &self.colours
    }

    /// Number of notes in the chord
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }
}
