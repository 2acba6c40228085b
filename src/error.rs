//! Error handling for Evochord
//!
//! Configuration errors abort at startup; transport errors on send are
//! logged by the installation loop and never terminate it.

use thiserror::Error;

/// Result type alias for Evochord operations
pub type Result<T> = std::result::Result<T, EvoChordError>;

/// Main error type for Evochord operations
#[derive(Error, Debug)]
pub enum EvoChordError {
    // Configuration Errors
    #[error("Invalid population size: {size} (must be positive)")]
    InvalidPopulationSize { size: usize },

    #[error("Empty pitch range: {low}..={high}")]
    EmptyPitchRange { low: u8, high: u8 },

    #[error("Target chord has no notes")]
    EmptyTargetChord,

    #[error("Progression has no target chords")]
    EmptyProgression,

    #[error("Target note {note} outside pitch range {low}..={high}")]
    TargetOutOfRange { note: u8, low: u8, high: u8 },

    #[error("Invalid survival fraction: {fraction} (must be in (0, 1])")]
    InvalidSurvivalFraction { fraction: f64 },

    #[error("Invalid mutation rate: {rate} (must be in [0, 1])")]
    InvalidMutationRate { rate: f64 },

    // Chord Errors
    #[error("Chord has {pitches} pitches but {colours} colours")]
    ChordLengthMismatch { pitches: usize, colours: usize },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvoChordError::InvalidPopulationSize { size: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid population size: 0 (must be positive)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EvoChordError = io.into();
        assert!(matches!(err, EvoChordError::Io(_)));
    }
}
