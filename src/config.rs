//! Installation configuration
//!
//! All knobs for a show live in one JSON file: evolution parameters, the
//! patch endpoint, pacing, and the chord progression the loop cycles
//! through. Every section has defaults, so a missing file or a partial
//! file is still a valid installation.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoChordError, Result};
use crate::ga::chord::PitchRange;

/// Top-level configuration for one installation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationConfig {
    /// Genetic algorithm parameters
    #[serde(default)]
    pub evolver: EvolverParams,

    /// Where the patch listens
    #[serde(default)]
    pub network: NetworkConfig,

    /// Timing between emitted chords
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Target chords the loop cycles through, in order
    #[serde(default = "default_progression")]
    pub progression: Vec<TargetChord>,
}

impl InstallationConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Render the effective configuration as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            evolver: EvolverParams::default(),
            network: NetworkConfig::default(),
            pacing: PacingConfig::default(),
            progression: default_progression(),
        }
    }
}

/// Genetic algorithm parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolverParams {
    /// Number of chords in the population
    pub population_size: usize,

    /// Fraction of the population retained by selection, in (0, 1]
    pub survival_fraction: f64,

    /// Per-gene mutation probability, in [0, 1]
    pub mutation_rate: f64,

    /// Distance to the target at which evolution stops early; `None`
    /// evolves for the full generation budget
    pub stopping_distance: Option<f64>,

    /// Generation budget per target chord
    pub max_generations: u64,

    /// MIDI note range pitch genes are drawn from
    pub pitch_range: PitchRange,
}

impl EvolverParams {
    /// Check parameters and a target chord before evolution starts
    ///
    /// Called once per target so a malformed configuration aborts at
    /// startup instead of mid-show.
    pub fn validate(&self, target: &[u8]) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvoChordError::InvalidPopulationSize {
                size: self.population_size,
            });
        }
        if self.pitch_range.low > self.pitch_range.high {
            return Err(EvoChordError::EmptyPitchRange {
                low: self.pitch_range.low,
                high: self.pitch_range.high,
            });
        }
        if !(self.survival_fraction > 0.0 && self.survival_fraction <= 1.0) {
            return Err(EvoChordError::InvalidSurvivalFraction {
                fraction: self.survival_fraction,
            });
        }
        if !(self.mutation_rate >= 0.0 && self.mutation_rate <= 1.0) {
            return Err(EvoChordError::InvalidMutationRate {
                rate: self.mutation_rate,
            });
        }
        if target.is_empty() {
            return Err(EvoChordError::EmptyTargetChord);
        }
        for &note in target {
            if !self.pitch_range.contains(note) {
                return Err(EvoChordError::TargetOutOfRange {
                    note,
                    low: self.pitch_range.low,
                    high: self.pitch_range.high,
                });
            }
        }
        Ok(())
    }
}

impl Default for EvolverParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            survival_fraction: 0.4,
            mutation_rate: 0.05,
            stopping_distance: Some(1.0),
            max_generations: 50,
            pitch_range: PitchRange::default(),
        }
    }
}

/// Where the patch listens for OSC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl NetworkConfig {
    /// The patch endpoint as a socket address
    pub fn target_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 12000,
        }
    }
}

/// Timing of the emission loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Minimum pause between emitted chords, seconds
    pub base_secs: f64,

    /// Uniform random extra pause on top of the base, seconds
    pub jitter_secs: f64,

    /// How many times the arrival chord is re-emitted once a target is
    /// reached, holding it audible before the progression moves on
    pub repeat_final: u32,

    /// Pause before switching to the next target chord, seconds
    pub switch_pause_secs: f64,
}

impl PacingConfig {
    /// Draw the pause before the next emission
    pub fn interval(&self, rng: &mut impl Rng) -> Duration {
        let jitter = rng.random::<f64>() * self.jitter_secs.max(0.0);
        Duration::from_secs_f64(self.base_secs.max(0.0) + jitter)
    }

    /// Pause between progression targets
    pub fn switch_pause(&self) -> Duration {
        Duration::from_secs_f64(self.switch_pause_secs.max(0.0))
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_secs: 1.1,
            jitter_secs: 1.0,
            repeat_final: 3,
            switch_pause_secs: 1.2,
        }
    }
}

/// A named target chord in the progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetChord {
    pub name: String,
    pub notes: Vec<u8>,
}

impl TargetChord {
    pub fn new(name: &str, notes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            notes,
        }
    }
}

/// The default progression: C, G, Dm, Am, E, Bdim voicings
fn default_progression() -> Vec<TargetChord> {
    vec![
        TargetChord::new("C", vec![48, 52, 67]),
        TargetChord::new("G", vec![55, 59, 62]),
        TargetChord::new("Dm", vec![50, 53, 69]),
        TargetChord::new("Am", vec![48, 57, 64]),
        TargetChord::new("E", vec![52, 68, 71]),
        TargetChord::new("Bdim", vec![50, 59, 65]),
    ]
}
