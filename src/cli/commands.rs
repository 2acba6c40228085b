//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command, including the
//! installation loop itself.

use std::net::IpAddr;
use std::path::Path;
use std::thread;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::InstallationConfig;
use crate::error::{EvoChordError, Result};
use crate::ga::{Chord, Evolver};
use crate::osc::{OscEmitter, OscMessage};

/// Start the installation loop: cycle the progression, evolve toward each
/// target, and stream every generation's best chord to the patch.
///
/// Runs until the process is terminated. Send failures are logged and
/// skipped; the loop never stops for them.
pub fn run(
    config_path: Option<&Path>,
    host: Option<IpAddr>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.network.host = host;
    }
    if let Some(port) = port {
        config.network.port = port;
    }

    // Surface a malformed progression before the first note, not mid-show
    if config.progression.is_empty() {
        return Err(EvoChordError::EmptyProgression);
    }
    for target in &config.progression {
        config.evolver.validate(&target.notes)?;
    }

    let mut rng = seeded_rng(seed);
    let emitter = OscEmitter::new(config.network.target_addr())?;
    info!("Sending OSC to {}", emitter.target());

    loop {
        for target in &config.progression {
            info!("Switching to chord: {} {:?}", target.name, target.notes);
            send_or_warn(&emitter, &target_chord_message(&target.notes));

            let mut evolver = Evolver::new(&config.evolver, &target.notes, &mut rng)?;
            let mut arrival = None;

            for _ in 0..config.evolver.max_generations {
                let generation = evolver.step(&mut rng);
                debug!(
                    "Generation {}: best {:?} score {:.3} mean {:.3}",
                    generation.index,
                    generation.best.pitches(),
                    generation.best_score,
                    generation.mean_score
                );

                let msg = trajectory_message(&generation.best);
                send_or_warn(&emitter, &msg);
                thread::sleep(config.pacing.interval(&mut rng));

                let solved = evolver.solved(generation.best_score);
                arrival = Some(msg);
                if solved {
                    info!(
                        "Reached {} after {} generations (score {:.3})",
                        target.name,
                        generation.index + 1,
                        generation.best_score
                    );
                    break;
                }
            }

            // Hold the arrival chord so the patch can dwell on it
            if let Some(msg) = arrival {
                for _ in 0..config.pacing.repeat_final {
                    send_or_warn(&emitter, &msg);
                    thread::sleep(config.pacing.interval(&mut rng));
                }
            }

            thread::sleep(config.pacing.switch_pause());
        }
    }
}

/// Evolve each progression target offline and print the trajectory.
///
/// Touches no network; rehearsal and debugging aid.
pub fn audition(
    config_path: Option<&Path>,
    seed: Option<u64>,
    generations: Option<u64>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let budget = generations.unwrap_or(config.evolver.max_generations);
    let mut rng = seeded_rng(seed);

    for target in &config.progression {
        println!();
        println!("Target: {} {:?}", target.name, target.notes);

        let mut evolver = Evolver::new(&config.evolver, &target.notes, &mut rng)?;
        for _ in 0..budget {
            let generation = evolver.step(&mut rng);
            println!(
                "  gen {:>3}  best {:?}  score {:>8.3}  mean {:>8.3}",
                generation.index,
                generation.best.pitches(),
                generation.best_score,
                generation.mean_score
            );
            if evolver.solved(generation.best_score) {
                println!("  reached stopping distance");
                break;
            }
        }
    }

    Ok(())
}

/// Print the effective configuration as JSON.
pub fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", config.to_json()?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<InstallationConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            InstallationConfig::load(path)
        }
        None => Ok(InstallationConfig::default()),
    }
}

/// Build the generator, logging the seed so any run can be replayed
fn seeded_rng(seed: Option<u64>) -> Pcg32 {
    let seed = seed.unwrap_or_else(rand::random);
    info!("RNG seed: {seed}");
    Pcg32::seed_from_u64(seed)
}

/// `/target_chord` announcement for a progression switch
fn target_chord_message(notes: &[u8]) -> OscMessage {
    OscMessage::with_args("/target_chord", notes.iter().map(|&n| i32::from(n)).collect())
}

/// `/trajectory` frame: pitch list then parallel colour list
fn trajectory_message(chord: &Chord) -> OscMessage {
    let args = chord
        .pitches()
        .iter()
        .chain(chord.colours())
        .map(|&v| i32::from(v))
        .collect();
    OscMessage::with_args("/trajectory", args)
}

fn send_or_warn(emitter: &OscEmitter, msg: &OscMessage) {
    if let Err(err) = emitter.send(msg) {
        warn!("OSC send failed ({}): {}", msg.address(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::PitchRange;

    #[test]
    fn test_target_chord_message() {
        let msg = target_chord_message(&[48, 52, 67]);
        assert_eq!(msg.address(), "/target_chord");
        assert_eq!(msg.args(), &[48, 52, 67]);
    }

    #[test]
    fn test_trajectory_message_pitches_then_colours() {
        let mut rng = Pcg32::seed_from_u64(1);
        let chord = Chord::random(3, PitchRange::default(), &mut rng);

        let msg = trajectory_message(&chord);
        assert_eq!(msg.address(), "/trajectory");
        assert_eq!(msg.args().len(), 6);
        let pitches: Vec<i32> = chord.pitches().iter().map(|&p| i32::from(p)).collect();
        let colours: Vec<i32> = chord.colours().iter().map(|&c| i32::from(c)).collect();
        assert_eq!(&msg.args()[..3], pitches.as_slice());
        assert_eq!(&msg.args()[3..], colours.as_slice());
    }
}
