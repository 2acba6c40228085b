//! Genetic evolution of chord candidates
//!
//! One `Evolver` owns one population and evolves it toward one target
//! chord. Each `step` runs evaluate → select → crossover → mutate and
//! reports the generation's best candidate for emission. All randomness
//! flows through an explicitly passed source, so a seeded run replays
//! exactly.

use std::cmp::Ordering;

use rand::Rng;

use crate::config::EvolverParams;
use crate::error::Result;
use crate::ga::chord::{mutate_colour, Chord};
use crate::ga::fitness::consonance_score;

/// Outcome of one generation step
#[derive(Debug, Clone)]
pub struct Generation {
    /// Generation number, starting at 0
    pub index: u64,
    /// Best-scoring chord of the evaluated population
    pub best: Chord,
    /// Score of `best`
    pub best_score: f64,
    /// Mean score across the evaluated population
    pub mean_score: f64,
}

/// Evolves a population of chords toward a target
pub struct Evolver {
    params: EvolverParams,
    target_sorted: Vec<u8>,
    population: Vec<Chord>,
    generation: u64,
}

impl Evolver {
    /// Initialize a random population for `target`
    ///
    /// Every chord carries as many notes as the target. Fails fast on
    /// malformed parameters or a target outside the pitch range; nothing
    /// fails after construction.
    pub fn new(params: &EvolverParams, target: &[u8], rng: &mut impl Rng) -> Result<Self> {
        params.validate(target)?;

        let mut target_sorted = target.to_vec();
        target_sorted.sort_unstable();

        let population = (0..params.population_size)
            .map(|_| Chord::random(target.len(), params.pitch_range, rng))
            .collect();

        Ok(Self {
            params: params.clone(),
            target_sorted,
            population,
            generation: 0,
        })
    }

    /// Score a chord against the target
    ///
    /// Deterministic; higher is better, 0.0 is an exact pitch match.
    pub fn evaluate(&self, chord: &Chord) -> f64 {
        consonance_score(chord.pitches(), &self.target_sorted)
    }

    /// Truncation selection: retain the top survival fraction by score
    ///
    /// Ties keep their original population order. At least one chord
    /// always survives; never returns more chords than it was given.
    pub fn select(&self, population: &[Chord]) -> Vec<Chord> {
        if population.is_empty() {
            return Vec::new();
        }

        let scores: Vec<f64> = population.iter().map(|c| self.evaluate(c)).collect();
        let mut order: Vec<usize> = (0..population.len()).collect();
        // Stable sort, so equal scores stay in original order
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

        let keep = (population.len() as f64 * self.params.survival_fraction).ceil() as usize;
        order.truncate(keep.clamp(1, population.len()));
        order.into_iter().map(|i| population[i].clone()).collect()
    }

    /// Split-point recombination of two parents
    ///
    /// One split index applies to pitches and colours alike: the child
    /// takes parent A's genes before the split and parent B's from it on.
    pub fn crossover(a: &Chord, b: &Chord, rng: &mut impl Rng) -> Chord {
        debug_assert_eq!(a.len(), b.len());
        let split = rng.random_range(0..=a.len());
        let pitches = a.pitches()[..split]
            .iter()
            .chain(&b.pitches()[split..])
            .copied()
            .collect();
        let colours = a.colours()[..split]
            .iter()
            .chain(&b.colours()[split..])
            .copied()
            .collect();
        Chord::from_parts(pitches, colours)
    }

    /// Mutate each gene independently with probability `rate`
    ///
    /// A mutated gene is redrawn from its range excluding the current
    /// value, so rate 1.0 changes every gene (single-value ranges aside)
    /// and rate 0.0 returns the chord unchanged.
    pub fn mutate(&self, chord: &Chord, rate: f64, rng: &mut impl Rng) -> Chord {
        let range = self.params.pitch_range;
        let pitches = chord
            .pitches()
            .iter()
            .map(|&p| {
                if rng.random_bool(rate) {
                    range.sample_excluding(p, rng)
                } else {
                    p
                }
            })
            .collect();
        let colours = chord
            .colours()
            .iter()
            .map(|&c| {
                if rng.random_bool(rate) {
                    mutate_colour(c, rng)
                } else {
                    c
                }
            })
            .collect();
        Chord::from_parts(pitches, colours)
    }

    /// Run one full generation and report its best chord
    ///
    /// Survivors carry over intact; children bred from survivor pairs
    /// refill the population and take the mutation pass. The best score
    /// therefore never regresses between generations.
    pub fn step(&mut self, rng: &mut impl Rng) -> Generation {
        let scores: Vec<f64> = self.population.iter().map(|c| self.evaluate(c)).collect();

        let mut best_idx = 0;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best_idx] {
                best_idx = i;
            }
        }
        let best = self.population[best_idx].clone();
        let best_score = scores[best_idx];
        let mean_score = scores.iter().sum::<f64>() / scores.len() as f64;

        let survivors = self.select(&self.population);

        let mut next = survivors.clone();
        let mut pair = 0usize;
        while next.len() < self.params.population_size {
            let a = &survivors[pair % survivors.len()];
            let b = &survivors[survivors.len() - 1 - pair % survivors.len()];
            let child = Self::crossover(a, b, rng);
            next.push(self.mutate(&child, self.params.mutation_rate, rng));
            pair += 1;
        }

        let index = self.generation;
        self.generation += 1;
        self.population = next;

        Generation {
            index,
            best,
            best_score,
            mean_score,
        }
    }

    /// Whether a best score has come within the stopping distance
    pub fn solved(&self, best_score: f64) -> bool {
        match self.params.stopping_distance {
            Some(stop) => -best_score < stop,
            None => false,
        }
    }

    /// Current population (fixed size, regenerated each step)
    pub fn population(&self) -> &[Chord] {
        &self.population
    }

    /// Number of completed generations
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
