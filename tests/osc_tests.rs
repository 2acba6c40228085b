//! OSC Integration Tests
//!
//! Verifies that emitted datagrams are well-formed OSC 1.0 frames by
//! receiving them on a loopback socket and decoding them by hand.

use evochord::config::EvolverParams;
use evochord::ga::{Evolver, PitchRange};
use evochord::osc::{OscEmitter, OscMessage};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::net::UdpSocket;
use std::time::Duration;

/// Minimal OSC 1.0 frame decoder for assertions
fn decode(frame: &[u8]) -> (String, Vec<i32>) {
    let nul = frame.iter().position(|&b| b == 0).expect("unterminated address");
    let address = String::from_utf8(frame[..nul].to_vec()).unwrap();

    let mut offset = (nul + 4) & !3;
    assert_eq!(frame[offset], b',', "missing type tag string");
    let tag_nul = frame[offset..].iter().position(|&b| b == 0).unwrap() + offset;
    let tags = &frame[offset + 1..tag_nul];
    assert!(tags.iter().all(|&t| t == b'i'), "unexpected type tag");

    offset = (tag_nul + 4) & !3;
    let args = tags
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let at = offset + i * 4;
            i32::from_be_bytes(frame[at..at + 4].try_into().unwrap())
        })
        .collect();
    (address, args)
}

fn loopback_pair() -> (UdpSocket, OscEmitter) {
    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    listener
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let emitter = OscEmitter::new(listener.local_addr().unwrap()).unwrap();
    (listener, emitter)
}

fn recv_frame(listener: &UdpSocket) -> Vec<u8> {
    let mut buf = [0u8; 512];
    let (len, _) = listener.recv_from(&mut buf).unwrap();
    buf[..len].to_vec()
}

#[test]
fn test_target_chord_frame_decodes() {
    let (listener, emitter) = loopback_pair();

    let msg = OscMessage::with_args("/target_chord", vec![48, 52, 67]);
    emitter.send(&msg).unwrap();

    let (address, args) = decode(&recv_frame(&listener));
    assert_eq!(address, "/target_chord");
    assert_eq!(args, vec![48, 52, 67]);
}

#[test]
fn test_trajectory_frame_carries_pitches_then_colours() {
    let (listener, emitter) = loopback_pair();

    // Evolve one generation and emit its best chord the way the loop does
    let params = EvolverParams {
        population_size: 10,
        survival_fraction: 0.4,
        mutation_rate: 0.1,
        stopping_distance: None,
        max_generations: 5,
        pitch_range: PitchRange { low: 48, high: 71 },
    };
    let mut rng = Pcg32::seed_from_u64(21);
    let mut evolver = Evolver::new(&params, &[48, 52, 67], &mut rng).unwrap();
    let generation = evolver.step(&mut rng);

    let best = &generation.best;
    let args: Vec<i32> = best
        .pitches()
        .iter()
        .chain(best.colours())
        .map(|&v| i32::from(v))
        .collect();
    emitter.send(&OscMessage::with_args("/trajectory", args)).unwrap();

    let (address, received) = decode(&recv_frame(&listener));
    assert_eq!(address, "/trajectory");
    assert_eq!(received.len(), best.len() * 2);

    let pitches: Vec<i32> = received[..best.len()].to_vec();
    let colours: Vec<i32> = received[best.len()..].to_vec();
    assert!(pitches.iter().all(|&p| (48..=71).contains(&p)));
    assert!(colours.iter().all(|&c| (0..=127).contains(&c)));
}

#[test]
fn test_frame_is_four_byte_aligned_on_the_wire() {
    let (listener, emitter) = loopback_pair();

    let msg = OscMessage::with_args("/trajectory", vec![60, 64, 67, 100, 90, 80]);
    emitter.send(&msg).unwrap();

    let frame = recv_frame(&listener);
    assert_eq!(frame.len() % 4, 0);
    assert_eq!(frame, msg.encode());
}

#[test]
fn test_consecutive_generations_stream_distinct_frames() {
    let (listener, emitter) = loopback_pair();

    let params = EvolverParams {
        population_size: 10,
        survival_fraction: 0.4,
        mutation_rate: 0.5,
        stopping_distance: None,
        max_generations: 5,
        pitch_range: PitchRange { low: 0, high: 11 },
    };
    let mut rng = Pcg32::seed_from_u64(5);
    let mut evolver = Evolver::new(&params, &[0, 4, 7], &mut rng).unwrap();

    for _ in 0..3 {
        let generation = evolver.step(&mut rng);
        let args: Vec<i32> = generation
            .best
            .pitches()
            .iter()
            .chain(generation.best.colours())
            .map(|&v| i32::from(v))
            .collect();
        emitter.send(&OscMessage::with_args("/trajectory", args)).unwrap();

        let (address, received) = decode(&recv_frame(&listener));
        assert_eq!(address, "/trajectory");
        assert_eq!(received.len(), 6);
    }
}
