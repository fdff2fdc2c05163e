//! 8-bit ADPCM Encoder Tests
//!
//! Sign handling, step adaptation and nibble packing order.

use super::utils::*;
use crate::codecs::adpcm::packing::{encode, encoded_len};
use crate::codecs::adpcm::quantizer::encode_sample;
use crate::codecs::adpcm::state::AdpcmState;
use crate::codecs::adpcm::tables::{MAX_STEP_INDEX, SIGN_BIT};

/// Test the sign bit follows the direction of the difference
#[test]
fn test_encoder_sign_bit() {
    let mut state = AdpcmState::new(100);
    assert_eq!(encode_sample(150, &mut state) & SIGN_BIT, 0);

    let mut state = AdpcmState::new(100);
    assert_eq!(encode_sample(50, &mut state) & SIGN_BIT, SIGN_BIT);
}

/// Test codes always fit in a nibble
#[test]
fn test_encoder_codes_are_nibbles() {
    let mut state = AdpcmState::new(128);
    for sample in generate_white_noise(2000, 11) {
        assert!(encode_sample(sample, &mut state) <= 0x0F);
    }
}

/// Test the step index grows under a sustained large difference
#[test]
fn test_encoder_step_adapts_up() {
    let mut state = AdpcmState::new(0);
    let mut last = state.step_index;
    for _ in 0..5 {
        encode_sample(255, &mut state);
        assert!(state.step_index > last);
        last = state.step_index;
    }
}

/// Test the step index decays back on a flat signal
#[test]
fn test_encoder_step_decays_on_silence() {
    let mut state = AdpcmState { predictor: 128, step_index: MAX_STEP_INDEX };
    for _ in 0..200 {
        encode_sample(128, &mut state);
    }
    assert_eq!(state.step_index, 0);
    assert_eq!(state.predictor, 128);
}

/// Test the first code lands in the low nibble and the second in the high nibble
#[test]
fn test_encoder_nibble_order() {
    let samples = [60u8, 90, 20];

    let mut state = AdpcmState::new(60);
    let first = encode_sample(90, &mut state);
    let second = encode_sample(20, &mut state);

    let mut out = [0u8; 2];
    assert_eq!(encode(&samples, &mut out), 2);
    assert_eq!(out[0], 60);
    assert_eq!(out[1] & 0x0F, first);
    assert_eq!(out[1] >> 4, second);
}

/// Test a larger output buffer is only written up to the computed length
#[test]
fn test_encoder_leaves_spare_capacity_untouched() {
    let samples = generate_sine_wave(1000.0, 8000.0, 33, 120);
    let mut out = vec![0xA5u8; 64];

    let written = encode(&samples, &mut out);
    assert_eq!(written, encoded_len(samples.len()));
    assert!(out[written..].iter().all(|&b| b == 0xA5));
}
