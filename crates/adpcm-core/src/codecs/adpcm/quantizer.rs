//! 8-bit ADPCM Sample Quantizer
//!
//! One sample in, one 4-bit code out (and the reverse). A code is laid out as
//! `S M2 M1 M0`: bit 3 is the sign of the difference, bits 2..0 are the
//! magnitude found by successive approximation against `step`, `step >> 1`,
//! `step >> 2`. Encoder and decoder apply the same reconstruction, so they stay
//! in lockstep as long as they see the same codes.

use crate::codecs::adpcm::state::AdpcmState;
use crate::codecs::adpcm::tables::{CODE_MASK, MAGNITUDE_BITS, SIGN_BIT};

/// Encode one sample into a 4-bit code
///
/// Quantizes `sample - predictor`, advances `state` exactly as the decoder
/// will, and returns the code in the low nibble.
///
/// # Arguments
/// * `sample` - Raw 8-bit input sample
/// * `state` - Codec state, updated in place
///
/// # Returns
/// * 4-bit code (0-15)
pub fn encode_sample(sample: u8, state: &mut AdpcmState) -> u8 {
    let mut diff = i32::from(sample) - i32::from(state.predictor);
    let mut code = 0u8;

    if diff < 0 {
        code = SIGN_BIT;
        diff = -diff;
    }

    let mut step = state.step_size() as i16;
    // Bias term
    let mut delta = step >> MAGNITUDE_BITS;

    for bit in (0..MAGNITUDE_BITS).rev() {
        if diff >= i32::from(step) {
            code |= 1 << bit;
            diff -= i32::from(step);
            delta += step;
        }
        step >>= 1;
    }

    apply_delta(state, code, delta);
    code
}

/// Decode one 4-bit code into a reconstructed sample
///
/// Only the low nibble of `code` is used.
///
/// # Arguments
/// * `code` - 4-bit code produced by [`encode_sample`]
/// * `state` - Codec state, updated in place
///
/// # Returns
/// * Reconstructed 8-bit sample (the clamped predictor)
pub fn decode_sample(code: u8, state: &mut AdpcmState) -> u8 {
    let code = code & CODE_MASK;
    let step = state.step_size() as i16;
    let mut delta = step >> MAGNITUDE_BITS;

    // Most significant magnitude bit first, each worth half the previous one
    for shift in 0..MAGNITUDE_BITS {
        if code & (1 << (MAGNITUDE_BITS - 1 - shift)) != 0 {
            delta += step >> shift;
        }
    }

    apply_delta(state, code, delta);
    state.sample()
}

/// Move the predictor by `delta` in the direction of the sign bit, then clamp.
///
/// `delta` never exceeds 315 >> 3 + 315 + 157 + 78, so the intermediate
/// predictor stays far from the i16 limits for any valid state; saturating
/// arithmetic covers states written directly through the public fields.
fn apply_delta(state: &mut AdpcmState, code: u8, delta: i16) {
    if code & SIGN_BIT != 0 {
        state.predictor = state.predictor.saturating_sub(delta);
    } else {
        state.predictor = state.predictor.saturating_add(delta);
    }

    state.clamp(code);
}
