//! Property-based tests for the 8-bit ADPCM codec

use proptest::prelude::*;

use super::utils::*;
use crate::codecs::adpcm::packing::{decode, decoded_len, encode, encoded_len};
use crate::codecs::adpcm::quantizer::{decode_sample, encode_sample};
use crate::codecs::adpcm::state::AdpcmState;

fn valid_state() -> impl Strategy<Value = AdpcmState> {
    (0i16..=255, 0i8..=48).prop_map(|(predictor, step_index)| AdpcmState { predictor, step_index })
}

fn samples() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..512)
}

proptest! {
    /// Encoding from any valid state keeps the state normalized after every sample
    #[test]
    fn encode_keeps_state_in_bounds(mut state in valid_state(), input in samples()) {
        for sample in input {
            let code = encode_sample(sample, &mut state);
            prop_assert!(code <= 0x0F);
            prop_assert!(state.is_valid(), "{:?}", state);
        }
    }

    /// Decoding any code sequence from any valid state keeps the state normalized
    #[test]
    fn decode_keeps_state_in_bounds(mut state in valid_state(), codes in prop::collection::vec(0u8..16, 1..512)) {
        for code in codes {
            let sample = decode_sample(code, &mut state);
            prop_assert!(state.is_valid(), "{:?}", state);
            prop_assert_eq!(i16::from(sample), state.predictor);
        }
    }

    /// Encode writes 1 + ceil((N - 1) / 2) bytes and decode returns 1 + (M - 1) * 2 samples
    #[test]
    fn length_law(input in samples()) {
        let encoded = encode_vec(&input);
        prop_assert_eq!(encoded.len(), 1 + (input.len() - 1).div_ceil(2));

        let decoded = decode_vec(&encoded);
        prop_assert_eq!(decoded.len(), 1 + (encoded.len() - 1) * 2);

        if input.len() % 2 == 1 {
            prop_assert_eq!(decoded.len(), input.len());
        } else {
            prop_assert_eq!(decoded.len(), input.len() + 1);
        }
    }

    /// The first byte of either direction is the first input byte
    #[test]
    fn first_sample_identity(input in samples()) {
        let encoded = encode_vec(&input);
        prop_assert_eq!(encoded[0], input[0]);
        prop_assert_eq!(decode_vec(&encoded)[0], input[0]);
    }

    /// Repeated calls on the same input are bit-identical
    #[test]
    fn deterministic(input in samples()) {
        let mut a = vec![0u8; encoded_len(input.len())];
        let mut b = vec![0xFFu8; encoded_len(input.len())];
        encode(&input, &mut a);
        encode(&input, &mut b);
        prop_assert_eq!(&a, &b);

        let mut x = vec![0u8; decoded_len(a.len())];
        let mut y = vec![0xFFu8; decoded_len(a.len())];
        decode(&a, &mut x);
        decode(&a, &mut y);
        prop_assert_eq!(x, y);
    }

    /// The decoder reproduces the encoder's own predictor trace exactly
    #[test]
    fn decoder_tracks_encoder(input in samples()) {
        let mut state = AdpcmState::new(input[0]);
        let mut expected = vec![input[0]];
        for &sample in &input[1..] {
            encode_sample(sample, &mut state);
            expected.push(state.sample());
        }

        let decoded = decode_vec(&encode_vec(&input));
        prop_assert_eq!(&decoded[..input.len()], &expected[..]);
    }

    /// When a sample lies within one step of the predictor, the
    /// reconstruction lies within one step of the sample
    #[test]
    fn local_error_bounded_by_step(input in samples()) {
        let mut state = AdpcmState::new(input[0]);
        for &sample in &input[1..] {
            let before = state;
            let step = before.step_size() as i16;
            encode_sample(sample, &mut state);

            if (i16::from(sample) - before.predictor).abs() <= step {
                prop_assert!(
                    (i16::from(sample) - state.predictor).abs() <= step,
                    "sample {} from {:?} reconstructed as {}", sample, before, state.predictor
                );
            }
        }
    }

    /// Bytes beyond the computed length are never written
    #[test]
    fn spare_capacity_untouched(input in samples(), spare in 1usize..16) {
        let mut out = vec![0x5Au8; encoded_len(input.len()) + spare];
        let written = encode(&input, &mut out);
        prop_assert!(out[written..].iter().all(|&b| b == 0x5A));
    }
}
