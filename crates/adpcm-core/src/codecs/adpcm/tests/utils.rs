//! 8-bit ADPCM Test Utilities

use crate::codecs::adpcm::packing::{decode, decoded_len, encode, encoded_len};

/// Generate an unsigned 8-bit sine wave centred on 128
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration_samples` - Number of samples to generate
/// * `amplitude` - Peak deviation from 128 (0-127)
pub fn generate_sine_wave(frequency: f32, sample_rate: f32, duration_samples: usize, amplitude: u8) -> Vec<u8> {
    (0..duration_samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            let sample = 128.0 + f32::from(amplitude) * (2.0 * std::f32::consts::PI * frequency * t).sin();
            sample.round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

/// Generate seeded white noise over the full 8-bit range
pub fn generate_white_noise(duration_samples: usize, seed: u64) -> Vec<u8> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    (0..duration_samples).map(|_| rng.gen_range(0..=u8::MAX)).collect()
}

/// Encode a whole buffer into a right-sized vector
pub fn encode_vec(samples: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; encoded_len(samples.len())];
    let written = encode(samples, &mut out);
    assert_eq!(written, out.len());
    out
}

/// Decode a whole buffer into a right-sized vector
pub fn decode_vec(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; decoded_len(data.len())];
    let written = decode(data, &mut out);
    assert_eq!(written, out.len());
    out
}
