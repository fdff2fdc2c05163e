//! 8-bit ADPCM Buffer Packing
//!
//! Wire layout, no header and no length field:
//!
//! ```text
//! [0] raw first sample
//! [1] code(s1) | code(s2) << 4
//! [2] code(s3) | code(s4) << 4
//! ...
//! ```
//!
//! When the sample count is even the last code has no partner; it goes in the
//! low nibble of a final byte whose high nibble is zero. Decoding that byte
//! yields one extra trailing sample, so callers that need the exact length must
//! carry it out of band.

use tracing::debug;

use crate::codecs::adpcm::quantizer::{decode_sample, encode_sample};
use crate::codecs::adpcm::state::AdpcmState;
use crate::codecs::adpcm::tables::CODE_MASK;

/// Number of bytes [`encode`] writes for `samples` input samples
///
/// `1 + ceil((samples - 1) / 2)`, or 0 for an empty input.
pub const fn encoded_len(samples: usize) -> usize {
    if samples == 0 {
        0
    } else {
        1 + samples / 2
    }
}

/// Number of samples [`decode`] writes for `bytes` input bytes
///
/// `1 + (bytes - 1) * 2`, or 0 for an empty input.
pub const fn decoded_len(bytes: usize) -> usize {
    if bytes == 0 {
        0
    } else {
        1 + (bytes - 1) * 2
    }
}

/// Encode a buffer of 8-bit samples
///
/// The first sample is written verbatim and seeds a fresh [`AdpcmState`];
/// every later sample becomes one nibble. Each call is self-contained.
///
/// Returns the number of bytes written, or 0 (with `output` untouched) when
/// `input` is empty or `output` is shorter than [`encoded_len`].
pub fn encode(input: &[u8], output: &mut [u8]) -> usize {
    let Some((&first, rest)) = input.split_first() else {
        return 0;
    };

    let needed = encoded_len(input.len());
    if output.len() < needed {
        debug!("ADPCM encode skipped: need {} bytes, got {}", needed, output.len());
        return 0;
    }

    let mut state = AdpcmState::new(first);
    output[0] = first;

    for (byte, pair) in output[1..needed].iter_mut().zip(rest.chunks(2)) {
        let low = encode_sample(pair[0], &mut state);
        let high = pair.get(1).map_or(0, |&sample| encode_sample(sample, &mut state));
        *byte = low | (high << 4);
    }

    needed
}

/// Decode a packed buffer back to 8-bit samples
///
/// Mirrors [`encode`]: the first byte is copied verbatim and seeds the state,
/// then each byte yields two samples, low nibble first.
///
/// Returns the number of samples written, or 0 (with `output` untouched) when
/// `input` is empty or `output` is shorter than [`decoded_len`].
pub fn decode(input: &[u8], output: &mut [u8]) -> usize {
    let Some((&first, packed)) = input.split_first() else {
        return 0;
    };

    let produced = decoded_len(input.len());
    if output.len() < produced {
        debug!("ADPCM decode skipped: need {} samples, got {}", produced, output.len());
        return 0;
    }

    let mut state = AdpcmState::new(first);
    output[0] = first;

    for (&byte, pair) in packed.iter().zip(output[1..produced].chunks_exact_mut(2)) {
        pair[0] = decode_sample(byte & CODE_MASK, &mut state);
        pair[1] = decode_sample(byte >> 4, &mut state);
    }

    produced
}
