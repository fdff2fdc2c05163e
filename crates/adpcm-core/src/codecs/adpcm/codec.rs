//! 8-bit ADPCM Codec Implementation
//!
//! Checked wrapper around the raw buffer functions in
//! [`packing`](crate::codecs::adpcm::packing).

use tracing::{debug, trace};

use crate::codecs::adpcm::packing::{self, decoded_len, encoded_len};
use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, AudioCodecExt, AudioFrame, CodecConfig, CodecInfo, SampleRate};
use crate::utils::{validate_buffer_size, validate_encoded_data, validate_samples};

/// Codec name reported in [`CodecInfo`]
pub const CODEC_NAME: &str = "ADPCM8";

/// Bits per encoded sample
pub const BITS_PER_SAMPLE: u8 = 4;

/// 4-bit ADPCM codec for unsigned 8-bit mono audio
///
/// # Example
/// ```
/// use adpcm_core::codecs::adpcm::AdpcmCodec;
/// use adpcm_core::types::AudioCodec;
///
/// let codec = AdpcmCodec::default();
///
/// let samples = vec![128u8, 130, 135, 140, 138];
/// let encoded = codec.encode(&samples).unwrap();
/// assert_eq!(encoded.len(), 3);
///
/// let decoded = codec.decode(&encoded).unwrap();
/// assert_eq!(decoded.len(), samples.len());
/// assert_eq!(decoded[0], samples[0]);
/// ```
#[derive(Debug, Clone)]
pub struct AdpcmCodec {
    /// Nominal sample rate in Hz
    sample_rate: u32,
    /// Number of channels (always 1)
    channels: u8,
}

impl AdpcmCodec {
    /// Create a new codec from configuration
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported sample rates or channel counts
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;

        let sample_rate = config.sample_rate.hz();
        debug!("Creating ADPCM8 codec: {}Hz, {}ch", sample_rate, config.channels);

        Ok(Self {
            sample_rate,
            channels: config.channels,
        })
    }

    /// Get the compression ratio (8-bit samples to 4-bit codes)
    pub fn compression_ratio(&self) -> f32 {
        0.5
    }

    /// Encode a whole frame
    ///
    /// # Errors
    ///
    /// Rejects frames that fail [`AudioFrame::validate`] or whose sample rate
    /// differs from the codec's.
    pub fn encode_frame(&self, frame: &AudioFrame) -> Result<Vec<u8>> {
        frame.validate()?;

        if frame.sample_rate.hz() != self.sample_rate {
            return Err(CodecError::InvalidSampleRate {
                rate: frame.sample_rate.hz(),
                supported: vec![self.sample_rate],
            });
        }

        self.encode(&frame.samples)
    }

    /// Decode a payload into a mono frame at the codec's sample rate
    ///
    /// # Errors
    ///
    /// Same as [`AudioCodec::decode`].
    pub fn decode_frame(&self, data: &[u8]) -> Result<AudioFrame> {
        let samples = self.decode(data)?;
        Ok(AudioFrame::new(samples, SampleRate::from_hz(self.sample_rate)))
    }
}

impl Default for AdpcmCodec {
    fn default() -> Self {
        Self {
            sample_rate: 8000,
            channels: 1,
        }
    }
}

impl AudioCodec for AdpcmCodec {
    fn encode(&self, samples: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; encoded_len(samples.len())];
        self.encode_to_buffer(samples, &mut output)?;

        trace!("ADPCM8 encoded {} samples to {} bytes", samples.len(), output.len());

        Ok(output)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; decoded_len(data.len())];
        self.decode_to_buffer(data, &mut output)?;

        trace!("ADPCM8 decoded {} bytes to {} samples", data.len(), output.len());

        Ok(output)
    }

    fn info(&self) -> CodecInfo {
        CodecInfo {
            name: CODEC_NAME,
            sample_rate: self.sample_rate,
            channels: self.channels,
            bitrate: self.sample_rate * u32::from(BITS_PER_SAMPLE),
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }
}

impl AudioCodecExt for AdpcmCodec {
    fn encode_to_buffer(&self, samples: &[u8], output: &mut [u8]) -> Result<usize> {
        validate_samples(samples)?;
        validate_buffer_size(encoded_len(samples.len()), output.len())?;

        let written = packing::encode(samples, output);

        trace!("ADPCM8 encoded {} samples to {} bytes (zero-alloc)", samples.len(), written);

        Ok(written)
    }

    fn decode_to_buffer(&self, data: &[u8], output: &mut [u8]) -> Result<usize> {
        validate_encoded_data(data)?;
        validate_buffer_size(decoded_len(data.len()), output.len())?;

        let written = packing::decode(data, output);

        trace!("ADPCM8 decoded {} bytes to {} samples (zero-alloc)", data.len(), written);

        Ok(written)
    }

    fn max_encoded_size(&self, input_samples: usize) -> usize {
        encoded_len(input_samples)
    }

    fn max_decoded_size(&self, input_bytes: usize) -> usize {
        decoded_len(input_bytes)
    }
}
