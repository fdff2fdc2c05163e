//! Core types and traits for the codec library
//!
//! This module defines the checked codec API, codec information and the
//! configuration accepted by [`AdpcmCodec`](crate::codecs::adpcm::AdpcmCodec).

use crate::error::{CodecError, Result};
use std::fmt;

/// Primary trait for audio codecs
///
/// Every call is self-contained: no state survives between two `encode` or
/// two `decode` calls.
pub trait AudioCodec: Send + Sync {
    /// Encode 8-bit unsigned samples to compressed data
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty
    fn encode(&self, samples: &[u8]) -> Result<Vec<u8>>;

    /// Decode compressed data to 8-bit unsigned samples
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Get codec information
    fn info(&self) -> CodecInfo;
}

/// Extended trait for codecs that write into caller-provided buffers
pub trait AudioCodecExt: AudioCodec {
    /// Encode into a pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of bytes written to output buffer
    fn encode_to_buffer(&self, samples: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Decode into a pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of samples written to output buffer
    fn decode_to_buffer(&self, data: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Get maximum encoded size for a given input size
    fn max_encoded_size(&self, input_samples: usize) -> usize;

    /// Get maximum decoded size for a given input size
    fn max_decoded_size(&self, input_bytes: usize) -> usize;
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Codec name
    pub name: &'static str,
    /// Nominal sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Bits per encoded sample
    pub bits_per_sample: u8,
}

/// Sample rate enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRate {
    /// 8 kHz (narrowband)
    Rate8000,
    /// 11.025 kHz
    Rate11025,
    /// 16 kHz (wideband)
    Rate16000,
    /// 22.05 kHz
    Rate22050,
    /// 32 kHz
    Rate32000,
    /// 44.1 kHz (CD quality)
    Rate44100,
    /// 48 kHz (professional)
    Rate48000,
    /// Custom sample rate
    Custom(u32),
}

/// Sample rates accepted by [`CodecConfig::validate`]
pub const SUPPORTED_SAMPLE_RATES: &[u32] = &[8000, 11025, 16000, 22050, 32000, 44100, 48000];

/// Channel counts accepted by [`CodecConfig::validate`]
pub const SUPPORTED_CHANNELS: &[u8] = &[1];

impl SampleRate {
    /// Get the sample rate value in Hz
    pub fn hz(self) -> u32 {
        match self {
            Self::Rate8000 => 8000,
            Self::Rate11025 => 11025,
            Self::Rate16000 => 16000,
            Self::Rate22050 => 22050,
            Self::Rate32000 => 32000,
            Self::Rate44100 => 44100,
            Self::Rate48000 => 48000,
            Self::Custom(rate) => rate,
        }
    }

    /// Create from Hz value
    pub fn from_hz(hz: u32) -> Self {
        match hz {
            8000 => Self::Rate8000,
            11025 => Self::Rate11025,
            16000 => Self::Rate16000,
            22050 => Self::Rate22050,
            32000 => Self::Rate32000,
            44100 => Self::Rate44100,
            48000 => Self::Rate48000,
            rate => Self::Custom(rate),
        }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::Rate8000
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

/// Audio frame structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFrame {
    /// Unsigned 8-bit samples
    pub samples: Vec<u8>,
    /// Sample rate
    pub sample_rate: SampleRate,
    /// Number of channels
    pub channels: u8,
}

impl AudioFrame {
    /// Create a new mono audio frame
    pub fn new(samples: Vec<u8>, sample_rate: SampleRate) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    /// Get the frame duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        if self.channels == 0 || self.sample_rate.hz() == 0 {
            return 0.0;
        }
        let samples_per_channel = self.samples.len() / self.channels as usize;
        (samples_per_channel as f64 * 1000.0) / self.sample_rate.hz() as f64
    }

    /// Validate the frame structure
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_CHANNELS.contains(&self.channels) {
            return Err(CodecError::InvalidChannelCount {
                channels: self.channels,
                supported: SUPPORTED_CHANNELS.to_vec(),
            });
        }

        if self.samples.is_empty() {
            return Err(CodecError::invalid_format("Frame cannot be empty"));
        }

        Ok(())
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Nominal sample rate, used for bitrate and duration reporting only
    pub sample_rate: SampleRate,
    /// Number of channels (mono only)
    pub channels: u8,
}

impl CodecConfig {
    /// Create a new 8 kHz mono configuration
    pub fn new() -> Self {
        Self {
            sample_rate: SampleRate::default(),
            channels: 1,
        }
    }

    /// Set sample rate
    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set channel count
    pub fn with_channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::utils::validate_sample_rate(self.sample_rate)?;
        crate::utils::validate_channels(self.channels)?;
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
