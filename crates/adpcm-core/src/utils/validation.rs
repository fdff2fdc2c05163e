//! Input validation utilities for codec operations

use crate::error::{CodecError, Result};
use crate::types::{SampleRate, SUPPORTED_CHANNELS, SUPPORTED_SAMPLE_RATES};

/// Validate raw samples before encoding
pub fn validate_samples(samples: &[u8]) -> Result<()> {
    if samples.is_empty() {
        return Err(CodecError::invalid_format("Input samples cannot be empty"));
    }

    Ok(())
}

/// Validate packed data before decoding
pub fn validate_encoded_data(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(CodecError::InvalidPayload {
            details: "Empty encoded data".to_string(),
        });
    }

    Ok(())
}

/// Validate the nominal sample rate
pub fn validate_sample_rate(sample_rate: SampleRate) -> Result<()> {
    let rate_hz = sample_rate.hz();

    if !SUPPORTED_SAMPLE_RATES.contains(&rate_hz) {
        return Err(CodecError::InvalidSampleRate {
            rate: rate_hz,
            supported: SUPPORTED_SAMPLE_RATES.to_vec(),
        });
    }

    Ok(())
}

/// Validate channel count (mono only)
pub fn validate_channels(channels: u8) -> Result<()> {
    if !SUPPORTED_CHANNELS.contains(&channels) {
        return Err(CodecError::InvalidChannelCount {
            channels,
            supported: SUPPORTED_CHANNELS.to_vec(),
        });
    }

    Ok(())
}

/// Validate that an output buffer can hold `needed` elements
pub fn validate_buffer_size(needed: usize, output_size: usize) -> Result<()> {
    if output_size < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            actual: output_size,
        });
    }

    Ok(())
}
