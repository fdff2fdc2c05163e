//! # ADPCM-Core: 4-bit ADPCM for 8-bit Audio
//!
//! This library compresses unsigned 8-bit mono samples 2:1 into 4-bit
//! adaptive differential codes and expands them back. The quantizer step adapts
//! from a fixed 49-entry table, so the stream carries no side information
//! beyond the first raw sample.
//!
//! ## Layers
//!
//! - **Per-sample**: [`encode_sample`] / [`decode_sample`] on an [`AdpcmState`]
//! - **Buffer**: [`encode`] / [`decode`] with nibble packing into caller buffers;
//!   degenerate input returns 0 and never fails
//! - **Checked**: [`AdpcmCodec`] implementing [`AudioCodec`], reporting
//!   [`CodecError`]s for empty input and undersized buffers
//!
//! ## Usage
//!
//! ```rust
//! use adpcm_core::{decode, encode, decoded_len, encoded_len};
//!
//! let samples = [128u8, 132, 140, 150, 155];
//!
//! let mut packed = vec![0u8; encoded_len(samples.len())];
//! assert_eq!(encode(&samples, &mut packed), 3);
//!
//! let mut restored = vec![0u8; decoded_len(packed.len())];
//! assert_eq!(decode(&packed, &mut restored), 5);
//! assert_eq!(restored[0], 128);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use codecs::adpcm::{
    decode, decode_sample, decoded_len, encode, encode_sample, encoded_len, AdpcmCodec,
    AdpcmState,
};
pub use error::{CodecError, Result};
pub use types::{AudioCodec, AudioCodecExt, AudioFrame, CodecConfig, CodecInfo, SampleRate};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// Installs a `tracing` fmt subscriber if none is set yet. Safe to call
/// multiple times.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for future setup steps.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("ADPCM-Core v{} initialized", VERSION);
    tracing::info!(
        "Codec: {} ({} step sizes)",
        codecs::adpcm::codec::CODEC_NAME,
        codecs::adpcm::tables::STEP_TABLE.len()
    );

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        codec_name: codecs::adpcm::codec::CODEC_NAME,
        step_table_len: codecs::adpcm::tables::STEP_TABLE.len(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Name of the implemented codec
    pub codec_name: &'static str,
    /// Number of entries in the quantizer step table
    pub step_table_len: usize,
}
