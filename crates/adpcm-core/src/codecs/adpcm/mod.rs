//! 8-bit ADPCM Codec Implementation
//!
//! Compresses unsigned 8-bit mono samples 2:1 into 4-bit codes with an
//! adaptive step size.
//!
//! # Architecture
//!
//! The implementation is split into several modules:
//! - `tables`: Step table, index adjustment table and code layout constants
//! - `state`: Predictor/step-index state and its clamp rule
//! - `quantizer`: Per-sample encode/decode
//! - `packing`: Buffer-level encode/decode and nibble packing
//! - `codec`: Checked codec built on the packing functions

pub mod codec;
pub mod packing;
pub mod quantizer;
pub mod state;
pub mod tables;

#[cfg(test)]
mod tests;

// Re-export the main codec struct
pub use codec::AdpcmCodec;

// Re-export the raw API
pub use packing::{decode, decoded_len, encode, encoded_len};
pub use quantizer::{decode_sample, encode_sample};
pub use state::AdpcmState;
