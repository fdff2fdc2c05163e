//! Codec implementations

pub mod adpcm;
