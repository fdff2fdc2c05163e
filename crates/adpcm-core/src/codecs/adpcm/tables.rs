//! 8-bit ADPCM Tables and Constants
//!
//! The step and index tables are part of the bitstream contract. Changing any
//! value breaks compatibility with every stream produced by earlier builds.

/// Number of magnitude bits in a code (the sign bit sits directly above them)
pub const MAGNITUDE_BITS: u32 = 3;

/// Sign bit of a 4-bit code
pub const SIGN_BIT: u8 = 1 << MAGNITUDE_BITS;

/// Mask selecting a full code (sign + magnitude) from a byte
pub const CODE_MASK: u8 = (SIGN_BIT << 1) - 1;

/// Largest valid index into [`STEP_TABLE`]
pub const MAX_STEP_INDEX: i8 = (STEP_TABLE.len() - 1) as i8;

/// Largest reconstructed sample value
pub const MAX_PREDICTOR: i16 = u8::MAX as i16;

/// Quantizer step sizes for the 8-bit sample range (49 entries)
pub const STEP_TABLE: [u16; 49] = [
    1, 1, 1, 1, 2, 2, 2, 3, 3, 4,
    4, 5, 5, 6, 7, 8, 9, 10, 11, 13,
    14, 16, 18, 20, 22, 25, 28, 31, 35, 39,
    44, 49, 55, 61, 68, 76, 85, 95, 106, 118,
    132, 147, 164, 183, 204, 228, 254, 283, 315,
];

/// Step index adjustment, indexed by the 4-bit code
///
/// Codes `n` and `n | SIGN_BIT` share the same entry: the sign only steers the
/// predictor, never the step adaptation.
pub const INDEX_TABLE: [i8; 16] = [
    -1, -1, -1, -1, 2, 4, 6, 8,
    -1, -1, -1, -1, 2, 4, 6, 8,
];
