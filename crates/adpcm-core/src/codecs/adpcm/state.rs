//! 8-bit ADPCM State Management
//!
//! [`AdpcmState`] is a plain pair of registers. Both fields are public so the
//! state can be mirrored into memory that an interrupt handler or DMA engine
//! reads directly. No locking happens here: an external reader may observe the
//! predictor written but not yet clamped, or a predictor from step `n` with a
//! step index from step `n - 1`. Each field is only ever read on its own, so
//! that is tolerated; callers that share a state with an ISR own the critical
//! section.

use crate::codecs::adpcm::tables::{
    CODE_MASK, INDEX_TABLE, MAX_PREDICTOR, MAX_STEP_INDEX, STEP_TABLE,
};

/// Predictor and step index carried between samples
///
/// A fresh state is seeded from the first sample of every buffer. After every
/// encode or decode step `predictor` is in `0..=255` and `step_index` is in
/// `0..=48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct AdpcmState {
    /// Current reconstructed sample estimate
    pub predictor: i16,

    /// Index into the step table
    pub step_index: i8,
}

impl AdpcmState {
    /// Create a state seeded with the first sample of a stream
    pub fn new(first_sample: u8) -> Self {
        Self {
            predictor: i16::from(first_sample),
            step_index: 0,
        }
    }

    /// Re-seed the state: predictor = `first_sample`, step index = 0
    pub fn init(&mut self, first_sample: u8) {
        self.predictor = i16::from(first_sample);
        self.step_index = 0;
    }

    /// Current quantizer step size
    ///
    /// An out-of-range index (only reachable by writing the public field
    /// directly) is saturated into the table.
    pub fn step_size(&self) -> u16 {
        STEP_TABLE[self.step_index.clamp(0, MAX_STEP_INDEX) as usize]
    }

    /// Check that both registers are inside their normalized ranges
    pub fn is_valid(&self) -> bool {
        (0..=MAX_PREDICTOR).contains(&self.predictor)
            && (0..=MAX_STEP_INDEX).contains(&self.step_index)
    }

    /// Normalize the state after a predictor update
    ///
    /// Saturates the predictor into the 8-bit range, then moves the step index
    /// by the table delta for `code` and saturates it into the step table.
    /// Both encode and decode paths call this exactly once per sample.
    pub fn clamp(&mut self, code: u8) {
        self.predictor = self.predictor.clamp(0, MAX_PREDICTOR);

        let delta = INDEX_TABLE[usize::from(code & CODE_MASK)];
        self.step_index = self.step_index.saturating_add(delta).clamp(0, MAX_STEP_INDEX);
    }

    /// Reconstructed sample for the current predictor
    pub fn sample(&self) -> u8 {
        self.predictor.clamp(0, MAX_PREDICTOR) as u8
    }
}
