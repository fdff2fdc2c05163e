//! 8-bit ADPCM Test Modules
//!
//! This module organizes the test suite for the ADPCM codec implementation.

mod utils;

mod encoder_tests;
mod property_tests;
