//! Utility modules for vecsyn.

pub mod simd;
