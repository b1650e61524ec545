//! # Effective Stake Module
//!
//! This module weights raw stakes by wallet reputation and by how early in
//! the market window the stake was placed:
//!
//! ```text
//! effective = raw * min(reputation_bps * timing_bps / 10_000, cap_bps) / 10_000
//! ```
//!
//! All multipliers are fixed-point basis points (10_000 = 1.0x). The tier
//! thresholds and per-tier multipliers are protocol policy stored in the
//! global config, not compiled-in constants, so they can be retuned without
//! touching the computation.

pub mod effective;

pub use effective::*;
