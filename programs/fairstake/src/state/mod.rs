//! State structures for the FairStake protocol

pub mod config;
pub mod market;
pub mod position;
pub mod reputation;

pub use config::*;
pub use market::*;
pub use position::*;
pub use reputation::*;
