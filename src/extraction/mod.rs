//! Bit harvesting and debiasing stages.
//!
//! This module converts pixel buffers into the pipeline's bitstreams:
//! least-significant-bit harvesting from one fixed color channel, XOR
//! combination of the two source streams, and Von Neumann bias removal.

mod combine;
mod lsb;
mod von_neumann;

pub use combine::Combiner;
pub use lsb::{ChannelPolicy, LsbExtractor, ParseChannelError};
pub use von_neumann::VonNeumannExtractor;
