//! Resemble AI HTTP bridging: request building, response interpretation,
//! and the fail-soft outcome contract.

mod http;

pub mod client;
pub mod outcome;
pub mod types;

pub use client::ResembleClient;
pub use outcome::RequestOutcome;
pub use types::{SynthesizePayload, SAMPLE_RATE};
