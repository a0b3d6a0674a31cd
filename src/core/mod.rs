//! Core domain models for confstash.
//!
//! The config record and the codec that carries its bytes through the
//! text-typed content column. No I/O happens here.

pub mod codec;
pub mod record;

pub use record::ConfigRecord;
